//! Property-based tests for the `Optional<T>` combinator algebra.
//!
//! - **Functor laws**: identity and composition for `map` / `fmap`
//! - **Monad laws**: left identity, right identity and associativity for
//!   `and_then` / `flat_map`
//! - **Structural properties**: `flatten`, `zip`, `xor`, `take`, `replace`
//!   and the conversions to and from `Option`

#![cfg(feature = "typeclass")]

use presence::prelude::*;
use proptest::prelude::*;

fn optional_i32() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

fn optional_string() -> impl Strategy<Value = Optional<String>> {
    any::<Option<String>>().prop_map(Optional::from)
}

fn halve(value: i32) -> Optional<i32> {
    if value % 2 == 0 {
        present(value / 2)
    } else {
        absent()
    }
}

fn decrement(value: i32) -> Optional<i32> {
    from_nullable(value.checked_sub(1))
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity function returns the original value
    #[test]
    fn prop_map_identity_law(value in optional_i32()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_map_composition_law(value in optional_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Composition Law across a type change
    #[test]
    fn prop_map_string_composition_law(value in optional_string()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap agrees with map
    #[test]
    fn prop_fmap_agrees_with_map(value in optional_i32()) {
        let function = |n: i32| n.wrapping_sub(7);
        prop_assert_eq!(value.fmap(function), value.map(function));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: present(a).and_then(f) == f(a)
    #[test]
    fn prop_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(present(value).and_then(halve), halve(value));
    }

    /// Right Identity: m.and_then(present) == m
    #[test]
    fn prop_right_identity_law(value in optional_i32()) {
        prop_assert_eq!(value.and_then(present), value);
    }

    /// Associativity: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
    #[test]
    fn prop_associativity_law(value in optional_i32()) {
        let left = value.and_then(halve).and_then(decrement);
        let right = value.and_then(|x| halve(x).and_then(decrement));
        prop_assert_eq!(left, right);
    }

    /// flat_map agrees with and_then
    #[test]
    fn prop_flat_map_agrees_with_and_then(value in optional_i32()) {
        prop_assert_eq!(value.flat_map(halve), value.and_then(halve));
    }
}

// =============================================================================
// Structural Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_present_unwraps_to_value(value in any::<i32>()) {
        let optional = present(value);
        prop_assert!(optional.is_present());
        prop_assert_eq!(optional.unwrap(), value);
    }

    #[test]
    fn prop_flatten_of_present_is_inner(value in optional_i32()) {
        prop_assert_eq!(present(value).flatten(), value);
    }

    #[test]
    fn prop_zip_is_present_iff_both_are(left in optional_i32(), right in optional_i32()) {
        let zipped = left.zip(right);
        prop_assert_eq!(zipped.is_present(), left.is_present() && right.is_present());
        let expected = if zipped.is_present() { (left, right) } else { (absent(), absent()) };
        prop_assert_eq!(zipped.unzip(), expected);
    }

    #[test]
    fn prop_xor_is_present_iff_exactly_one_is(left in optional_i32(), right in optional_i32()) {
        prop_assert_eq!(left.xor(right).is_present(), left.is_present() != right.is_present());
        prop_assert_eq!(left.xor(right), right.xor(left));
    }

    #[test]
    fn prop_and_or_select_operands(left in optional_i32(), right in optional_i32()) {
        prop_assert_eq!(left.and(right), if left.is_present() { right } else { absent() });
        prop_assert_eq!(left.or(right), if left.is_present() { left } else { right });
    }

    #[test]
    fn prop_take_snapshots_and_empties(value in optional_i32()) {
        let mut receiver = value;
        prop_assert_eq!(receiver.take(), value);
        prop_assert!(receiver.is_absent());
    }

    #[test]
    fn prop_replace_snapshots_and_fills(value in optional_i32(), replacement in any::<i32>()) {
        let mut receiver = value;
        prop_assert_eq!(receiver.replace(replacement), value);
        prop_assert_eq!(receiver, present(replacement));
    }

    #[test]
    fn prop_option_conversion_round_trips(value in any::<Option<i32>>()) {
        let optional = from_nullable(value);
        prop_assert_eq!(optional.is_present(), value.is_some());
        prop_assert_eq!(optional.into_option(), value);
    }

    #[test]
    fn prop_contains_agrees_with_equality(value in optional_i32(), probe in any::<i32>()) {
        prop_assert_eq!(value.contains(&probe), value == present(probe));
    }
}

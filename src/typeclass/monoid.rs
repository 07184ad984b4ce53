//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};
use crate::optional::Optional;

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element, starting from [`empty`](Self::empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::{Monoid, Sum};
    ///
    /// let total = Optional::combine_all([
    ///     Optional::Present(Sum(1)),
    ///     Optional::Absent,
    ///     Optional::Present(Sum(4)),
    /// ]);
    /// assert_eq!(total, Optional::Present(Sum(5)));
    ///
    /// assert_eq!(Optional::<Sum<i32>>::combine_all([]), Optional::Absent);
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                #[inline]
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(
    i32 => 1,
    i64 => 1,
    u32 => 1,
    u64 => 1,
    usize => 1,
    f64 => 1.0,
);

/// `Absent` is the identity, so any `Semigroup` lifts to a `Monoid`.
impl<T: Semigroup> Monoid for Optional<T> {
    #[inline]
    fn empty() -> Self {
        Self::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_empty_is_identity() {
        let value = Optional::Present(String::from("x"));
        assert_eq!(Optional::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Optional::empty()), value);
    }

    #[rstest]
    fn product_identity() {
        assert_eq!(Product::<i64>::empty().combine(Product(7)), Product(7));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
    }

    #[rstest]
    fn combine_all_strings() {
        let words = [
            Optional::Present(String::from("a")),
            Optional::Present(String::from("b")),
        ];
        assert_eq!(
            Optional::combine_all(words),
            Optional::Present(String::from("ab"))
        );
    }
}

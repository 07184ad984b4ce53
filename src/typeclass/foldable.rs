//! Foldable type class - reducing a structure to a summary value.
//!
//! An `Optional` folds like a collection of zero or one elements.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::{Foldable, Sum};
//!
//! assert_eq!(Optional::Present(3).fold_left(10, |total, n| total + n), 13);
//! assert_eq!(Optional::<i32>::Absent.fold_left(10, |total, n| total + n), 10);
//!
//! let sum: Sum<i32> = Optional::Present(4).fold_map(Sum);
//! assert_eq!(sum, Sum(4));
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::optional::Optional;

/// A structure whose elements can be folded into a single value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
/// - `is_empty`, `length`: structural queries answered without consuming
pub trait Foldable: TypeConstructor {
    /// Folds from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Maps every element to a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }
}

impl<A> Foldable for Optional<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Present(element) => function(init, element),
            Self::Absent => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Present(element) => function(element, init),
            Self::Absent => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_absent()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_present())
    }
}

//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Semigroup;
//!
//! let greeting = Optional::Present(String::from("hello, "));
//! let name = Optional::Present(String::from("ferris"));
//! assert_eq!(greeting.combine(name), Optional::Present(String::from("hello, ferris")));
//!
//! // An absent side is neutral.
//! let alone = Optional::Present(String::from("alone")).combine(Optional::Absent);
//! assert_eq!(alone, Optional::Present(String::from("alone")));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};
use crate::optional::Optional;

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines every element, or returns `None` for an empty iterator.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Present values combine; `Absent` is neutral on either side.
impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }
}

//! Numeric wrapper types selecting an algebraic operation.
//!
//! The same number can be combined by addition ([`Sum`]) or multiplication
//! ([`Product`]); the wrapper decides which `Semigroup` instance applies.

/// The additive semigroup/monoid (identity: `0`).
///
/// # Examples
///
/// ```rust
/// use presence::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// The multiplicative semigroup/monoid (identity: `1`).
///
/// # Examples
///
/// ```rust
/// use presence::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! Self::pure(()).map2(fa, |_, a| a) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Applicative;
//!
//! let width: Optional<u32> = <Optional<()>>::pure(3);
//! let area = width.map2(Optional::Present(4), |w, h| w * h);
//! assert_eq!(area, Optional::Present(12));
//! ```

use super::functor::Functor;
use crate::optional::Optional;

/// A functor that can lift plain values and combine two independent contexts.
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with `function`.
    ///
    /// For `Optional`, the result is present only if both inputs are.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |left, right| (left, right))
    }
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }
}

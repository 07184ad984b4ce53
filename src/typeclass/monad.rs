//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Monad;
//!
//! fn parse_positive(input: &str) -> Optional<i32> {
//!     Optional::from(input.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Optional::Present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Optional::Present(n * 2));
//! assert_eq!(result, Optional::Present(84));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// An applicative whose next step may depend on the previous result.
pub trait Monad: Applicative {
    /// Runs `function` on the value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.and_then(function)
    }
}

//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Functor;
//!
//! let present: Optional<i32> = Optional::Present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::Present("5".to_string()));
//!
//! let absent: Optional<i32> = Optional::Absent;
//! assert_eq!(absent.fmap(|n| n.to_string()), Optional::Absent);
//! ```

use super::higher::TypeConstructor;
use crate::optional::Optional;

/// A type class for types that can have a function mapped over their contents.
///
/// `fmap` transforms the inner value while preserving the container's
/// shape: a `Present` stays `Present`, an `Absent` stays `Absent`.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference of the value inside the functor,
    /// leaving the functor untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Functor;
    ///
    /// let name = Optional::Present(String::from("ferris"));
    /// assert_eq!(name.fmap_ref(String::len), Optional::Present(6));
    /// assert_eq!(name, Optional::Present(String::from("ferris")));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Discards the inner value, keeping the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

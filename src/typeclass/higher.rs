//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] records the applied type (`Inner`) and how to
//! re-apply the constructor to another type (`WithType<B>`), which is enough
//! to state `Functor`, `Applicative` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::TypeConstructor;
//!
//! fn retype<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Optional<String> = retype(Optional::Present(42));
//! assert_eq!(absent, Optional::Absent);
//! ```

use crate::optional::Optional;

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

//! Type class instances for [`Optional`](crate::optional::Optional).
//!
//! The traits here state the algebra that `Optional`'s combinators obey, so
//! generic code can rely on it:
//!
//! - [`Functor`]: `fmap` agrees with [`Optional::map`](crate::optional::Optional::map)
//! - [`Applicative`]: `pure` is `Present`, `map2` pairs two presents
//! - [`Monad`]: `flat_map` agrees with [`Optional::and_then`](crate::optional::Optional::and_then)
//! - [`Foldable`]: an `Optional` folds as zero or one elements
//! - [`Semigroup`], [`Monoid`]: present values combine, `Absent` is the identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types; [`TypeConstructor`] emulates them
//! with generic associated types.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::{Applicative, Monad};
//!
//! fn checked_ratio(numerator: Optional<i32>, denominator: Optional<i32>) -> Optional<i32> {
//!     numerator
//!         .product(denominator)
//!         .flat_map(|(n, d)| Optional::from(n.checked_div(d)))
//! }
//!
//! assert_eq!(checked_ratio(Optional::Present(10), Optional::Present(2)), Optional::Present(5));
//! assert_eq!(checked_ratio(Optional::Present(10), Optional::Present(0)), Optional::Absent);
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};

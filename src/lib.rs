//! # presence
//!
//! An optional-value type for Rust with a lawful combinator library and an
//! exhaustiveness-checked match engine.
//!
//! ## Overview
//!
//! - **Optional**: [`Optional<T>`](optional::Optional) holds exactly one value
//!   (`Present`) or none (`Absent`), with combinators for transforming,
//!   chaining and safely unwrapping it.
//! - **Matching**: a builder-based [match engine](matching) that rejects
//!   duplicate arms and, unless asked to be loose, missing arms.
//! - **Errors**: [`UnwrapError`](error::UnwrapError) and
//!   [`MatchError`](error::MatchError), unified by
//!   [`OptionalError`](error::OptionalError).
//! - **Constructors**: [`present`](constructors::present),
//!   [`absent`](constructors::absent),
//!   [`from_nullable`](constructors::from_nullable) and free match functions.
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Semigroup and
//!   Monoid instances.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and their `Optional` instances (default)
//! - `serde`: `Serialize`/`Deserialize` with the same shape as `Option<T>`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use presence::prelude::*;
//!
//! let port = from_nullable("8080".parse::<u16>().ok())
//!     .filter(|port| *port > 1024)
//!     .map(|port| port + 1);
//!
//! let message = port.match_arms(|arms| {
//!     arms.on_present(|port| format!("using port {port}"))?;
//!     arms.on_absent(|| "no usable port".to_string())?;
//!     Ok(())
//! });
//!
//! assert_eq!(message, Ok("using port 8081".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the `Optional` type, its constructors, the match builder and
/// the error types.
///
/// # Usage
///
/// ```rust
/// use presence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::constructors::{absent, from_nullable, lmatch, match_optional, present};
    pub use crate::error::{Arm, MatchError, OptionalError, UnwrapError};
    pub use crate::matching::{Exhaustiveness, MatchArms};
    pub use crate::optional::Optional;
    pub use crate::present_or_return;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod constructors;
pub mod error;
pub mod matching;
pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

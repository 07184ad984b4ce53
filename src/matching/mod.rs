//! Exhaustiveness-checked matching on [`Optional`](crate::optional::Optional).
//!
//! A match is expressed as a block that registers one handler per arm on a
//! [`MatchArms`] builder. After the block returns, the engine:
//!
//! 1. rejects the match if the block failed, including a duplicate arm
//!    ([`MatchError::DuplicateArm`](crate::error::MatchError::DuplicateArm));
//! 2. under [`Exhaustiveness::Exhaustive`], rejects the match if an arm is
//!    missing ([`MatchError::NonExhaustive`](crate::error::MatchError::NonExhaustive));
//! 3. runs the handler for the optional's variant.
//!
//! Under [`Exhaustiveness::Loose`], a variant without a handler yields
//! `Optional::Absent`.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//!
//! fn describe(count: Optional<usize>) -> String {
//!     count
//!         .match_arms(|arms| {
//!             arms.on_present(|count| format!("{count} unread"))?;
//!             arms.on_absent(|| "inbox not loaded".to_string())?;
//!             Ok(())
//!         })
//!         .unwrap_or_else(|error| error.to_string())
//! }
//!
//! assert_eq!(describe(Optional::Present(3)), "3 unread");
//! assert_eq!(describe(Optional::Absent), "inbox not loaded");
//! ```

mod arms;
mod engine;

pub use arms::MatchArms;
pub use engine::Exhaustiveness;

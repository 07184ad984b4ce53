//! Error types surfaced by [`Optional`](crate::optional::Optional) and the match engine.
//!
//! There are two families of failure:
//!
//! - [`UnwrapError`]: a value was forced out of an `Absent` optional.
//! - [`MatchError`]: a match block registered an arm twice, or left an arm
//!   uncovered under exhaustive matching.
//!
//! [`OptionalError`] unifies both so that a function can propagate either
//! with `?`.
//!
//! # Examples
//!
//! ```rust
//! use presence::error::{OptionalError, UnwrapError};
//! use presence::optional::Optional;
//!
//! fn double(optional: Optional<i32>) -> Result<i32, OptionalError> {
//!     let value = optional.try_unwrap()?;
//!     Ok(value * 2)
//! }
//!
//! assert_eq!(double(Optional::Present(21)), Ok(42));
//! assert_eq!(
//!     double(Optional::Absent),
//!     Err(OptionalError::Unwrap(UnwrapError::default()))
//! );
//! ```

use std::fmt;

/// The message carried by an [`UnwrapError`] when no custom message is given.
pub const DEFAULT_UNWRAP_MESSAGE: &str = "called unwrap on an absent value";

/// Raised when the value of an `Absent` optional is forced.
///
/// The message defaults to [`DEFAULT_UNWRAP_MESSAGE`]; `expect`-style
/// operations replace it with the caller's message.
///
/// # Examples
///
/// ```rust
/// use presence::error::UnwrapError;
///
/// assert_eq!(UnwrapError::default().to_string(), "called unwrap on an absent value");
/// assert_eq!(UnwrapError::new("config missing").to_string(), "config missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Creates an error carrying a custom message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for UnwrapError {
    fn default() -> Self {
        Self::new(DEFAULT_UNWRAP_MESSAGE)
    }
}

/// One of the two arms of a match block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arm {
    /// The arm handling `Optional::Present`.
    Present,
    /// The arm handling `Optional::Absent`.
    Absent,
}

impl fmt::Display for Arm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => formatter.write_str("`Present`"),
            Self::Absent => formatter.write_str("`Absent`"),
        }
    }
}

/// Raised by the match engine when a match block is malformed.
///
/// # Examples
///
/// ```rust
/// use presence::error::{Arm, MatchError};
///
/// let error = MatchError::NonExhaustive { missing: vec![Arm::Present, Arm::Absent] };
/// assert_eq!(
///     error.to_string(),
///     "non-exhaustive patterns: `Present` and `Absent` not covered"
/// );
///
/// let error = MatchError::DuplicateArm(Arm::Absent);
/// assert_eq!(error.to_string(), "`Absent` arm already specified");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The same arm was registered twice within one match block.
    #[error("{0} arm already specified")]
    DuplicateArm(Arm),
    /// Exhaustive matching was requested but some arms were never registered.
    #[error("non-exhaustive patterns: {} not covered", join_arms(.missing))]
    NonExhaustive {
        /// The uncovered arms, `Present` before `Absent`.
        missing: Vec<Arm>,
    },
}

fn join_arms(arms: &[Arm]) -> String {
    arms.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionalError {
    /// An absent value was forced.
    #[error(transparent)]
    Unwrap(#[from] UnwrapError),
    /// A match block was malformed.
    #[error(transparent)]
    Match(#[from] MatchError),
}

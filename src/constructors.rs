//! Free-standing constructors and match entry points.
//!
//! These are plain re-exports through [`crate::prelude`]; nothing is
//! injected into a global namespace.
//!
//! # Examples
//!
//! ```rust
//! use presence::prelude::*;
//!
//! let total = present(1).zip(from_nullable(Some(2))).map(|(a, b)| a + b);
//! assert_eq!(total, present(3));
//!
//! let result = match_optional(total, |arms| {
//!     arms.on_present(|value| value * 10)?;
//!     arms.on_absent(|| 0)?;
//!     Ok(())
//! });
//! assert_eq!(result, Ok(30));
//! ```

use crate::error::MatchError;
use crate::matching::MatchArms;
use crate::optional::Optional;

/// Wraps `value` in `Optional::Present`.
#[inline]
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Returns `Optional::Absent`.
#[inline]
pub const fn absent<T>() -> Optional<T> {
    Optional::Absent
}

/// Maps a nullable input to an `Optional`: `None` becomes `Absent`, anything
/// else becomes `Present`.
///
/// # Examples
///
/// ```rust
/// use presence::constructors::{absent, from_nullable, present};
///
/// let environment = std::collections::HashMap::from([("HOME", "/root")]);
///
/// assert_eq!(from_nullable(environment.get("HOME").copied()), present("/root"));
/// assert_eq!(from_nullable(environment.get("SHELL").copied()), absent());
/// ```
#[inline]
pub fn from_nullable<T>(value: Option<T>) -> Optional<T> {
    Optional::from(value)
}

/// Exhaustive match on `optional`; see [`Optional::match_arms`].
///
/// # Errors
///
/// Returns [`MatchError`] if the block registers an arm twice or leaves one
/// uncovered.
#[inline]
pub fn match_optional<'a, T, R, B>(optional: Optional<T>, block: B) -> Result<R, MatchError>
where
    B: FnOnce(&mut MatchArms<'a, T, R>) -> Result<(), MatchError>,
{
    optional.match_arms(block)
}

/// Loose match on `optional`; see [`Optional::lmatch`].
///
/// # Errors
///
/// Returns [`MatchError::DuplicateArm`] if the block registers an arm twice.
#[inline]
pub fn lmatch<'a, T, R, B>(optional: Optional<T>, block: B) -> Result<Optional<R>, MatchError>
where
    B: FnOnce(&mut MatchArms<'a, T, R>) -> Result<(), MatchError>,
{
    optional.lmatch(block)
}

/// Extracts the present value, or returns `Optional::Absent` from the
/// enclosing function.
///
/// The enclosing function must return an `Optional`.
///
/// # Examples
///
/// ```rust
/// use presence::optional::Optional;
/// use presence::present_or_return;
///
/// fn shout(word: Optional<&str>) -> Optional<String> {
///     let word = present_or_return!(word);
///     Optional::Present(word.to_uppercase())
/// }
///
/// assert_eq!(shout(Optional::Present("hello")), Optional::Present("HELLO".to_string()));
/// assert_eq!(shout(Optional::Absent), Optional::Absent);
/// ```
#[macro_export]
macro_rules! present_or_return {
    ($optional:expr $(,)?) => {
        match $optional {
            $crate::optional::Optional::Present(value) => value,
            $crate::optional::Optional::Absent => return $crate::optional::Optional::Absent,
        }
    };
}

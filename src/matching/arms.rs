//! The arm registry filled in by a match block.

use crate::error::{Arm, MatchError};
use crate::optional::Optional;

type PresentHandler<'a, T, R> = Box<dyn FnOnce(T) -> R + 'a>;
type AbsentHandler<'a, R> = Box<dyn FnOnce() -> R + 'a>;

/// Collects the handlers of one match invocation.
///
/// A `MatchArms` is created fresh by every call to
/// [`Optional::match_with`](crate::optional::Optional::match_with) and its
/// siblings, handed to the caller's block by mutable reference, and consumed
/// by the dispatch step. It never outlives a single match.
///
/// Each arm may be registered at most once; a second registration returns
/// [`MatchError::DuplicateArm`] so the block can abort with `?`. The
/// duplicate is also recorded, so the match fails even if the block
/// discards that error.
///
/// # Examples
///
/// ```rust
/// use presence::optional::Optional;
///
/// let label = Optional::Present(3).match_arms(|arms| {
///     arms.on_present(|n| format!("{n} items"))?
///         .on_absent(|| "empty".to_string())?;
///     Ok(())
/// });
///
/// assert_eq!(label.unwrap(), "3 items");
/// ```
pub struct MatchArms<'a, T, R> {
    present: Optional<PresentHandler<'a, T, R>>,
    absent: Optional<AbsentHandler<'a, R>>,
    duplicate: Optional<Arm>,
}

impl<'a, T, R> MatchArms<'a, T, R> {
    pub(crate) const fn new() -> Self {
        Self {
            present: Optional::Absent,
            absent: Optional::Absent,
            duplicate: Optional::Absent,
        }
    }

    /// Registers the handler run when the optional is `Present`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DuplicateArm`] if a present handler was already
    /// registered in this block. The first handler stays in place and the
    /// match fails with the same error.
    pub fn on_present<F>(&mut self, handler: F) -> Result<&mut Self, MatchError>
    where
        F: FnOnce(T) -> R + 'a,
    {
        if self.present.is_present() {
            return Err(self.reject_duplicate(Arm::Present));
        }
        self.present = Optional::Present(Box::new(handler));
        Ok(self)
    }

    /// Registers the handler run when the optional is `Absent`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DuplicateArm`] if an absent handler was already
    /// registered in this block. The first handler stays in place and the
    /// match fails with the same error.
    pub fn on_absent<F>(&mut self, handler: F) -> Result<&mut Self, MatchError>
    where
        F: FnOnce() -> R + 'a,
    {
        if self.absent.is_present() {
            return Err(self.reject_duplicate(Arm::Absent));
        }
        self.absent = Optional::Present(Box::new(handler));
        Ok(self)
    }

    fn reject_duplicate(&mut self, arm: Arm) -> MatchError {
        self.duplicate.get_or_insert(arm);
        MatchError::DuplicateArm(arm)
    }

    /// Fails with the first duplicate registration, if the block made one.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DuplicateArm`] naming the first arm that was
    /// registered twice.
    pub(crate) fn ensure_unique(&self) -> Result<(), MatchError> {
        match self.duplicate {
            Optional::Present(arm) => Err(MatchError::DuplicateArm(arm)),
            Optional::Absent => Ok(()),
        }
    }

    /// Returns `true` if a handler is registered for `arm`.
    pub const fn covers(&self, arm: Arm) -> bool {
        match arm {
            Arm::Present => self.present.is_present(),
            Arm::Absent => self.absent.is_present(),
        }
    }

    /// Returns the arms without a handler, `Present` before `Absent`.
    pub fn missing(&self) -> Vec<Arm> {
        [Arm::Present, Arm::Absent]
            .into_iter()
            .filter(|arm| !self.covers(*arm))
            .collect()
    }

    /// Runs the handler matching the variant of `optional`, if one was registered.
    ///
    /// An uncovered variant yields `Absent`.
    pub(crate) fn dispatch(self, optional: Optional<T>) -> Optional<R> {
        match (optional, self.present, self.absent) {
            (Optional::Present(value), Optional::Present(handler), _) => {
                Optional::Present(handler(value))
            }
            (Optional::Absent, _, Optional::Present(handler)) => Optional::Present(handler()),
            _ => Optional::Absent,
        }
    }

    /// Checks that both arms are covered.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NonExhaustive`] naming every uncovered arm.
    pub(crate) fn into_exhaustive(self) -> Result<ExhaustiveArms<'a, T, R>, MatchError> {
        let missing = self.missing();
        match (self.present, self.absent) {
            (Optional::Present(present), Optional::Present(absent)) => {
                Ok(ExhaustiveArms { present, absent })
            }
            _ => Err(MatchError::NonExhaustive { missing }),
        }
    }
}

impl<T, R> std::fmt::Debug for MatchArms<'_, T, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MatchArms")
            .field("present", &self.present.is_present())
            .field("absent", &self.absent.is_present())
            .field("duplicate", &self.duplicate)
            .finish()
    }
}

/// A registry known to cover both arms.
pub(crate) struct ExhaustiveArms<'a, T, R> {
    present: PresentHandler<'a, T, R>,
    absent: AbsentHandler<'a, R>,
}

impl<T, R> ExhaustiveArms<'_, T, R> {
    pub(crate) fn dispatch(self, optional: Optional<T>) -> R {
        match optional {
            Optional::Present(value) => (self.present)(value),
            Optional::Absent => (self.absent)(),
        }
    }
}

static_assertions::assert_not_impl_any!(MatchArms<'static, i32, i32>: Send, Sync);

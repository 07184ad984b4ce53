//! Match entry points on `Optional`.

use super::MatchArms;
use crate::error::MatchError;
use crate::optional::Optional;

/// Whether a match requires both arms to be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Exhaustiveness {
    /// Both arms must be registered; a missing arm is a
    /// [`MatchError::NonExhaustive`] error raised before dispatch.
    #[default]
    Exhaustive,
    /// Arms may be omitted; an uncovered variant yields `Absent`.
    Loose,
}

impl<T> Optional<T> {
    /// Runs `block` to register handlers, then dispatches on the variant.
    ///
    /// `block` receives a fresh [`MatchArms`] and registers handlers with
    /// [`on_present`](MatchArms::on_present) and
    /// [`on_absent`](MatchArms::on_absent). Registration order is irrelevant.
    ///
    /// The handler result is wrapped in `Present`. Under
    /// [`Exhaustiveness::Loose`], a variant without a registered handler
    /// yields `Absent`.
    ///
    /// # Errors
    ///
    /// - [`MatchError::DuplicateArm`] if `block` registers an arm twice,
    ///   even when `block` discards the registration error. Any error `block`
    ///   itself returns is passed through. No handler runs.
    /// - [`MatchError::NonExhaustive`] under [`Exhaustiveness::Exhaustive`]
    ///   if an arm is missing. No handler runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::error::{Arm, MatchError};
    /// use presence::matching::Exhaustiveness;
    /// use presence::optional::Optional;
    ///
    /// let loose = Optional::<i32>::Absent.match_with(Exhaustiveness::Loose, |arms| {
    ///     arms.on_present(|n| n + 1)?;
    ///     Ok(())
    /// });
    /// assert_eq!(loose, Ok(Optional::Absent));
    ///
    /// let strict = Optional::<i32>::Absent.match_with(Exhaustiveness::Exhaustive, |arms| {
    ///     arms.on_present(|n| n + 1)?;
    ///     Ok(())
    /// });
    /// assert_eq!(strict, Err(MatchError::NonExhaustive { missing: vec![Arm::Absent] }));
    /// ```
    pub fn match_with<'a, R, B>(
        self,
        exhaustiveness: Exhaustiveness,
        block: B,
    ) -> Result<Optional<R>, MatchError>
    where
        B: FnOnce(&mut MatchArms<'a, T, R>) -> Result<(), MatchError>,
    {
        let mut arms = MatchArms::new();
        block(&mut arms)?;
        arms.ensure_unique()?;

        match exhaustiveness {
            Exhaustiveness::Exhaustive => {
                Ok(Optional::Present(arms.into_exhaustive()?.dispatch(self)))
            }
            Exhaustiveness::Loose => Ok(arms.dispatch(self)),
        }
    }

    /// Exhaustive match returning the handler result directly.
    ///
    /// # Errors
    ///
    /// Same as [`match_with`](Self::match_with) under
    /// [`Exhaustiveness::Exhaustive`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let describe = |optional: Optional<i32>| {
    ///     optional.match_arms(|arms| {
    ///         arms.on_present(|value| value + 10)?;
    ///         arms.on_absent(|| 0)?;
    ///         Ok(())
    ///     })
    /// };
    ///
    /// assert_eq!(describe(Optional::Present(1)), Ok(11));
    /// assert_eq!(describe(Optional::Absent), Ok(0));
    /// ```
    pub fn match_arms<'a, R, B>(self, block: B) -> Result<R, MatchError>
    where
        B: FnOnce(&mut MatchArms<'a, T, R>) -> Result<(), MatchError>,
    {
        let mut arms = MatchArms::new();
        block(&mut arms)?;
        arms.ensure_unique()?;
        Ok(arms.into_exhaustive()?.dispatch(self))
    }

    /// Loose match: arms may be omitted.
    ///
    /// Shorthand for [`match_with`](Self::match_with) with
    /// [`Exhaustiveness::Loose`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DuplicateArm`] if an arm is registered twice.
    pub fn lmatch<'a, R, B>(self, block: B) -> Result<Optional<R>, MatchError>
    where
        B: FnOnce(&mut MatchArms<'a, T, R>) -> Result<(), MatchError>,
    {
        self.match_with(Exhaustiveness::Loose, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Arm;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    fn exhaustive_match_dispatches_present() {
        let result = Optional::Present(1).match_arms(|arms| {
            arms.on_present(|value| value + 10)?;
            arms.on_absent(|| 0)?;
            Ok(())
        });
        assert_eq!(result, Ok(11));
    }

    #[rstest]
    fn exhaustive_match_dispatches_absent() {
        let result = Optional::<i32>::Absent.match_arms(|arms| {
            arms.on_absent(|| 0)?;
            arms.on_present(|value| value + 10)?;
            Ok(())
        });
        assert_eq!(result, Ok(0));
    }

    #[rstest]
    #[case(Exhaustiveness::Exhaustive)]
    #[case(Exhaustiveness::Loose)]
    fn duplicate_arm_fails_in_every_mode(#[case] exhaustiveness: Exhaustiveness) {
        let result = Optional::Present(1).match_with(exhaustiveness, |arms| {
            arms.on_present(|value| value + 1)?;
            arms.on_present(|value| value + 1)?;
            arms.on_absent(|| 0)?;
            Ok(())
        });
        assert_eq!(result, Err(MatchError::DuplicateArm(Arm::Present)));
    }

    #[rstest]
    fn duplicate_arm_aborts_the_block() {
        let reached = Cell::new(false);
        let result = Optional::Present(1).match_arms(|arms| {
            arms.on_absent(|| 0)?;
            arms.on_absent(|| 0)?;
            reached.set(true);
            arms.on_present(|value| value)?;
            Ok(())
        });

        assert_eq!(result, Err(MatchError::DuplicateArm(Arm::Absent)));
        assert!(!reached.get());
    }

    #[rstest]
    #[case(Exhaustiveness::Exhaustive)]
    #[case(Exhaustiveness::Loose)]
    fn discarded_duplicate_still_fails(#[case] exhaustiveness: Exhaustiveness) {
        let ran = Cell::new(false);
        let result = Optional::Present(1).match_with(exhaustiveness, |arms| {
            let _ = arms.on_present(|value| {
                ran.set(true);
                value + 1
            });
            let _ = arms.on_present(|value| value + 100);
            arms.on_absent(|| 0)?;
            Ok(())
        });

        assert_eq!(result, Err(MatchError::DuplicateArm(Arm::Present)));
        assert!(!ran.get());
    }

    #[rstest]
    fn non_exhaustive_match_runs_no_handler() {
        let ran = Cell::new(false);
        let result = Optional::Present(1).match_arms(|arms| {
            arms.on_present(|value| {
                ran.set(true);
                value
            })?;
            Ok(())
        });

        assert_eq!(
            result,
            Err(MatchError::NonExhaustive {
                missing: vec![Arm::Absent]
            })
        );
        assert!(!ran.get());
    }

    #[rstest]
    fn empty_block_lists_both_arms() {
        let result = Optional::Present(1).match_arms::<(), _>(|_| Ok(()));
        let error = result.unwrap_err();
        assert_eq!(
            error.to_string(),
            "non-exhaustive patterns: `Present` and `Absent` not covered"
        );
    }

    #[rstest]
    fn loose_match_with_missing_arm_yields_absent() {
        let result = Optional::Present(1).lmatch(|arms| {
            arms.on_absent(|| 0)?;
            Ok(())
        });
        assert_eq!(result, Ok(Optional::Absent));
    }

    #[rstest]
    fn loose_match_with_empty_block_yields_absent() {
        let result = Optional::Present(1).lmatch::<i32, _>(|_| Ok(()));
        assert_eq!(result, Ok(Optional::Absent));
    }

    #[rstest]
    fn loose_match_with_covering_arm_yields_present() {
        let result = Optional::Present(1).lmatch(|arms| {
            arms.on_present(|value| value * 3)?;
            Ok(())
        });
        assert_eq!(result, Ok(Optional::Present(3)));
    }

    #[rstest]
    fn repeated_matches_are_independent() {
        let optional = Optional::Present(2);

        let first = optional.match_arms(|arms| {
            arms.on_present(|value| value * 2)?;
            arms.on_absent(|| 0)?;
            Ok(())
        });
        let second = optional.lmatch(|arms| {
            arms.on_absent(|| 0)?;
            Ok(())
        });
        let third = optional.match_arms(|arms| {
            arms.on_present(|value| value * 5)?;
            arms.on_absent(|| 0)?;
            Ok(())
        });

        assert_eq!(first, Ok(4));
        assert_eq!(second, Ok(Optional::Absent));
        assert_eq!(third, Ok(10));
    }

    #[rstest]
    fn handlers_may_borrow_from_the_caller() {
        let log = RefCell::new(Vec::new());
        let result = Optional::Present("event").match_arms(|arms| {
            arms.on_present(|value| log.borrow_mut().push(value))?;
            arms.on_absent(|| ())?;
            Ok(())
        });

        assert_eq!(result, Ok(()));
        assert_eq!(log.into_inner(), vec!["event"]);
    }

    #[rstest]
    fn default_mode_is_exhaustive() {
        assert_eq!(Exhaustiveness::default(), Exhaustiveness::Exhaustive);
    }
}

//! Conversions between `Optional` and the standard library, plus iteration.

use std::iter::FusedIterator;

use super::Optional;
use crate::error::UnwrapError;

impl<T> Optional<T> {
    /// Converts into `Result`, mapping `Absent` to `Err(error)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).ok_or("missing"), Ok(1));
    /// assert_eq!(Optional::<i32>::Absent.ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    /// Converts into `Result`, mapping `Absent` to `Err(function())`.
    ///
    /// # Errors
    ///
    /// Returns `Err(function())` if this is `Absent`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(function()),
        }
    }

    /// Converts into `Result<T, UnwrapError>` so the value can be extracted
    /// with `?` inside a fallible function.
    ///
    /// # Errors
    ///
    /// Returns the default [`UnwrapError`] if this is `Absent`.
    #[inline]
    pub fn into_result(self) -> Result<T, UnwrapError> {
        self.try_unwrap()
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns an iterator over the present value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let sum: i32 = Optional::Present(3).iter().chain(Optional::Absent.iter()).sum();
    /// assert_eq!(sum, 3);
    /// ```
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        IntoIter {
            inner: self.as_ref(),
        }
    }

    /// Returns an iterator over a mutable reference to the present value, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IntoIter {
            inner: self.as_mut(),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    /// `Some(v)` becomes `Present(v)`, `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// An iterator yielding the present value of an [`Optional`] at most once.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Optional<T>,
}

/// Iterator over a reference to the present value.
pub type Iter<'a, T> = IntoIter<&'a T>;

/// Iterator over a mutable reference to the present value.
pub type IterMut<'a, T> = IntoIter<&'a mut T>;

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_present());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<A, V> FromIterator<Optional<A>> for Optional<V>
where
    V: FromIterator<A>,
{
    /// Collects every present value, or yields `Absent` at the first `Absent`
    /// element. Elements after the first `Absent` are not consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let all: Optional<Vec<i32>> = vec![Optional::Present(1), Optional::Present(2)]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(all, Optional::Present(vec![1, 2]));
    ///
    /// let gap: Optional<Vec<i32>> = vec![Optional::Present(1), Optional::Absent]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(gap, Optional::Absent);
    /// ```
    fn from_iter<I: IntoIterator<Item = Optional<A>>>(iterable: I) -> Self {
        let mut found_absent = false;
        let collected: V = iterable
            .into_iter()
            .map_while(|element| match element {
                Optional::Present(value) => Some(value),
                Optional::Absent => {
                    found_absent = true;
                    None
                }
            })
            .collect();

        if found_absent {
            Self::Absent
        } else {
            Self::Present(collected)
        }
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    /// Serializes with the same shape as `Option<T>`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_conversions() {
        assert_eq!(Optional::from(Some(1)), Optional::Present(1));
        assert_eq!(Optional::<i32>::from(None), Optional::Absent);
        assert_eq!(Option::from(Optional::Present(1)), Some(1));
        assert_eq!(Option::<i32>::from(Optional::Absent), None);
    }

    #[rstest]
    fn into_result_uses_default_unwrap_error() {
        assert_eq!(Optional::Present(1).into_result(), Ok(1));
        assert_eq!(
            Optional::<i32>::Absent.into_result(),
            Err(UnwrapError::default())
        );
    }

    #[rstest]
    fn ok_or_else_is_lazy() {
        let result: Result<i32, String> =
            Optional::Present(1).ok_or_else(|| panic!("error built for a present value"));
        assert_eq!(result, Ok(1));
    }

    #[rstest]
    fn iterators_yield_at_most_once() {
        let mut iterator = Optional::Present(5).into_iter();
        assert_eq!(iterator.len(), 1);
        assert_eq!(iterator.next(), Some(5));
        assert_eq!(iterator.len(), 0);
        assert_eq!(iterator.next(), None);

        assert_eq!(Optional::<i32>::Absent.iter().count(), 0);
    }

    #[rstest]
    fn iter_mut_updates_in_place() {
        let mut optional = Optional::Present(1);
        for value in &mut optional {
            *value += 1;
        }
        assert_eq!(optional, Optional::Present(2));
    }

    #[rstest]
    fn collect_stops_at_first_absent() {
        let mut consumed = 0;
        let collected: Optional<Vec<i32>> = [
            Optional::Present(1),
            Optional::Absent,
            Optional::Present(3),
        ]
        .into_iter()
        .inspect(|_| consumed += 1)
        .collect();

        assert_eq!(collected, Optional::Absent);
        assert_eq!(consumed, 2);
    }

    #[rstest]
    fn collect_empty_is_present() {
        let collected: Optional<Vec<i32>> = std::iter::empty().collect();
        assert_eq!(collected, Optional::Present(Vec::new()));
    }
}

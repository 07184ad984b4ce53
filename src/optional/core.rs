//! The `Optional<T>` type and its combinators.

use std::fmt;
use std::mem;

use crate::error::UnwrapError;

/// A value that is either present or absent.
///
/// `Optional<T>` holds exactly one `T` (`Present`) or nothing (`Absent`).
/// Combinators derive new optionals without inspecting the variant by hand;
/// only [`get_or_insert`](Self::get_or_insert),
/// [`get_or_insert_with`](Self::get_or_insert_with), [`insert`](Self::insert),
/// [`replace`](Self::replace) and [`take`](Self::take) modify the receiver.
///
/// # Examples
///
/// ```rust
/// use presence::optional::Optional;
///
/// let port: Optional<u16> = Optional::Present(8080);
/// let described = port
///     .filter(|port| *port >= 1024)
///     .map(|port| format!("listening on {port}"))
///     .unwrap_or_else(|| "privileged port rejected".to_string());
///
/// assert_eq!(described, "listening on 8080");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value is present.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert!(Optional::Present(1).is_present());
    /// assert!(!Optional::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert!(Optional::<i32>::Absent.is_absent());
    /// assert!(!Optional::Present(1).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is present and satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert!(Optional::Present(4).is_present_and(|n| n % 2 == 0));
    /// assert!(!Optional::Present(3).is_present_and(|n| n % 2 == 0));
    /// assert!(!Optional::<i32>::Absent.is_present_and(|_| true));
    /// ```
    #[inline]
    pub fn is_present_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Returns `true` if a value is present and equal to `expected`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert!(Optional::Present(2).contains(&2));
    /// assert!(!Optional::Present(2).contains(&3));
    /// assert!(!Optional::<i32>::Absent.contains(&2));
    ///
    /// let name = Optional::Present(String::from("ferris"));
    /// assert!(name.contains(&"ferris"));
    /// ```
    #[inline]
    pub fn contains<U>(&self, expected: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Present(value) => value == expected,
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Reference Adapters
    // =========================================================================

    /// Converts `&Optional<T>` into `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts `&mut Optional<T>` into `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Forcing
    // =========================================================================

    /// Returns the present value, consuming the optional.
    ///
    /// # Panics
    ///
    /// Panics with the default [`UnwrapError`] message if this is `Absent`.
    /// Use [`try_unwrap`](Self::try_unwrap) to receive the error as a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).map(|x| x + 10).unwrap(), 11);
    /// ```
    ///
    /// ```rust,should_panic
    /// use presence::optional::Optional;
    ///
    /// Optional::<i32>::Absent.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{}", UnwrapError::default()),
        }
    }

    /// Returns the present value, consuming the optional.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic(expected = "port must be configured")
    /// use presence::optional::Optional;
    ///
    /// let port: Optional<u16> = Optional::Absent;
    /// port.expect("port must be configured");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{}", UnwrapError::new(message)),
        }
    }

    /// Returns the present value, or an [`UnwrapError`] with the default message.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::error::UnwrapError;
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(7).try_unwrap(), Ok(7));
    /// assert_eq!(Optional::<i32>::Absent.try_unwrap(), Err(UnwrapError::default()));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::default()),
        }
    }

    /// Returns the present value, or an [`UnwrapError`] carrying `message`.
    ///
    /// The message is only materialized when the optional is `Absent`.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let error = Optional::<i32>::Absent.try_expect("no user id").unwrap_err();
    /// assert_eq!(error.message(), "no user id");
    /// ```
    #[inline]
    pub fn try_expect<M>(self, message: M) -> Result<T, UnwrapError>
    where
        M: Into<String>,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::new(message)),
        }
    }

    /// Returns the present value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).unwrap_or(42), 1);
    /// assert_eq!(Optional::Absent.unwrap_or(42), 42);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the present value or computes one from `function`.
    ///
    /// `function` runs only when this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).unwrap_or_else(|| unreachable!()), 1);
    /// assert_eq!(Optional::Absent.unwrap_or_else(|| 42), 42);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    /// Returns the present value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to the present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present("four").map(str::len), Optional::Present(4));
    /// assert_eq!(Optional::<&str>::Absent.map(str::len), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Calls `function` with a reference to the present value and returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            function(value);
        }
        self
    }

    /// Applies `function` to the present value, or returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(2).map_or(0, |x| x * 3), 6);
    /// assert_eq!(Optional::Absent.map_or(0, |x: i32| x * 3), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies `function` to the present value, or computes a default from
    /// `default_function`.
    ///
    /// Exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let greet = |name: Optional<&str>| {
    ///     name.map_or_else(|| "hello, stranger".to_string(), |name| format!("hello, {name}"))
    /// };
    ///
    /// assert_eq!(greet(Optional::Present("ferris")), "hello, ferris");
    /// assert_eq!(greet(Optional::Absent), "hello, stranger");
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default_function: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default_function(),
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if this is `Present`, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).and(Optional::Present("a")), Optional::Present("a"));
    /// assert_eq!(Optional::<i32>::Absent.and(Optional::Present("a")), Optional::Absent);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Optional::Absent,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// `function` runs only when this is `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Optional::Present(n / 2) } else { Optional::Absent };
    ///
    /// assert_eq!(Optional::Present(8).and_then(half).and_then(half), Optional::Present(2));
    /// assert_eq!(Optional::Present(6).and_then(half).and_then(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the present value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).filter(|x| x % 2 == 0), Optional::Absent);
    /// assert_eq!(Optional::Present(2).filter(|x| x % 2 == 0), Optional::Present(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = self
            && predicate(&value)
        {
            return Self::Present(value);
        }
        Self::Absent
    }

    /// Returns `self` if it is `Present`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).or(Optional::Present(2)), Optional::Present(1));
    /// assert_eq!(Optional::Absent.or(Optional::Present(2)), Optional::Present(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => other,
        }
    }

    /// Returns `self` if it is `Present`, otherwise the result of `function`.
    ///
    /// `function` runs only when this is `Absent`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => function(),
        }
    }

    /// Returns the one present value when exactly one of `self` and `other`
    /// is `Present`, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).xor(Optional::Absent), Optional::Present(1));
    /// assert_eq!(Optional::Absent.xor(Optional::Present(2)), Optional::Present(2));
    /// assert_eq!(Optional::Present(1).xor(Optional::Present(2)), Optional::Absent);
    /// assert_eq!(Optional::<i32>::Absent.xor(Optional::Absent), Optional::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Pairing
    // =========================================================================

    /// Pairs two present values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).zip(Optional::Present('a')), Optional::Present((1, 'a')));
    /// assert_eq!(Optional::Present(1).zip(Optional::<char>::Absent), Optional::Absent);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two present values with `function`.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Optional<U>, function: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Present(left), Optional::Present(right)) => {
                Optional::Present(function(left, right))
            }
            _ => Optional::Absent,
        }
    }

    // =========================================================================
    // In-place Mutation
    // =========================================================================

    /// Stores `value` and returns a mutable reference to it, dropping any
    /// previous value.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Present(value);
        match self {
            Self::Present(value) => value,
            Self::Absent => unreachable!("an optional that was just assigned is present"),
        }
    }

    /// Returns the present value, storing `value` first if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut cache: Optional<u32> = Optional::Absent;
    /// *cache.get_or_insert(1) += 1;
    /// assert_eq!(cache, Optional::Present(2));
    ///
    /// assert_eq!(*cache.get_or_insert(10), 2);
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Returns the present value, storing the result of `function` first if
    /// this is `Absent`.
    ///
    /// `function` runs only when this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut names: Optional<Vec<&str>> = Optional::Absent;
    /// names.get_or_insert_with(Vec::new).push("ferris");
    /// names.get_or_insert_with(|| unreachable!()).push("corro");
    ///
    /// assert_eq!(names, Optional::Present(vec!["ferris", "corro"]));
    /// ```
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, function: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Self::Absent = self {
            *self = Self::Present(function());
        }
        match self {
            Self::Present(value) => value,
            Self::Absent => unreachable!("an absent optional was just filled"),
        }
    }

    /// Stores `value`, returning the previous state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut slot = Optional::Present(1);
    /// assert_eq!(slot.replace(2), Optional::Present(1));
    /// assert_eq!(slot, Optional::Present(2));
    ///
    /// let mut empty = Optional::Absent;
    /// assert_eq!(empty.replace(3), Optional::Absent);
    /// assert_eq!(empty, Optional::Present(3));
    /// ```
    #[inline]
    #[must_use = "if the previous value is not needed, use `insert` instead"]
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Self::Present(value))
    }

    /// Leaves `Absent` in place, returning the previous state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut slot = Optional::Present(1);
    /// assert_eq!(slot.take(), Optional::Present(1));
    /// assert_eq!(slot, Optional::Absent);
    /// assert_eq!(slot.take(), Optional::Absent);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

// =============================================================================
// Nested and Paired Optionals
// =============================================================================

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(Optional::Present(1)).flatten(), Optional::Present(1));
    /// assert_eq!(Optional::Present(Optional::<i32>::Absent).flatten(), Optional::Absent);
    /// assert_eq!(Optional::<Optional<i32>>::Absent.flatten(), Optional::Absent);
    ///
    /// // Only one level is removed.
    /// let deep = Optional::Present(Optional::Present(Optional::Present(1)));
    /// assert_eq!(deep.flatten(), Optional::Present(Optional::Present(1)));
    /// ```
    ///
    /// A value that is not nested has no `flatten`:
    ///
    /// ```compile_fail
    /// use presence::optional::Optional;
    ///
    /// let _ = Optional::Present(1).flatten();
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Optional::Absent,
        }
    }
}

impl<A, B> Optional<(A, B)> {
    /// Splits a present pair into two present values.
    #[inline]
    pub fn unzip(self) -> (Optional<A>, Optional<B>) {
        match self {
            Self::Present((left, right)) => (Optional::Present(left), Optional::Present(right)),
            Self::Absent => (Optional::Absent, Optional::Absent),
        }
    }
}

impl<T> Default for Optional<T> {
    /// Returns `Absent`.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    /// Formats as `Present(<value>)` or `Absent`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);

//! The optional value container.

use crate::engine;
use crate::error::CloneError;
use crate::probe::Probe;

pub use Optional::{Absent, Present};

/// A value holder that is either [`Absent`] or holds exactly one value.
///
/// The container itself is a plain tagged union; its one non-trivial
/// operation is [`deep_clone`](Optional::deep_clone), which produces an
/// independent copy of the held value through the clone engine.
///
/// ```
/// use opt_caps::Optional;
///
/// let name = Optional::with_value("ada");
/// assert!(name.is_present());
/// assert_eq!(name.unwrap_or("unknown"), "ada");
///
/// let missing: Optional<&str> = Optional::empty();
/// assert!(missing.is_absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(T),
}

impl<T> Optional<T> {
    /// Returns an empty container.
    #[inline]
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// Wraps `value`.
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self::Present(value)
    }

    /// Wraps `value` if `present` is true, discards it otherwise.
    #[inline]
    pub fn wrap(value: T, present: bool) -> Self {
        if present { Self::Present(value) } else { Self::Absent }
    }

    /// Evaluates `f` and wraps its result.
    #[inline]
    pub fn try_wrap(f: impl FnOnce() -> (T, bool)) -> Self {
        let (value, present) = f();
        Self::wrap(value, present)
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns `true` if a value is held and `f` accepts it.
    #[inline]
    pub fn is_present_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => false,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the container is absent. Prefer [`unwrap_or`],
    /// [`unwrap_or_else`], or the presence checks where absence is a
    /// reachable state.
    ///
    /// [`unwrap_or`]: Optional::unwrap_or
    /// [`unwrap_or_else`]: Optional::unwrap_or_else
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Optional::unwrap()` on an absent value"),
        }
    }

    /// Returns the held value, panicking with `msg` if absent.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{msg}"),
        }
    }

    /// Returns the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value or computes one from `f`.
    #[inline]
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => f(),
        }
    }

    /// Returns the held value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Returns the held value without checking presence.
    ///
    /// A last resort: reach for this only where the presence proof cannot be
    /// expressed in types and the checked accessors are measured to matter.
    ///
    /// # Safety
    ///
    /// The container must be present. Calling this on an absent container is
    /// undefined behavior.
    #[inline]
    pub unsafe fn unsafe_unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            // SAFETY: the caller guarantees the value is present.
            Self::Absent => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Maps the held value with `f`, preserving absence.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Maps the held value with `f`, or returns `default` when absent.
    #[inline]
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => default,
        }
    }

    /// Maps the held value with `f`, or computes a fallback when absent.
    #[inline]
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => default(),
        }
    }

    /// Calls `f` with a borrow of the held value, passing the container
    /// through unchanged.
    #[inline]
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Returns `other` if `self` is present, otherwise stays absent.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Optional::Absent,
        }
    }

    /// Chains a computation that may itself come up empty.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the held value only if `pred` accepts it.
    #[inline]
    pub fn filter(self, pred: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Present(value) if pred(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `f`.
    #[inline]
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => f(),
        }
    }

    /// Inserts `value`, dropping any held value, and returns a mutable
    /// borrow of it.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Present(value);
        match self {
            Self::Present(value) => value,
            // SAFETY: written as present on the line above.
            Self::Absent => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Returns a mutable borrow of the held value, inserting `value` first
    /// if the container is absent.
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Returns a mutable borrow of the held value, inserting the result of
    /// `f` first if the container is absent.
    pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        if self.is_absent() {
            *self = Self::Present(f());
        }
        match self {
            Self::Present(value) => value,
            // SAFETY: the absent case was filled above.
            Self::Absent => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Replaces the contents with `value`, returning the old container.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        core::mem::replace(self, Self::Present(value))
    }

    /// Takes the value out, leaving the container absent.
    ///
    /// ```
    /// use opt_caps::Optional;
    ///
    /// let mut slot = Optional::with_value(7);
    /// let taken = slot.take();
    /// assert!(slot.is_absent());
    /// assert_eq!(taken.unwrap(), 7);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Splits the container into its value and a presence flag.
    ///
    /// The inverse of [`wrap`](Optional::wrap): a wrapped pair comes back
    /// unchanged, and an absent container yields `(T::default(), false)`.
    ///
    /// ```
    /// use opt_caps::Optional;
    ///
    /// let (value, present) = Optional::with_value(7).deconstruct();
    /// assert_eq!((value, present), (7, true));
    ///
    /// let (value, present) = Optional::<i32>::empty().deconstruct();
    /// assert_eq!((value, present), (0, false));
    /// ```
    #[inline]
    pub fn deconstruct(self) -> (T, bool)
    where
        T: Default,
    {
        match self {
            Self::Present(value) => (value, true),
            Self::Absent => (T::default(), false),
        }
    }
}

impl<T: Probe> Optional<T> {
    /// Produces a container holding an independent copy of the held value.
    ///
    /// An empty container clones to an empty container with no inspection
    /// and no allocation. Otherwise the value is handed to the clone engine,
    /// which resolves a capability or a built-in shape strategy; see the
    /// crate docs for the dispatch order.
    ///
    /// ```
    /// use opt_caps::Optional;
    ///
    /// let mut words = Optional::with_value(vec![String::from("foo"), String::from("bar")]);
    /// let copy = words.deep_clone()?;
    ///
    /// // Mutating the original never reaches the copy's storage.
    /// if let Optional::Present(w) = &mut words {
    ///     w[0] = String::from("changed");
    /// }
    /// assert_eq!(copy.unwrap(), ["foo", "bar"]);
    /// # Ok::<(), opt_caps::CloneError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`CloneError`] when neither a capability nor a built-in
    /// strategy applies to the value's shape. The failure indicates a
    /// missing capability; the original is left untouched.
    pub fn deep_clone(&self) -> Result<Self, CloneError> {
        match self {
            Self::Absent => Ok(Self::Absent),
            Self::Present(value) => engine::dispatch(value).map(Self::Present),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

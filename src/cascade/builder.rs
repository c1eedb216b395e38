//! The `Cascade` builder.
//!
//! A [`Cascade`] holds an ordered list of [`Candidate`]s and resolves to the
//! first one that yields a present value. Candidates are evaluated strictly in
//! insertion order, each at most once per resolution, and evaluation stops at
//! the first success.
//!
//! # Examples
//!
//! ```rust
//! use lambdo::cascade::Cascade;
//! use std::cell::Cell;
//!
//! let touched = Cell::new(false);
//! let resolved = Cascade::of_lazy(|| None)
//!     .or_value(7)
//!     .or_lazy(|| {
//!         touched.set(true);
//!         Some(8)
//!     })
//!     .resolve();
//!
//! assert_eq!(resolved, Some(7));
//! assert!(!touched.get());
//! ```

use std::convert::Infallible;
use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::candidate::Candidate;
use super::error::{CascadeError, CascadeExhausted};

/// Candidates stored inline before the cascade spills to the heap.
const INLINE_CANDIDATES: usize = 4;

/// Whether a cascade has been resolved yet.
///
/// The state is informational. Resolution never locks a cascade: candidates
/// can still be appended and the cascade can be resolved again, which re-runs
/// every candidate up to the first success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CascadeState {
    /// No resolution has been requested yet.
    #[default]
    Building,
    /// At least one resolution has been requested.
    Resolved,
}

/// An ordered list of candidate producers resolved to the first present value.
///
/// The `or*` methods take `&mut self` and return the same cascade. Chained
/// calls therefore alias one cascade rather than producing copies, and a
/// cascade bound to a variable can be extended across statements:
///
/// ```rust
/// use lambdo::cascade::Cascade;
///
/// let mut cascade = Cascade::of_optional(None);
/// cascade.or_optional(None);
/// cascade.or_value("fallback");
///
/// assert_eq!(cascade.len(), 3);
/// assert_eq!(cascade.resolve(), Some("fallback"));
/// ```
///
/// # Type Parameters
///
/// * `T` - The type of the resolved value
/// * `E` - The error type of fallible candidates ([`Infallible`] by default)
///
/// # Thread Safety
///
/// This type is neither `Send` nor `Sync`: candidates are boxed closures with
/// no thread-safety bounds.
pub struct Cascade<'a, T, E = Infallible> {
    candidates: SmallVec<[Candidate<'a, T, E>; INLINE_CANDIDATES]>,
    state: CascadeState,
}

// =============================================================================
// Infallible Cascades
// =============================================================================

impl<'a, T> Cascade<'a, T> {
    /// Creates a cascade containing exactly one candidate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::{Candidate, Cascade};
    ///
    /// let cascade = Cascade::of(Candidate::value(5));
    /// assert_eq!(cascade.len(), 1);
    /// ```
    pub fn of(candidate: Candidate<'a, T>) -> Self {
        Self::starting_with(candidate)
    }

    /// Creates a cascade whose first candidate is a present value.
    pub fn of_value(value: T) -> Self {
        Self::of(Candidate::value(value))
    }

    /// Creates a cascade whose first candidate is a value that may be absent.
    pub fn of_optional(value: Option<T>) -> Self {
        Self::of(Candidate::optional(value))
    }

    /// Creates a cascade whose first candidate is a lazy producer.
    pub fn of_lazy<F>(producer: F) -> Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        Self::of(Candidate::lazy(producer))
    }

    /// Creates a cascade whose first candidate is a side effect.
    pub fn of_action<F>(effect: F) -> Self
    where
        F: FnMut() + 'a,
    {
        Self::of(Candidate::action(effect))
    }

    /// Consumes the cascade and resolves it without cloning fixed values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Cascade;
    ///
    /// struct Connection(&'static str);
    ///
    /// let mut cascade = Cascade::of_optional(None);
    /// cascade.or_value(Connection("primary"));
    ///
    /// let connection = cascade.into_resolved().unwrap();
    /// assert_eq!(connection.0, "primary");
    /// ```
    pub fn into_resolved(self) -> Option<T> {
        let Ok(resolved) = self.try_into_resolved();
        resolved
    }
}

impl<'a, T: Clone> Cascade<'a, T> {
    /// Evaluates the candidates in insertion order and returns the first
    /// present value, or `None` if every candidate is absent.
    ///
    /// Absence is a normal outcome, not an error. Panics raised by a producer
    /// propagate to the caller and abort the remaining candidates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Cascade;
    ///
    /// assert_eq!(Cascade::of_value(5).or_value(6).resolve(), Some(5));
    /// assert_eq!(Cascade::of_lazy(|| None::<i32>).or_optional(None).resolve(), None);
    /// ```
    pub fn resolve(&mut self) -> Option<T> {
        let Ok(resolved) = self.try_resolve();
        resolved
    }

    /// Appends a candidate and resolves the whole cascade.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::{Candidate, Cascade};
    ///
    /// let resolved = Cascade::of_lazy(|| None).or_else(Candidate::lazy(|| Some(1)));
    /// assert_eq!(resolved, Some(1));
    /// ```
    pub fn or_else(&mut self, candidate: Candidate<'a, T>) -> Option<T> {
        self.or(candidate).resolve()
    }

    /// Appends a terminal fallback, resolves, and unwraps the result.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeExhausted`] if even the appended fallback is absent.
    /// This is a programmer error: the fallback was not a guaranteed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::{Candidate, Cascade, CascadeExhausted};
    ///
    /// let value = Cascade::of_optional(None).or_optional(None).or_default(Candidate::value(9));
    /// assert_eq!(value, Ok(9));
    ///
    /// let missing = Cascade::of_optional(None::<i32>).or_default(Candidate::lazy(|| None));
    /// assert_eq!(missing, Err(CascadeExhausted { candidates: 2 }));
    /// ```
    pub fn or_default(&mut self, candidate: Candidate<'a, T>) -> Result<T, CascadeExhausted> {
        self.or_else(candidate)
            .ok_or_else(|| CascadeExhausted { candidates: self.len() })
    }
}

// =============================================================================
// Building
// =============================================================================

impl<'a, T, E> Cascade<'a, T, E> {
    /// Creates a cascade containing exactly one candidate, for any error type.
    ///
    /// Use this to start a fallible cascade with a non-fallible candidate;
    /// [`Cascade::of`] always produces an infallible cascade.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::{Candidate, Cascade};
    ///
    /// let mut cascade: Cascade<'_, u16, std::num::ParseIntError> =
    ///     Cascade::starting_with(Candidate::optional(None));
    /// cascade.or_fallible(|| "8080".parse().map(Some));
    ///
    /// assert_eq!(cascade.try_resolve(), Ok(Some(8080)));
    /// ```
    pub fn starting_with(candidate: Candidate<'a, T, E>) -> Self {
        let mut candidates = SmallVec::new();
        candidates.push(candidate);
        Self {
            candidates,
            state: CascadeState::Building,
        }
    }

    /// Creates a cascade whose first candidate is a fallible producer.
    pub fn of_fallible<F>(producer: F) -> Self
    where
        F: FnMut() -> Result<Option<T>, E> + 'a,
    {
        Self::starting_with(Candidate::fallible(producer))
    }

    /// Appends a candidate and returns the same cascade.
    pub fn or(&mut self, candidate: Candidate<'a, T, E>) -> &mut Self {
        self.candidates.push(candidate);
        self
    }

    /// Appends a present value.
    pub fn or_value(&mut self, value: T) -> &mut Self {
        self.or(Candidate::value(value))
    }

    /// Appends a value that may be absent.
    pub fn or_optional(&mut self, value: Option<T>) -> &mut Self {
        self.or(Candidate::optional(value))
    }

    /// Appends a lazy producer.
    pub fn or_lazy<F>(&mut self, producer: F) -> &mut Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        self.or(Candidate::lazy(producer))
    }

    /// Appends a side effect. It runs when reached and never yields a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Cascade;
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let resolved = Cascade::of_optional(None)
    ///     .or_action(|| log.borrow_mut().push("primary missing"))
    ///     .or_value(2)
    ///     .resolve();
    ///
    /// assert_eq!(resolved, Some(2));
    /// assert_eq!(*log.borrow(), vec!["primary missing"]);
    /// ```
    pub fn or_action<F>(&mut self, effect: F) -> &mut Self
    where
        F: FnMut() + 'a,
    {
        self.or(Candidate::action(effect))
    }

    /// Appends a fallible producer.
    pub fn or_fallible<F>(&mut self, producer: F) -> &mut Self
    where
        F: FnMut() -> Result<Option<T>, E> + 'a,
    {
        self.or(Candidate::fallible(producer))
    }

    /// Returns the number of candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if the cascade has no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns whether the cascade has been resolved at least once.
    #[inline]
    pub const fn state(&self) -> CascadeState {
        self.state
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Evaluates the candidates in insertion order and returns the first
    /// present value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a fallible candidate, unmodified.
    /// Candidates after the failing one are not evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Cascade;
    ///
    /// let mut cascade = Cascade::of_fallible(|| Err::<Option<i32>, _>("unreachable backend"));
    /// cascade.or_value(1);
    ///
    /// assert_eq!(cascade.try_resolve(), Err("unreachable backend"));
    /// ```
    pub fn try_resolve(&mut self) -> Result<Option<T>, E>
    where
        T: Clone,
    {
        self.state = CascadeState::Resolved;
        for (index, candidate) in self.candidates.iter_mut().enumerate() {
            let kind = candidate.kind();
            match candidate.evaluate() {
                Ok(Some(value)) => {
                    trace!(index, kind, "candidate produced a value");
                    return Ok(Some(value));
                }
                Ok(None) => trace!(index, kind, "candidate produced no value"),
                Err(error) => {
                    debug!(index, kind, "candidate failed, aborting resolution");
                    return Err(error);
                }
            }
        }
        debug!(candidates = self.candidates.len(), "cascade exhausted");
        Ok(None)
    }

    /// Appends a candidate and resolves the whole cascade.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a fallible candidate, unmodified.
    pub fn try_or_else(&mut self, candidate: Candidate<'a, T, E>) -> Result<Option<T>, E>
    where
        T: Clone,
    {
        self.or(candidate).try_resolve()
    }

    /// Appends a terminal fallback, resolves, and unwraps the result.
    ///
    /// # Errors
    ///
    /// - [`CascadeError::Producer`] if a fallible candidate failed
    /// - [`CascadeError::Exhausted`] if even the appended fallback is absent
    pub fn try_or_default(&mut self, candidate: Candidate<'a, T, E>) -> Result<T, CascadeError<E>>
    where
        T: Clone,
    {
        self.try_or_else(candidate)
            .map_err(CascadeError::Producer)?
            .ok_or_else(|| CascadeExhausted { candidates: self.len() }.into())
    }

    /// Consumes the cascade and resolves it without cloning fixed values.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a fallible candidate, unmodified.
    pub fn try_into_resolved(self) -> Result<Option<T>, E> {
        let total = self.candidates.len();
        for (index, candidate) in self.candidates.into_iter().enumerate() {
            let kind = candidate.kind();
            match candidate.into_value() {
                Ok(Some(value)) => {
                    trace!(index, kind, "candidate produced a value");
                    return Ok(Some(value));
                }
                Ok(None) => trace!(index, kind, "candidate produced no value"),
                Err(error) => {
                    debug!(index, kind, "candidate failed, aborting resolution");
                    return Err(error);
                }
            }
        }
        debug!(candidates = total, "cascade exhausted");
        Ok(None)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T, E> Default for Cascade<'_, T, E> {
    /// Creates an empty cascade, which resolves to `None`.
    fn default() -> Self {
        Self {
            candidates: SmallVec::new(),
            state: CascadeState::Building,
        }
    }
}

impl<'a, T, E> FromIterator<Candidate<'a, T, E>> for Cascade<'a, T, E> {
    fn from_iter<I: IntoIterator<Item = Candidate<'a, T, E>>>(iterable: I) -> Self {
        Self {
            candidates: iterable.into_iter().collect(),
            state: CascadeState::Building,
        }
    }
}

impl<'a, T, E> Extend<Candidate<'a, T, E>> for Cascade<'a, T, E> {
    fn extend<I: IntoIterator<Item = Candidate<'a, T, E>>>(&mut self, iterable: I) {
        self.candidates.extend(iterable);
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Cascade<'_, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cascade")
            .field("candidates", &self.candidates.as_slice())
            .field("state", &self.state)
            .finish()
    }
}

static_assertions::assert_not_impl_any!(Cascade<'static, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_of_creates_single_candidate() {
        let cascade = Cascade::of_value(1);
        assert_eq!(cascade.len(), 1);
        assert!(!cascade.is_empty());
        assert_eq!(cascade.state(), CascadeState::Building);
    }

    #[rstest]
    fn test_first_present_value_wins() {
        assert_eq!(Cascade::of_value(5).or_value(6).resolve(), Some(5));
    }

    #[rstest]
    fn test_all_absent_resolves_to_none() {
        assert_eq!(
            Cascade::of_lazy(|| None::<i32>).or_optional(None).resolve(),
            None
        );
    }

    #[rstest]
    fn test_later_candidates_are_not_evaluated() {
        let touched = Cell::new(false);
        let resolved = Cascade::of_lazy(|| None)
            .or_value(7)
            .or_lazy(|| {
                touched.set(true);
                Some(8)
            })
            .resolve();

        assert_eq!(resolved, Some(7));
        assert!(!touched.get());
    }

    #[rstest]
    fn test_or_default_returns_fallback() {
        let value = Cascade::of_optional(None)
            .or_optional(None)
            .or_default(Candidate::value(9));
        assert_eq!(value, Ok(9));
    }

    #[rstest]
    fn test_or_default_with_absent_fallback_is_exhausted() {
        let missing = Cascade::of_optional(None::<i32>).or_default(Candidate::lazy(|| None));
        assert_eq!(missing, Err(CascadeExhausted { candidates: 2 }));
    }

    #[rstest]
    fn test_resolve_marks_state_resolved_but_allows_appending() {
        let mut cascade = Cascade::of_optional(None::<i32>);
        assert_eq!(cascade.resolve(), None);
        assert_eq!(cascade.state(), CascadeState::Resolved);

        cascade.or_value(3);
        assert_eq!(cascade.resolve(), Some(3));
        assert_eq!(cascade.state(), CascadeState::Resolved);
    }

    #[rstest]
    fn test_re_resolution_reruns_side_effects() {
        let runs = Cell::new(0);
        let mut cascade = Cascade::of_action(|| runs.set(runs.get() + 1));
        cascade.or_value("done");

        assert_eq!(cascade.resolve(), Some("done"));
        assert_eq!(cascade.resolve(), Some("done"));
        assert_eq!(runs.get(), 2);
    }

    #[rstest]
    fn test_fallible_error_aborts_remaining_candidates() {
        let touched = Cell::new(false);
        let mut cascade: Cascade<'_, i32, &str> = Cascade::starting_with(Candidate::optional(None));
        cascade.or_fallible(|| Err("down")).or_lazy(|| {
            touched.set(true);
            Some(1)
        });

        assert_eq!(cascade.try_resolve(), Err("down"));
        assert!(!touched.get());
    }

    #[rstest]
    fn test_try_or_default_distinguishes_failure_from_exhaustion() {
        let mut failing: Cascade<'_, i32, &str> = Cascade::of_fallible(|| Err("down"));
        assert_eq!(
            failing.try_or_default(Candidate::value(1)),
            Err(CascadeError::Producer("down"))
        );

        let mut empty: Cascade<'_, i32, &str> = Cascade::of_fallible(|| Ok(None));
        assert_eq!(
            empty.try_or_default(Candidate::optional(None)),
            Err(CascadeError::Exhausted(CascadeExhausted { candidates: 2 }))
        );
    }

    #[rstest]
    fn test_default_cascade_is_empty() {
        let mut cascade: Cascade<'_, i32> = Cascade::default();
        assert!(cascade.is_empty());
        assert_eq!(cascade.resolve(), None);
    }

    #[rstest]
    fn test_collect_and_extend_preserve_order() {
        let mut cascade: Cascade<'_, i32> = vec![Candidate::optional(None), Candidate::value(2)]
            .into_iter()
            .collect();
        cascade.extend([Candidate::value(3)]);

        assert_eq!(cascade.len(), 3);
        assert_eq!(cascade.resolve(), Some(2));
    }

    #[rstest]
    fn test_into_resolved_moves_value_out() {
        #[derive(Debug, PartialEq)]
        struct Handle(u32);

        let mut cascade = Cascade::of_optional(None);
        cascade.or_value(Handle(4));
        assert_eq!(cascade.into_resolved(), Some(Handle(4)));
    }

    #[rstest]
    fn test_debug_output() {
        let mut cascade = Cascade::of_value(1);
        cascade.or_lazy(|| None);
        assert_eq!(
            format!("{cascade:?}"),
            "Cascade { candidates: [Value(Some(1)), Lazy(\"<producer>\")], state: Building }"
        );
    }
}

//! Error types for cascade resolution.
//!
//! Absence is never an error: [`Cascade::resolve`](super::Cascade::resolve)
//! returns `None` when no candidate produced a value. The types here are only
//! produced by the `or_default` family, which promises a value, and by
//! fallible cascades whose producers fail.

use thiserror::Error;

/// Returned when a cascade that was expected to produce a value did not,
/// even after its terminal fallback was appended.
///
/// This signals a programmer error: the "default" was not actually a
/// guaranteed value. It should not be retried.
///
/// # Examples
///
/// ```rust
/// use lambdo::cascade::CascadeExhausted;
///
/// let error = CascadeExhausted { candidates: 3 };
/// assert_eq!(
///     error.to_string(),
///     "cascade exhausted: none of 3 candidates produced a value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cascade exhausted: none of {candidates} candidates produced a value")]
pub struct CascadeExhausted {
    /// The number of candidates that were evaluated.
    pub candidates: usize,
}

/// Errors of fallible cascades.
///
/// Producer errors are carried unmodified and displayed transparently.
///
/// # Examples
///
/// ```rust
/// use lambdo::cascade::{CascadeError, CascadeExhausted};
///
/// let exhausted: CascadeError<std::io::Error> = CascadeExhausted { candidates: 1 }.into();
/// assert!(exhausted.is_exhausted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError<E> {
    /// Every candidate, including the terminal fallback, was absent.
    #[error(transparent)]
    Exhausted(#[from] CascadeExhausted),
    /// A fallible producer failed; remaining candidates were not evaluated.
    #[error(transparent)]
    Producer(E),
}

impl<E> CascadeError<E> {
    /// Returns `true` if the cascade ran out of candidates.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    /// Returns the producer error, if that is what this is.
    pub fn into_producer(self) -> Option<E> {
        match self {
            Self::Producer(error) => Some(error),
            Self::Exhausted(_) => None,
        }
    }
}

static_assertions::assert_impl_all!(CascadeExhausted: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(CascadeError<std::io::Error>: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct LookupFailed(&'static str);

    impl fmt::Display for LookupFailed {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "lookup of {} failed", self.0)
        }
    }

    impl std::error::Error for LookupFailed {}

    #[rstest]
    #[case(0, "cascade exhausted: none of 0 candidates produced a value")]
    #[case(4, "cascade exhausted: none of 4 candidates produced a value")]
    fn test_exhausted_display(#[case] candidates: usize, #[case] expected: &str) {
        assert_eq!(CascadeExhausted { candidates }.to_string(), expected);
    }

    #[rstest]
    fn test_producer_error_is_transparent() {
        let error = CascadeError::Producer(LookupFailed("HOME"));
        assert_eq!(error.to_string(), "lookup of HOME failed");
        assert!(!error.is_exhausted());
        assert_eq!(error.into_producer(), Some(LookupFailed("HOME")));
    }

    #[rstest]
    fn test_exhausted_converts_into_cascade_error() {
        let error: CascadeError<LookupFailed> = CascadeExhausted { candidates: 2 }.into();
        assert_eq!(error, CascadeError::Exhausted(CascadeExhausted { candidates: 2 }));
        assert!(error.is_exhausted());
        assert_eq!(error.into_producer(), None);
    }
}

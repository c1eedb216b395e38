//! Candidate producers for a cascade.
//!
//! A [`Candidate`] normalizes the three shapes a fallback can take (a fixed
//! value, a lazy producer, a side-effecting action) into "an optional value".
//! A fourth shape, [`Candidate::Fallible`], lets a producer report failure as
//! an error value instead of a panic.
//!
//! # Examples
//!
//! ```rust
//! use lambdo::cascade::Candidate;
//!
//! let mut fixed: Candidate<'_, i32> = Candidate::value(42);
//! assert_eq!(fixed.evaluate(), Ok(Some(42)));
//!
//! let mut absent: Candidate<'_, i32> = Candidate::optional(None);
//! assert_eq!(absent.evaluate(), Ok(None));
//!
//! let mut lazy: Candidate<'_, i32> = Candidate::lazy(|| Some(7));
//! assert_eq!(lazy.evaluate(), Ok(Some(7)));
//! ```

use std::convert::Infallible;
use std::fmt;

/// Boxed producer of an optional value.
pub type Producer<'a, T> = Box<dyn FnMut() -> Option<T> + 'a>;

/// Boxed side effect with no result.
pub type Effect<'a> = Box<dyn FnMut() + 'a>;

/// Boxed producer that may fail with `E`.
pub type FallibleProducer<'a, T, E> = Box<dyn FnMut() -> Result<Option<T>, E> + 'a>;

/// One slot of a cascade.
///
/// Every variant evaluates to `Result<Option<T>, E>`. For the infallible
/// variants the result is always `Ok`; `E` defaults to [`Infallible`] so that
/// cascades without fallible producers never mention an error type.
///
/// Producers borrow for `'a`, so closures may capture locals by reference.
///
/// # Type Parameters
///
/// * `T` - The type of the produced value
/// * `E` - The error type of [`Candidate::Fallible`] producers
pub enum Candidate<'a, T, E = Infallible> {
    /// A precomputed value, possibly absent.
    Value(Option<T>),
    /// A producer invoked on every evaluation.
    Lazy(Producer<'a, T>),
    /// A side effect invoked on every evaluation. Never yields a value.
    Action(Effect<'a>),
    /// A producer whose failure aborts resolution.
    Fallible(FallibleProducer<'a, T, E>),
}

impl<'a, T, E> Candidate<'a, T, E> {
    /// Creates a candidate holding a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Candidate;
    ///
    /// let mut candidate: Candidate<'_, &str> = Candidate::value("hello");
    /// assert_eq!(candidate.evaluate(), Ok(Some("hello")));
    /// ```
    #[inline]
    pub const fn value(value: T) -> Self {
        Self::Value(Some(value))
    }

    /// Creates a candidate holding a value that may be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Candidate;
    ///
    /// let mut candidate: Candidate<'_, i32> = Candidate::optional(None);
    /// assert_eq!(candidate.evaluate(), Ok(None));
    /// ```
    #[inline]
    pub const fn optional(value: Option<T>) -> Self {
        Self::Value(value)
    }

    /// Creates a candidate from a producer.
    ///
    /// The producer is not called until the candidate is reached during
    /// resolution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Candidate;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let mut candidate: Candidate<'_, i32> = Candidate::lazy(|| {
    ///     calls.set(calls.get() + 1);
    ///     Some(1)
    /// });
    ///
    /// assert_eq!(calls.get(), 0);
    /// assert_eq!(candidate.evaluate(), Ok(Some(1)));
    /// assert_eq!(calls.get(), 1);
    /// ```
    #[inline]
    pub fn lazy<F>(producer: F) -> Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        Self::Lazy(Box::new(producer))
    }

    /// Creates a candidate that runs a side effect and yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Candidate;
    /// use std::cell::Cell;
    ///
    /// let ran = Cell::new(false);
    /// let mut candidate: Candidate<'_, i32> = Candidate::action(|| ran.set(true));
    ///
    /// assert_eq!(candidate.evaluate(), Ok(None));
    /// assert!(ran.get());
    /// ```
    #[inline]
    pub fn action<F>(effect: F) -> Self
    where
        F: FnMut() + 'a,
    {
        Self::Action(Box::new(effect))
    }

    /// Creates a candidate from a producer that may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Candidate;
    ///
    /// let mut candidate: Candidate<'_, u8, String> =
    ///     Candidate::fallible(|| "300".parse::<u8>().map(Some).map_err(|error| error.to_string()));
    ///
    /// assert!(candidate.evaluate().is_err());
    /// ```
    #[inline]
    pub fn fallible<F>(producer: F) -> Self
    where
        F: FnMut() -> Result<Option<T>, E> + 'a,
    {
        Self::Fallible(Box::new(producer))
    }

    /// Evaluates the candidate once.
    ///
    /// Fixed values are cloned so the candidate can be evaluated again by a
    /// later resolution. Panics raised by a producer are not caught.
    ///
    /// # Errors
    ///
    /// Returns the producer's error unmodified when a
    /// [`Candidate::Fallible`] producer fails.
    pub fn evaluate(&mut self) -> Result<Option<T>, E>
    where
        T: Clone,
    {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Lazy(producer) => Ok(producer()),
            Self::Action(effect) => {
                effect();
                Ok(None)
            }
            Self::Fallible(producer) => producer(),
        }
    }

    /// Evaluates the candidate by value.
    ///
    /// Unlike [`evaluate`](Self::evaluate), this does not require `T: Clone`.
    ///
    /// # Errors
    ///
    /// Returns the producer's error unmodified when a
    /// [`Candidate::Fallible`] producer fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdo::cascade::Candidate;
    ///
    /// struct Token(u32);
    ///
    /// let candidate: Candidate<'_, Token> = Candidate::value(Token(9));
    /// let token = candidate.into_value().unwrap().unwrap();
    /// assert_eq!(token.0, 9);
    /// ```
    pub fn into_value(self) -> Result<Option<T>, E> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Lazy(mut producer) => Ok(producer()),
            Self::Action(mut effect) => {
                effect();
                Ok(None)
            }
            Self::Fallible(mut producer) => producer(),
        }
    }

    /// Returns a short name for the variant.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Lazy(_) => "lazy",
            Self::Action(_) => "action",
            Self::Fallible(_) => "fallible",
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Candidate<'_, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Lazy(_) => formatter.debug_tuple("Lazy").field(&"<producer>").finish(),
            Self::Action(_) => formatter.debug_tuple("Action").field(&"<effect>").finish(),
            Self::Fallible(_) => formatter
                .debug_tuple("Fallible")
                .field(&"<producer>")
                .finish(),
        }
    }
}

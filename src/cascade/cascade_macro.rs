//! The `cascade!` macro for building a cascade in one expression.

/// Builds an infallible [`Cascade`](crate::cascade::Cascade) from a list of
/// candidates.
///
/// Each entry is a candidate kind followed by its argument. The kind names the
/// [`Candidate`](crate::cascade::Candidate) constructor used:
///
/// - `value expr` - a present value
/// - `optional expr` - an `Option<T>`
/// - `lazy expr` - a `FnMut() -> Option<T>` producer
/// - `action expr` - a `FnMut()` side effect
///
/// Fallible cascades are built with
/// [`Cascade::starting_with`](crate::cascade::Cascade::starting_with) instead.
///
/// # Examples
///
/// ```
/// use lambdo::cascade;
///
/// let from_env: Option<&str> = None;
/// let mut hosts = cascade![
///     optional from_env,
///     lazy || None,
///     value "localhost",
/// ];
///
/// assert_eq!(hosts.len(), 3);
/// assert_eq!(hosts.resolve(), Some("localhost"));
/// ```
///
/// A side effect occupies a slot without contributing a value:
///
/// ```
/// use lambdo::cascade;
/// use std::cell::Cell;
///
/// let warned = Cell::new(false);
/// let resolved = cascade![optional None, action || warned.set(true), value 1].resolve();
///
/// assert_eq!(resolved, Some(1));
/// assert!(warned.get());
/// ```
#[macro_export]
macro_rules! cascade {
    ($kind:ident $candidate:expr $(, $rest_kind:ident $rest:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut cascade = $crate::cascade::Cascade::of($crate::cascade::Candidate::$kind($candidate));
        $(
            cascade.or($crate::cascade::Candidate::$rest_kind($rest));
        )*
        cascade
    }};
}

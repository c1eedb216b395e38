//! Helper functions that keep closures single-expression.
//!
//! A closure whose body is one expression stays on one line. These helpers
//! cover the cases where that expression has the wrong type or is a statement:
//!
//! - [`as_void`]: Discards a value, so `|x| as_void(set.insert(x))` is a `()`-closure
//! - [`as_none`]: Discards a value and yields `None`
//! - [`as_true`]: Discards a value and yields `true`
//! - [`on`]: Runs a closure only if a condition holds
//! - [`on_else`]: Picks one of two closures by a condition

/// Discards a value.
///
/// Useful where a closure must return `()` but its natural body returns
/// something, such as `HashSet::insert`.
///
/// # Examples
///
/// ```
/// use lambdo::lambda::as_void;
/// use std::collections::HashSet;
///
/// let mut seen = HashSet::new();
/// [3, 1, 3].into_iter().for_each(|number| as_void(seen.insert(number)));
///
/// assert_eq!(seen.len(), 2);
/// ```
#[inline]
pub fn as_void<T>(value: T) {
    drop(value);
}

/// Discards a value and returns `None`.
///
/// # Examples
///
/// ```
/// use lambdo::lambda::as_none;
/// use std::collections::HashSet;
///
/// let mut visited = HashSet::new();
/// let nothing: Option<i32> = as_none(visited.insert("home"));
///
/// assert_eq!(nothing, None);
/// assert!(visited.contains("home"));
/// ```
#[inline]
pub fn as_none<T, U>(value: T) -> Option<U> {
    drop(value);
    None
}

/// Discards a value and returns `true`.
///
/// This lets a side-effecting call take part in a boolean expression.
///
/// # Examples
///
/// ```
/// use lambdo::lambda::as_true;
/// use std::collections::HashSet;
///
/// let mut distinct = HashSet::new();
/// let kept: Vec<i32> = [1, 2, 2]
///     .into_iter()
///     .filter(|number| as_true(distinct.insert(*number)))
///     .collect();
///
/// assert_eq!(kept, vec![1, 2, 2]);
/// assert_eq!(distinct.len(), 2);
/// ```
#[inline]
pub fn as_true<T>(value: T) -> bool {
    drop(value);
    true
}

/// Runs `then` if `condition` holds and returns its result.
///
/// # Examples
///
/// ```
/// use lambdo::lambda::on;
///
/// let mut executed = false;
/// on(true, || executed = true);
/// assert!(executed);
///
/// assert_eq!(on(false, || 1), None);
/// ```
#[inline]
pub fn on<R, F>(condition: bool, then: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    condition.then(then)
}

/// Runs `then` if `condition` holds, otherwise runs `otherwise`.
///
/// Exactly one of the two closures is called.
///
/// # Examples
///
/// ```
/// use lambdo::lambda::on_else;
///
/// let parity = |number: i32| on_else(number % 2 == 0, || "even", || "odd");
/// assert_eq!(parity(4), "even");
/// assert_eq!(parity(7), "odd");
/// ```
#[inline]
pub fn on_else<R, F, G>(condition: bool, then: F, otherwise: G) -> R
where
    F: FnOnce() -> R,
    G: FnOnce() -> R,
{
    if condition { then() } else { otherwise() }
}

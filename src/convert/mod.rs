//! Mapping helpers over sequences.
//!
//! - [`map`]: transforms every element, preserving order and length
//! - [`map_inner`]: transforms only present elements and drops absent results
//!
//! Both accept any `IntoIterator` (arrays, slices, vectors, iterators) and
//! collect into a `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use lambdo::convert::{map, map_inner};
//!
//! let labels = map([0_u8, 1, 2], |number: u8| number.to_string());
//! assert_eq!(labels, vec!["0", "1", "2"]);
//!
//! let doubled: Vec<i32> = map_inner([Some(0_i32), Some(1), None, Some(2)], |number| number * 2);
//! assert_eq!(doubled, vec![0, 2, 4]);
//! ```

/// Applies `transform` to every element and collects the results in order.
///
/// The output always has the same length as the input.
///
/// # Examples
///
/// ```rust
/// use lambdo::convert::map;
///
/// let parsed = map("0, 1, 2, 4".split(", "), |part: &str| part.parse::<u8>());
/// assert_eq!(parsed, vec![Ok(0), Ok(1), Ok(2), Ok(4)]);
/// ```
pub fn map<I, F, R>(items: I, transform: F) -> Vec<R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    items.into_iter().map(transform).collect()
}

/// Applies `transform` to every present element and keeps only present
/// results.
///
/// Absent inputs are skipped before the transform runs, so `transform` never
/// sees `None`. The transform may return either a plain value or an
/// `Option`; `None` results are dropped. The output can therefore be shorter
/// than the input, and never contains an absent value.
///
/// # Examples
///
/// ```rust
/// use lambdo::convert::map_inner;
///
/// let numbers = [Some("0"), Some("x"), None, Some("21")];
/// let parsed: Vec<u32> = map_inner(numbers, |text: &str| text.parse().ok());
/// assert_eq!(parsed, vec![0, 21]);
/// ```
pub fn map_inner<I, T, F, U, R>(items: I, mut transform: F) -> Vec<R>
where
    I: IntoIterator<Item = Option<T>>,
    F: FnMut(T) -> U,
    U: Into<Option<R>>,
{
    items
        .into_iter()
        .flatten()
        .filter_map(|item| transform(item).into())
        .collect()
}

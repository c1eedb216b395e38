//! Element-wise sequence comparison.
//!
//! Three notions of "the same sequence" are provided. All of them require equal
//! length and compare corresponding elements pairwise:
//!
//! - [`equals_by_sequence`]: elements compare equal under their ordering
//!   (`partial_cmp` is `Equal`), not merely under identity
//! - [`equals_forced`]: a permissive mode for heterogeneous elements. Elements
//!   of the same ordered type are compared by ordering; anything else falls
//!   back to identity. Two absent elements are equal.
//! - [`equals_by_identity`]: elements are the very same objects in memory
//!
//! Any `IntoIterator` works on either side, so arrays, slices, vectors and
//! iterators can be mixed freely.
//!
//! # Examples
//!
//! ```rust
//! use lambdo::compare::equals_by_sequence;
//!
//! assert!(equals_by_sequence([1, 2, 3], vec![1, 2, 3]));
//! assert!(!equals_by_sequence([1, 2], [1, 2, 3]));
//! assert!(!equals_by_sequence([1, 2, 3], [1, 2, 4]));
//! ```

mod forced;

pub use forced::{AnyOrd, Element, equals_forced, matching_type};

use std::cmp::Ordering;

/// Returns `true` if both sequences have the same length and every pair of
/// corresponding elements compares as equal under ordering.
///
/// Unlike `==`, this uses [`PartialOrd::partial_cmp`], so elements whose
/// ordering and equality disagree are judged by ordering. Pairs that are not
/// comparable at all (`partial_cmp` returns `None`, as for `NaN`) are unequal.
///
/// # Examples
///
/// ```rust
/// use lambdo::compare::equals_by_sequence;
///
/// let parsed: Vec<u32> = "1,2,3".split(',').map(|part| part.parse().unwrap()).collect();
/// assert!(equals_by_sequence(&parsed, &[1_u32, 2, 3]));
///
/// assert!(!equals_by_sequence([f64::NAN], [f64::NAN]));
/// ```
pub fn equals_by_sequence<L, R>(left: L, right: R) -> bool
where
    L: IntoIterator,
    R: IntoIterator,
    L::Item: PartialOrd<R::Item>,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (Some(left_element), Some(right_element)) => {
                if left_element.partial_cmp(&right_element) != Some(Ordering::Equal) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Compares two possibly absent values by ordering.
///
/// Two absent values are equal; an absent and a present value are not.
///
/// # Examples
///
/// ```rust
/// use lambdo::compare::comparables;
///
/// assert!(comparables::<i32>(None, None));
/// assert!(!comparables(Some(&1), None));
/// assert!(comparables(Some(&"a"), Some(&"a")));
/// ```
pub fn comparables<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: PartialOrd + ?Sized,
{
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            std::ptr::eq(left, right) || left.partial_cmp(right) == Some(Ordering::Equal)
        }
        _ => false,
    }
}

/// Returns `true` if both sequences have the same length and every pair of
/// corresponding elements is the same object in memory.
///
/// Ordering and equality are ignored entirely: two equal values stored in
/// different places are different.
///
/// # Examples
///
/// ```rust
/// use lambdo::compare::equals_by_identity;
///
/// let shared = vec![String::from("a"), String::from("b")];
/// let copy = shared.clone();
///
/// assert!(equals_by_identity(&shared, shared.iter()));
/// assert!(!equals_by_identity(&shared, &copy));
/// ```
pub fn equals_by_identity<'a, 'b, T, L, R>(left: L, right: R) -> bool
where
    T: ?Sized + 'a + 'b,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'b T>,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (Some(left_element), Some(right_element)) => {
                if !std::ptr::eq(left_element, right_element) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

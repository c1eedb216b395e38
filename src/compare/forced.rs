//! Permissive comparison of heterogeneous sequences.
//!
//! [`equals_forced`] compares sequences whose elements need not share a type.
//! Each element is wrapped in an [`Element`]:
//!
//! - [`Element::Ordered`] for values with a total order ([`AnyOrd`])
//! - [`Element::Opaque`] for values with no usable ordering
//! - [`Element::Absent`] for missing values
//!
//! Two ordered elements of the same runtime type are compared by ordering.
//! Every other pair of present elements falls back to identity: they are
//! equal only if they are the same object in memory. Identity requires both
//! the address and the runtime type to match, so a struct and its first
//! field are not the same object.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;

/// Total ordering across a type-erased boundary.
///
/// Implemented for every `Ord + 'static` type. Comparing values of different
/// runtime types yields `None`.
///
/// # Examples
///
/// ```rust
/// use lambdo::compare::AnyOrd;
/// use std::cmp::Ordering;
///
/// let number: &dyn AnyOrd = &3_i32;
/// let word: &dyn AnyOrd = &"three";
///
/// assert_eq!(number.cmp_any(&2_i32), Some(Ordering::Greater));
/// assert_eq!(number.cmp_any(word.as_any()), None);
/// ```
pub trait AnyOrd: Any {
    /// Upcasts to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Compares with `other` if it has the same runtime type.
    fn cmp_any(&self, other: &dyn Any) -> Option<Ordering>;
}

impl<T: Ord + Any> AnyOrd for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn cmp_any(&self, other: &dyn Any) -> Option<Ordering> {
        other.downcast_ref::<T>().map(|other| self.cmp(other))
    }
}

/// One element of a sequence compared with [`equals_forced`].
#[derive(Clone, Copy)]
pub enum Element<'a> {
    /// A missing value.
    Absent,
    /// A value with a total order.
    Ordered(&'a dyn AnyOrd),
    /// A value compared by identity only.
    Opaque(&'a dyn Any),
}

impl<'a> Element<'a> {
    /// Wraps an ordered value.
    pub fn ordered<T: Ord + Any>(value: &'a T) -> Self {
        Self::Ordered(value)
    }

    /// Wraps a value that is only ever compared by identity.
    pub fn opaque<T: Any>(value: &'a T) -> Self {
        Self::Opaque(value)
    }

    /// Wraps a possibly missing ordered value.
    pub fn optional<T: Ord + Any>(value: Option<&'a T>) -> Self {
        value.map_or(Self::Absent, Self::ordered)
    }

    /// Returns `true` for [`Element::Absent`].
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    fn identity(&self) -> Option<(*const (), TypeId)> {
        let value: &dyn Any = match *self {
            Self::Absent => return None,
            Self::Ordered(value) => value.as_any(),
            Self::Opaque(value) => value,
        };
        Some((std::ptr::from_ref(value).cast::<()>(), Any::type_id(value)))
    }
}

impl<'a, T: Ord + Any> From<&'a T> for Element<'a> {
    fn from(value: &'a T) -> Self {
        Self::ordered(value)
    }
}

impl<'a, T: Ord + Any> From<Option<&'a T>> for Element<'a> {
    fn from(value: Option<&'a T>) -> Self {
        Self::optional(value)
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => formatter.write_str("Absent"),
            Self::Ordered(_) => formatter.debug_tuple("Ordered").field(&"<ordered>").finish(),
            Self::Opaque(_) => formatter.debug_tuple("Opaque").field(&"<opaque>").finish(),
        }
    }
}

/// Returns `true` if both values have the same runtime type and compare
/// equal, or if they are the same object.
///
/// "The same object" means the same address and the same runtime type. A
/// struct and its first field share an address but are never the same.
///
/// # Examples
///
/// ```rust
/// use lambdo::compare::matching_type;
///
/// assert!(matching_type(&1_u8, &1_u8));
/// assert!(!matching_type(&1_u8, &1_u16));
/// ```
pub fn matching_type(left: &dyn AnyOrd, right: &dyn AnyOrd) -> bool {
    Element::Ordered(left).identity() == Element::Ordered(right).identity()
        || left.cmp_any(right.as_any()) == Some(Ordering::Equal)
}

fn forced_pair(left: Element<'_>, right: Element<'_>) -> bool {
    match (left, right) {
        (Element::Absent, Element::Absent) => true,
        (Element::Absent, _) | (_, Element::Absent) => false,
        (Element::Ordered(left), Element::Ordered(right)) => matching_type(left, right),
        (left, right) => left.identity() == right.identity(),
    }
}

/// Returns `true` if both sequences have the same length and every pair of
/// corresponding elements is "forced" equal.
///
/// Pairs are judged as follows:
///
/// - two absent elements are equal; absent against present is unequal
/// - two ordered elements of the same runtime type are compared by ordering
/// - everything else (mismatched types, opaque elements) compares by identity
///
/// # Examples
///
/// ```rust
/// use lambdo::compare::{Element, equals_forced};
///
/// let name = String::from("ada");
/// let same_name = name.clone();
/// let left = [Element::from(&1_i32), Element::from(&name), Element::Absent];
/// let right = [Element::from(&1_i32), Element::from(&same_name), Element::Absent];
/// assert!(equals_forced(left, right));
///
/// // Same value, different types: not mutually comparable and not identical.
/// assert!(!equals_forced([Element::from(&1_i32)], [Element::from(&1_i64)]));
/// ```
pub fn equals_forced<'a, 'b, L, R>(left: L, right: R) -> bool
where
    L: IntoIterator<Item = Element<'a>>,
    R: IntoIterator<Item = Element<'b>>,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (Some(left_element), Some(right_element)) => {
                if !forced_pair(left_element, right_element) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

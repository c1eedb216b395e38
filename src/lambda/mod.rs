//! Closure ergonomics helpers.
//!
//! Closures read best as single expressions. The helpers in this module turn
//! a value of the wrong type into `()`, `None` or `true`, and turn `if`
//! statements into expressions, so a closure does not have to grow a block.
//!
//! # Examples
//!
//! ```
//! use lambdo::lambda::{as_void, on};
//! use std::collections::HashSet;
//!
//! let mut seen = HashSet::new();
//! let mut duplicates = Vec::new();
//!
//! for word in ["a", "b", "a"] {
//!     on(!seen.insert(word), || duplicates.push(word));
//! }
//! ["c"].into_iter().for_each(|word| as_void(seen.insert(word)));
//!
//! assert_eq!(duplicates, vec!["a"]);
//! assert_eq!(seen.len(), 3);
//! ```

mod utils;

pub use utils::{as_none, as_true, as_void, on, on_else};

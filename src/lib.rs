//! # lambdo
//!
//! Small functional helpers for Rust: first-present-value cascades,
//! element-wise sequence comparison, mapping over sequences and closure
//! ergonomics.
//!
//! ## Overview
//!
//! - **Cascade**: an ordered list of candidate producers (fixed values,
//!   lazy producers, side-effecting actions) resolved to the first present value
//! - **Compare**: sequence equality by ordering, by identity, or a permissive
//!   "forced" mode that tolerates mismatched element types
//! - **Convert**: `map` and the absence-filtering `map_inner`
//! - **Lambda**: helpers that keep closures single-expression
//!
//! ## Feature Flags
//!
//! - `cascade`: [`Cascade`](crate::cascade::Cascade) and the [`cascade!`] macro
//! - `compare`: Sequence comparison helpers
//! - `convert`: Mapping helpers
//! - `lambda`: Closure ergonomics helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambdo::prelude::*;
//!
//! let configured: Option<u16> = None;
//! let port = Cascade::of_optional(configured)
//!     .or_lazy(|| std::env::var("LAMBDO_PORT").ok()?.parse().ok())
//!     .or_default(Candidate::value(8080))
//!     .unwrap();
//!
//! assert!(port > 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module.
///
/// # Usage
///
/// ```rust
/// use lambdo::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "cascade")]
    pub use crate::cascade::*;

    #[cfg(feature = "compare")]
    pub use crate::compare::*;

    #[cfg(feature = "convert")]
    pub use crate::convert::*;

    #[cfg(feature = "lambda")]
    pub use crate::lambda::*;
}

#[cfg(feature = "cascade")]
pub mod cascade;

#[cfg(feature = "compare")]
pub mod compare;

#[cfg(feature = "convert")]
pub mod convert;

#[cfg(feature = "lambda")]
pub mod lambda;

//! First-present-value resolution over candidate producers.
//!
//! This module provides:
//!
//! - [`Candidate`]: One slot of a cascade (fixed value, lazy producer,
//!   side-effecting action, or fallible producer)
//! - [`Cascade`]: An ordered list of candidates resolved to the first present value
//! - [`CascadeState`]: Whether a cascade has been resolved yet
//! - [`CascadeExhausted`], [`CascadeError`]: Errors of the `or_default` family
//! - [`cascade!`](crate::cascade!): Builds a cascade in one expression
//!
//! # Semantics
//!
//! - Candidates are evaluated strictly in the order they were added.
//! - Evaluation stops at the first present value; later candidates are not run.
//! - Each reached candidate runs exactly once per resolution.
//! - Absence is not an error: [`Cascade::resolve`] returns `None`.
//! - Producer failures are never caught. Panics propagate, and errors from
//!   fallible candidates are returned unmodified.
//! - Resolving does not lock the cascade. Appending and resolving again
//!   re-runs every candidate up to the first success, side effects included.
//!
//! # Examples
//!
//! ```rust
//! use lambdo::cascade::{Candidate, Cascade};
//!
//! fn lookup_user_setting() -> Option<String> {
//!     None
//! }
//!
//! let theme = Cascade::of_lazy(lookup_user_setting)
//!     .or_lazy(|| std::env::var("LAMBDO_THEME").ok())
//!     .or_default(Candidate::value("light".to_string()))
//!     .unwrap();
//!
//! assert!(!theme.is_empty());
//! ```

mod builder;
mod candidate;
mod cascade_macro;
mod error;

pub use builder::{Cascade, CascadeState};
pub use candidate::{Candidate, Effect, FallibleProducer, Producer};
pub use error::{CascadeError, CascadeExhausted};

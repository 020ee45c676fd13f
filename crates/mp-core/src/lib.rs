//! # mp-core
//!
//! Error definitions shared by every crate in the mealprep-rs workspace.
//!
//! The calculator distinguishes two kinds of failure. Errors in this crate
//! are the *fatal-to-the-call* kind (a date that cannot be parsed, a
//! configuration file that is malformed). Business-rule failures such as an
//! empty delivery window are ordinary values and live next to the rules that
//! produce them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};

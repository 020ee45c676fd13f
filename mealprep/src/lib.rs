//! # mealprep
//!
//! Computes the program start date and the two delivery windows of a
//! meal-prep program.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `mp-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use mealprep::windows::{CalculationRequest, WindowCalculator};
//!
//! let calc = WindowCalculator::singapore_2026().unwrap();
//! let result = calc.calculate(&CalculationRequest::default().with_signup_date("2026-01-09"));
//! let psd = result.calculations().unwrap().program_start_date.as_ref().unwrap();
//! assert_eq!(psd.earliest_date.to_string(), "2026-01-16");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use mp_core as core;

/// Dates, weekdays, holiday tables and calendars.
pub use mp_time as time;

/// Window rules and the calculator.
pub use mp_windows as windows;

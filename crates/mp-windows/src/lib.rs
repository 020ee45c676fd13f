//! # mp-windows
//!
//! Date-window rules for a three-stage meal-prep program:
//!
//! 1. **Program start**: at least a week after signup, any day.
//! 2. **Delivery 1**: between signup + 4 days and the day before the
//!    program starts.
//! 3. **Delivery 2**: between delivery 1 and the day before Day 6
//!    (program start + 5 + cheat days).
//!
//! Delivery windows skip Sundays and public holidays.
//! [`WindowCalculator`] ties the stages together for a
//! [`CalculationRequest`].
//!
//! ```
//! use mp_windows::{CalculationRequest, Calculation, WindowCalculator};
//!
//! let calc = WindowCalculator::singapore_2026().unwrap();
//! let request = CalculationRequest::default()
//!     .with_signup_date("2026-01-09")
//!     .with_program_start_date("2026-01-20")
//!     .with_calculation(Calculation::D1);
//! let result = calc.calculate(&request);
//! assert!(result.is_success());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `WindowCalculator` — the request orchestrator.
pub mod calculator;

/// Source of today's date and result timestamps.
pub mod clock;

/// Rule constants.
pub mod config;

/// Delivery 1 and delivery 2 rules.
pub mod delivery;

/// Eligibility filter and `DateWindow`.
pub mod eligibility;

/// Program start rule.
pub mod program_start;

/// Request types.
pub mod request;

/// Result types.
pub mod result;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::WindowCalculator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::RuleConfig;
pub use delivery::{Delivery1Window, Delivery2Window};
pub use eligibility::{eligible_dates, DateWindow, EligibleDate};
pub use program_start::ProgramStartDate;
pub use request::{Calculation, CalculationRequest, NormalizedInput};
pub use result::{CalculationResult, Calculations, Outcome};

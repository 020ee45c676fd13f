//! # mp-time
//!
//! Calendar dates, weekdays, holiday tables, and the delivery calendar.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the delivery calendar.
pub mod calendar;

/// Built-in holiday tables (jurisdiction specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `HolidaySet` — immutable, versioned holiday table.
pub mod holiday_set;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, DeliveryCalendar};
pub use date::Date;
pub use holiday_set::{Holiday, HolidaySet};
pub use month::Month;
pub use weekday::Weekday;

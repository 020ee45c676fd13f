//! Eligibility filter: the delivery days inside a date window.

use mp_time::{Calendar, Date};
use serde::Serialize;

/// A closed interval `[earliest, latest]` of calendar dates.
///
/// Construction through [`DateWindow::new`] guarantees `earliest <= latest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    /// First date of the window (inclusive).
    pub earliest: Date,
    /// Last date of the window (inclusive).
    pub latest: Date,
}

impl DateWindow {
    /// Return the window, or `None` if `earliest > latest`.
    pub fn new(earliest: Date, latest: Date) -> Option<Self> {
        (earliest <= latest).then_some(Self { earliest, latest })
    }
}

/// One selectable delivery date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibleDate {
    /// The date itself (`"2026-01-13"` on the wire).
    pub date: Date,
    /// English weekday name, e.g. `"Tuesday"`.
    pub day_of_week: String,
    /// Long form, e.g. `"January 13, 2026"`.
    pub display_date: String,
}

impl From<Date> for EligibleDate {
    fn from(date: Date) -> Self {
        Self {
            date,
            day_of_week: date.weekday().name().to_string(),
            display_date: date.long_display(),
        }
    }
}

/// Dates in `[from, to]` that are neither rest days nor public holidays in
/// `calendar`, in chronological order.
///
/// An inverted range (`from > to`) yields an empty vector.
pub fn eligible_dates<C: Calendar + ?Sized>(calendar: &C, from: Date, to: Date) -> Vec<EligibleDate> {
    calendar
        .business_days(from, to)
        .into_iter()
        .map(EligibleDate::from)
        .collect()
}

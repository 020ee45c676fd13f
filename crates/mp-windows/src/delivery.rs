//! Delivery window rules.
//!
//! * Delivery 1 runs from `signup + processing_days` to the day before the
//!   program starts.
//! * Delivery 2 runs from the delivery 1 date (same day allowed) to the day
//!   before Day 6, where `day6 = program_start + program_days_before_day6 +
//!   cheat_days`.
//!
//! Both windows skip Sundays and public holidays. A window whose bounds cross
//! is not an error of the call: it is reported as an `Unavailable` variant so
//! the caller can still use the other stages.

use mp_core::errors::{Error, Result};
use mp_time::{Calendar, Date};
use serde::{Serialize, Serializer};

use crate::config::RuleConfig;
use crate::eligibility::{eligible_dates, DateWindow, EligibleDate};

const NO_DATES_IN_WINDOW: &str = "No available delivery dates in this window.";

/// Serializes as the literal `true`. Marks a business-rule failure on the
/// wire (`"error": true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleViolation;

impl Serialize for RuleViolation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

// ── Delivery 1 ────────────────────────────────────────────────────────────────

/// Exclusion rules applied to the delivery 1 window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery1Rules {
    /// Sundays are never delivery days.
    pub exclude_sundays: bool,
    /// Public holidays are never delivery days.
    pub exclude_public_holidays: bool,
    /// Days of preparation after signup.
    pub minimum_processing_days: i32,
}

/// Selectable delivery 1 dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery1Dates {
    /// Eligible dates, chronological.
    pub available_dates: Vec<EligibleDate>,
    /// `available_dates.len()`.
    pub count: usize,
    /// Window before the exclusion filter.
    pub window: DateWindow,
    /// Rules that were applied.
    pub rules: Delivery1Rules,
    /// Summary for the customer.
    pub message: String,
}

/// The program starts too soon after signup for any delivery 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery1Unavailable {
    /// Always `true` on the wire.
    pub error: RuleViolation,
    /// Explanation for the customer.
    pub message: String,
    /// First date delivery 1 could happen.
    pub earliest_possible: Date,
    /// Last date delivery 1 could happen (day before program start).
    pub latest_possible: Date,
}

/// Outcome of the delivery 1 rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Delivery1Window {
    /// The window is open.
    Available(Delivery1Dates),
    /// The window is empty because its bounds cross.
    Unavailable(Delivery1Unavailable),
}

impl Delivery1Window {
    /// Return `true` for the `Unavailable` variant.
    pub fn is_error(&self) -> bool {
        matches!(self, Delivery1Window::Unavailable(_))
    }

    /// Customer-facing message of either variant.
    pub fn message(&self) -> &str {
        match self {
            Delivery1Window::Available(d) => &d.message,
            Delivery1Window::Unavailable(u) => &u.message,
        }
    }
}

/// Compute the delivery 1 window for a signup and program start date.
///
/// # Errors
/// Only if an offset would leave the supported date range.
pub fn delivery1_window<C: Calendar + ?Sized>(
    signup: Date,
    program_start: Date,
    calendar: &C,
    rules: &RuleConfig,
) -> Result<Delivery1Window> {
    let earliest = signup.add_days(rules.processing_days)?;
    let latest = program_start.add_days(-1)?;

    let Some(window) = DateWindow::new(earliest, latest) else {
        tracing::debug!(%signup, %program_start, %earliest, %latest, "delivery 1 window closed");
        return Ok(Delivery1Window::Unavailable(Delivery1Unavailable {
            error: RuleViolation,
            message: format!(
                "No available delivery dates. Program start date must be at least {} days after sign-up to allow for delivery.",
                rules.minimum_separation_days()
            ),
            earliest_possible: earliest,
            latest_possible: latest,
        }));
    };

    let available_dates = eligible_dates(calendar, window.earliest, window.latest);
    tracing::debug!(
        %signup,
        %program_start,
        earliest = %window.earliest,
        latest = %window.latest,
        count = available_dates.len(),
        "delivery 1 window"
    );
    Ok(Delivery1Window::Available(Delivery1Dates {
        count: available_dates.len(),
        message: summary(available_dates.len(), &window),
        available_dates,
        window,
        rules: Delivery1Rules {
            exclude_sundays: true,
            exclude_public_holidays: true,
            minimum_processing_days: rules.processing_days,
        },
    }))
}

// ── Delivery 2 ────────────────────────────────────────────────────────────────

/// Exclusion rules applied to the delivery 2 window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery2Rules {
    /// Sundays are never delivery days.
    pub exclude_sundays: bool,
    /// Public holidays are never delivery days.
    pub exclude_public_holidays: bool,
    /// Delivery 2 must arrive strictly before Day 6.
    pub must_arrive_before_day6: bool,
}

/// Selectable delivery 2 dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery2Dates {
    /// Eligible dates, chronological.
    pub available_dates: Vec<EligibleDate>,
    /// `available_dates.len()`.
    pub count: usize,
    /// Window before the exclusion filter.
    pub window: DateWindow,
    /// Program start + 5 + cheat days.
    pub day6_date: Date,
    /// Cheat days that moved Day 6.
    pub cheat_days_applied: i32,
    /// Rules that were applied.
    pub rules: Delivery2Rules,
    /// Summary for the customer.
    pub message: String,
}

/// Cheat days outside the accepted range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidCheatDays {
    /// Always `true` on the wire.
    pub error: RuleViolation,
    /// Explanation for the customer.
    pub message: String,
}

/// Delivery 1 is already on or after Day 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery2Unavailable {
    /// Always `true` on the wire.
    pub error: RuleViolation,
    /// Explanation for the customer.
    pub message: String,
    /// The delivery 1 date that was supplied.
    pub delivery1_date: Date,
    /// Program start + 5 + cheat days.
    pub day6_date: Date,
    /// Day before Day 6.
    pub latest_possible: Date,
}

/// Outcome of the delivery 2 rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Delivery2Window {
    /// The window is open.
    Available(Delivery2Dates),
    /// `cheat_days` outside `[0, max_cheat_days]`.
    InvalidCheatDays(InvalidCheatDays),
    /// The window is empty because its bounds cross.
    Unavailable(Delivery2Unavailable),
}

impl Delivery2Window {
    /// Return `true` for either failure variant.
    pub fn is_error(&self) -> bool {
        !matches!(self, Delivery2Window::Available(_))
    }

    /// Customer-facing message of any variant.
    pub fn message(&self) -> &str {
        match self {
            Delivery2Window::Available(d) => &d.message,
            Delivery2Window::InvalidCheatDays(c) => &c.message,
            Delivery2Window::Unavailable(u) => &u.message,
        }
    }
}

/// Compute the delivery 2 window.
///
/// `cheat_days` is taken as supplied on the wire; values outside
/// `[0, max_cheat_days]` produce [`Delivery2Window::InvalidCheatDays`].
///
/// # Errors
/// Only if an offset would leave the supported date range.
pub fn delivery2_window<C: Calendar + ?Sized>(
    delivery1: Date,
    program_start: Date,
    cheat_days: i64,
    calendar: &C,
    rules: &RuleConfig,
) -> Result<Delivery2Window> {
    if !rules.accepts_cheat_days(cheat_days) {
        tracing::debug!(cheat_days, max = rules.max_cheat_days, "cheat days out of range");
        return Ok(Delivery2Window::InvalidCheatDays(InvalidCheatDays {
            error: RuleViolation,
            message: format!("cheatDays must be between 0 and {}", rules.max_cheat_days),
        }));
    }
    // In range, so it fits the config's i32.
    let cheat_days = cheat_days as i32;

    let offset = rules
        .program_days_before_day6
        .checked_add(cheat_days)
        .ok_or_else(|| {
            Error::Date(format!(
                "day 6 offset overflow: {} + {cheat_days} days",
                rules.program_days_before_day6
            ))
        })?;
    let day6 = program_start.add_days(offset)?;
    let latest = day6.add_days(-1)?;

    let Some(window) = DateWindow::new(delivery1, latest) else {
        tracing::debug!(%delivery1, %program_start, %day6, "delivery 2 window closed");
        return Ok(Delivery2Window::Unavailable(Delivery2Unavailable {
            error: RuleViolation,
            message: format!(
                "No available delivery dates. Delivery 2 must arrive before Day 6 ({day6})."
            ),
            delivery1_date: delivery1,
            day6_date: day6,
            latest_possible: latest,
        }));
    };

    let available_dates = eligible_dates(calendar, window.earliest, window.latest);
    tracing::debug!(
        %delivery1,
        %program_start,
        %day6,
        cheat_days,
        count = available_dates.len(),
        "delivery 2 window"
    );
    Ok(Delivery2Window::Available(Delivery2Dates {
        count: available_dates.len(),
        message: summary(available_dates.len(), &window),
        available_dates,
        window,
        day6_date: day6,
        cheat_days_applied: cheat_days,
        rules: Delivery2Rules {
            exclude_sundays: true,
            exclude_public_holidays: true,
            must_arrive_before_day6: true,
        },
    }))
}

fn summary(count: usize, window: &DateWindow) -> String {
    if count == 0 {
        return NO_DATES_IN_WINDOW.to_string();
    }
    format!(
        "{count} delivery dates available between {} and {} (excluding Sundays and public holidays).",
        window.earliest.short_display(),
        window.latest.short_display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mp_time::calendars::singapore;
    use mp_time::DeliveryCalendar;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn calendar() -> DeliveryCalendar {
        singapore::holidays_2026().unwrap().into()
    }

    fn d1(signup: Date, psd: Date) -> Delivery1Window {
        delivery1_window(signup, psd, &calendar(), &RuleConfig::default()).unwrap()
    }

    fn d2(delivery1: Date, psd: Date, cheat: i64) -> Delivery2Window {
        delivery2_window(delivery1, psd, cheat, &calendar(), &RuleConfig::default()).unwrap()
    }

    #[test]
    fn day6_offset_overflow_is_an_error() {
        let rules = RuleConfig {
            program_days_before_day6: i32::MAX,
            ..RuleConfig::default()
        };
        let err = delivery2_window(date(2026, 1, 15), date(2026, 1, 20), 1, &calendar(), &rules)
            .unwrap_err();
        assert!(matches!(err, Error::Date(_)), "{err}");
    }

    #[test]
    fn delivery1_window_bounds_and_sunday() {
        let Delivery1Window::Available(w) = d1(date(2026, 1, 9), date(2026, 1, 20)) else {
            panic!("expected an open window");
        };
        assert_eq!(w.window.earliest, date(2026, 1, 13));
        assert_eq!(w.window.latest, date(2026, 1, 19));
        assert_eq!(w.count, 6);
        assert!(w.available_dates.iter().all(|e| e.date != date(2026, 1, 18)));
        assert_eq!(w.rules.minimum_processing_days, 4);
        assert_eq!(
            w.message,
            "6 delivery dates available between Jan 13 and Jan 19 (excluding Sundays and public holidays)."
        );
    }

    #[test]
    fn delivery1_too_soon() {
        let out = d1(date(2026, 1, 9), date(2026, 1, 12));
        let Delivery1Window::Unavailable(u) = &out else {
            panic!("expected an unavailable window");
        };
        assert!(out.is_error());
        assert_eq!(u.earliest_possible, date(2026, 1, 13));
        assert_eq!(u.latest_possible, date(2026, 1, 11));
        assert_eq!(
            u.message,
            "No available delivery dates. Program start date must be at least 5 days after sign-up to allow for delivery."
        );
    }

    #[test]
    fn delivery1_exact_minimum_separation() {
        // signup + 5 = program start leaves exactly one day
        let Delivery1Window::Available(w) = d1(date(2026, 1, 9), date(2026, 1, 14)) else {
            panic!("expected an open window");
        };
        assert_eq!(w.window.earliest, w.window.latest);
        assert_eq!(w.count, 1);
    }

    #[test]
    fn delivery1_open_window_with_no_dates() {
        // Window is a single Sunday holiday: 2026-08-09
        let out = d1(date(2026, 8, 5), date(2026, 8, 10));
        let Delivery1Window::Available(w) = &out else {
            panic!("expected an open window");
        };
        assert!(!out.is_error());
        assert_eq!(w.count, 0);
        assert_eq!(out.message(), NO_DATES_IN_WINDOW);
    }

    #[test]
    fn delivery2_day6_and_latest() {
        let Delivery2Window::Available(w) = d2(date(2026, 1, 15), date(2026, 1, 20), 0) else {
            panic!("expected an open window");
        };
        assert_eq!(w.day6_date, date(2026, 1, 25));
        assert_eq!(w.window.earliest, date(2026, 1, 15));
        assert_eq!(w.window.latest, date(2026, 1, 24));
        assert_eq!(w.cheat_days_applied, 0);
        // 15..24 minus Sunday 18
        assert_eq!(w.count, 9);
    }

    #[test]
    fn delivery2_cheat_days_push_day6() {
        let Delivery2Window::Available(w) = d2(date(2026, 1, 15), date(2026, 1, 20), 2) else {
            panic!("expected an open window");
        };
        assert_eq!(w.day6_date, date(2026, 1, 27));
        assert_eq!(w.window.latest, date(2026, 1, 26));
        assert_eq!(w.cheat_days_applied, 2);
    }

    #[test]
    fn delivery2_may_share_delivery1_day() {
        // Delivery 1 on the last day before Day 6 leaves a one-day window.
        let Delivery2Window::Available(w) = d2(date(2026, 1, 24), date(2026, 1, 20), 0) else {
            panic!("expected an open window");
        };
        assert_eq!(w.window.earliest, date(2026, 1, 24));
        assert_eq!(w.window.latest, date(2026, 1, 24));
        assert_eq!(w.available_dates[0].date, date(2026, 1, 24));
    }

    #[test]
    fn delivery2_after_day6() {
        let out = d2(date(2026, 1, 25), date(2026, 1, 20), 0);
        let Delivery2Window::Unavailable(u) = &out else {
            panic!("expected an unavailable window");
        };
        assert_eq!(u.day6_date, date(2026, 1, 25));
        assert_eq!(u.latest_possible, date(2026, 1, 24));
        assert_eq!(u.delivery1_date, date(2026, 1, 25));
        assert_eq!(
            out.message(),
            "No available delivery dates. Delivery 2 must arrive before Day 6 (2026-01-25)."
        );
    }

    #[test]
    fn delivery2_rejects_cheat_days_out_of_range() {
        for cheat in [-1, 31, i64::MAX, i64::MIN] {
            let out = d2(date(2026, 1, 15), date(2026, 1, 20), cheat);
            assert!(
                matches!(out, Delivery2Window::InvalidCheatDays(_)),
                "cheat_days {cheat}"
            );
            assert_eq!(out.message(), "cheatDays must be between 0 and 30");
        }
    }

    #[test]
    fn unavailable_serializes_error_flag() {
        let json = serde_json::to_value(d1(date(2026, 1, 9), date(2026, 1, 12))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": true,
                "message": "No available delivery dates. Program start date must be at least 5 days after sign-up to allow for delivery.",
                "earliestPossible": "2026-01-13",
                "latestPossible": "2026-01-11"
            })
        );
    }

    #[test]
    fn delivery2_serializes_day6_keys() {
        let json = serde_json::to_value(d2(date(2026, 1, 15), date(2026, 1, 20), 1)).unwrap();
        assert_eq!(json["day6Date"], "2026-01-26");
        assert_eq!(json["cheatDaysApplied"], 1);
        assert_eq!(json["rules"]["mustArriveBeforeDay6"], true);
        assert_eq!(json["window"]["latest"], "2026-01-25");
        assert!(json.get("error").is_none());
    }
}

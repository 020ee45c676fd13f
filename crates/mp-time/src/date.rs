//! `Date` type.
//!
//! Dates are stored as a serial number of days since an epoch, so that all
//! arithmetic happens at whole-day granularity with no time-of-day or
//! timezone component to drift.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use mp_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    ///
    /// A trailing time component (`2026-01-09T08:30:00Z`) is accepted and
    /// discarded; only the calendar date is kept.
    pub fn parse_iso(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let date_part = trimmed.split_once('T').map_or(trimmed, |(d, _)| d);
        let (year, month, day) = parse_ymd(date_part).ok_or_else(|| Error::parse(s))?;
        Date::from_ymd(year, month, day).map_err(|_| Error::parse(s))
    }

    /// Create a date from an (unchecked) serial number.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            Date(serial) >= Self::MIN && Date(serial) <= Self::MAX,
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("month is always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Jan 1, 1900 is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow: {self} + {n}")))?;
        if Date(serial) < Self::MIN || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: {self} {n:+} days is out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Iterate over every date in the closed interval `[self, end]` in
    /// chronological order.
    ///
    /// The iterator is empty when `self > end`.
    pub fn through(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0..=end.0).map(Date::from_serial_unchecked)
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Format as `"January 13, 2026"`.
    pub fn long_display(&self) -> String {
        let (y, _, d) = ymd_from_serial(self.0);
        format!("{} {d}, {y}", self.month_of_year().long_name())
    }

    /// Format as `"Jan 13"`.
    pub fn short_display(&self) -> String {
        format!("{} {}", self.month_of_year().short_name(), self.day_of_month())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing / Display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_iso(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Date::parse_iso(&raw).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;

        let year = u16::try_from(value.year())
            .map_err(|_| Error::Date(format!("year {} out of range", value.year())))?;
        Date::from_ymd(year, value.month() as u8, value.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Split `YYYY-MM-DD` into its numeric fields.
///
/// Exactly four year digits and two digits each for month and day.
fn parse_ymd(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !(all_digits(y) && all_digits(m) && all_digits(d)) {
        return None;
    }
    Some((y.parse().ok()?, m.parse().ok()?, d.parse().ok()?))
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1901, year); 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        let start_of_year = serial_from_ymd(y, 1, 1);
        if serial < start_of_year {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Source of "today" and of result timestamps.
//!
//! These are the only non-deterministic inputs of a calculation, so they sit
//! behind a trait that tests (and reproducible runs) can pin.

use chrono::{DateTime, Local, Utc};
use mp_core::errors::Result;
use mp_time::Date;

/// Supplies the current date and instant.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Today's calendar date, used when a request omits `signupDate`.
    fn today(&self) -> Result<Date>;

    /// The current instant, stamped on every result.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock: local date, UTC timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<Date> {
        Date::try_from(Local::now().date_naive())
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: Date,
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze "today" at `today` and timestamps at `now`.
    pub fn new(today: Date, now: DateTime<Utc>) -> Self {
        Self { today, now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<Date> {
        Ok(self.today)
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

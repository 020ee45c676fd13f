//! `Calendar` trait and the delivery calendar.
//!
//! A calendar knows which dates are working days. Deliveries run every day
//! except the weekly rest day (Sunday) and the public holidays listed in a
//! [`HolidaySet`].

use std::sync::Arc;

use crate::date::Date;
use crate::holiday_set::HolidaySet;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Singapore 2026.1 deliveries"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a public holiday in this calendar.
    fn is_public_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on the weekly rest day.
    fn is_rest_day(&self, date: Date) -> bool {
        date.weekday().is_rest_day()
    }

    /// Return `true` if `date` is a working day.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_rest_day(date) && !self.is_public_holiday(date)
    }

    /// Collect the working days in the closed interval `[from, to]`.
    ///
    /// Returns an empty vector when `from > to`.
    fn business_days(&self, from: Date, to: Date) -> Vec<Date> {
        from.through(to)
            .filter(|&d| {
                let keep = self.is_business_day(d);
                if !keep {
                    tracing::trace!(date = %d, weekday = %d.weekday(), "excluded");
                }
                keep
            })
            .collect()
    }
}

/// Delivery calendar: Sundays plus the holidays of a [`HolidaySet`].
#[derive(Debug, Clone)]
pub struct DeliveryCalendar {
    name: String,
    holidays: Arc<HolidaySet>,
}

impl DeliveryCalendar {
    /// Create a calendar over the given holiday table.
    pub fn new(holidays: Arc<HolidaySet>) -> Self {
        Self {
            name: format!("{} deliveries", holidays.label()),
            holidays,
        }
    }

    /// The holiday table backing this calendar.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
}

impl From<HolidaySet> for DeliveryCalendar {
    fn from(holidays: HolidaySet) -> Self {
        Self::new(Arc::new(holidays))
    }
}

impl Calendar for DeliveryCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_public_holiday(&self, date: Date) -> bool {
        self.holidays.contains(date)
    }
}

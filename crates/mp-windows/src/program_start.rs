//! Program start date rule.
//!
//! The program may begin any day, weekends and holidays included, once the
//! lead time after signup has passed. There is no upper bound.

use mp_core::errors::Result;
use mp_time::Date;
use serde::Serialize;

use crate::config::RuleConfig;

/// Earliest permitted program start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramStartDate {
    /// Signup date plus the lead time.
    pub earliest_date: Date,
    /// The rule in words.
    pub rule: String,
    /// Always `true`: no weekday or holiday restriction applies.
    pub no_restrictions: bool,
    /// Advisory message for the customer.
    pub message: String,
}

/// Compute the earliest program start date for a signup.
///
/// # Errors
/// Only if the result would leave the supported date range.
pub fn program_start_date(signup: Date, rules: &RuleConfig) -> Result<ProgramStartDate> {
    let earliest = signup.add_days(rules.program_lead_days)?;
    tracing::debug!(%signup, %earliest, "program start window");
    Ok(ProgramStartDate {
        earliest_date: earliest,
        rule: format!(
            "Must be at least {} days after sign-up",
            rules.program_lead_days
        ),
        no_restrictions: true,
        message: format!(
            "You can start your program any day from {} onwards (including weekends and holidays).",
            earliest.long_display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn seven_days_after_signup() {
        let psd = program_start_date(date(2026, 1, 9), &RuleConfig::default()).unwrap();
        assert_eq!(psd.earliest_date, date(2026, 1, 16));
        assert_eq!(psd.rule, "Must be at least 7 days after sign-up");
        assert!(psd.no_restrictions);
        assert_eq!(
            psd.message,
            "You can start your program any day from January 16, 2026 onwards (including weekends and holidays)."
        );
    }

    #[test]
    fn may_land_on_sunday_or_holiday() {
        // 2026-05-24 + 7 = 2026-05-31, a Sunday and Vesak Day
        let psd = program_start_date(date(2026, 5, 24), &RuleConfig::default()).unwrap();
        assert_eq!(psd.earliest_date, date(2026, 5, 31));
    }

    #[test]
    fn out_of_range_is_error() {
        assert!(program_start_date(Date::MAX, &RuleConfig::default()).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let psd = program_start_date(date(2026, 1, 9), &RuleConfig::default()).unwrap();
        let json = serde_json::to_value(&psd).unwrap();
        assert_eq!(json["earliestDate"], "2026-01-16");
        assert_eq!(json["noRestrictions"], true);
    }
}

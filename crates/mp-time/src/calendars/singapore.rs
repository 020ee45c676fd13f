//! Singapore public holidays.
//!
//! Dates follow the Ministry of Manpower gazette. Holidays that fall on a
//! Sunday are listed together with the Monday on which they are observed.

use mp_core::errors::Result;

use crate::date::Date;
use crate::holiday_set::{Holiday, HolidaySet};

/// Jurisdiction name used by the Singapore tables.
pub const JURISDICTION: &str = "Singapore";

/// Version tag of the built-in 2026 table.
pub const VERSION_2026: &str = "2026.1";

const HOLIDAYS_2026: [(u8, u8, &str); 14] = [
    (1, 1, "New Year's Day"),
    (2, 17, "Chinese New Year"),
    (2, 18, "Chinese New Year"),
    (3, 21, "Hari Raya Puasa"),
    (4, 3, "Good Friday"),
    (5, 1, "Labour Day"),
    (5, 27, "Hari Raya Haji"),
    (5, 31, "Vesak Day"),
    (6, 1, "Vesak Day (observed)"),
    (8, 9, "National Day"),
    (8, 10, "National Day (observed)"),
    (11, 8, "Deepavali"),
    (11, 9, "Deepavali (observed)"),
    (12, 25, "Christmas Day"),
];

/// The 2026 Singapore public holiday table.
pub fn holidays_2026() -> Result<HolidaySet> {
    let holidays = HOLIDAYS_2026
        .iter()
        .map(|&(m, d, name)| Ok(Holiday::new(Date::from_ymd(2026, m, d)?, name)))
        .collect::<Result<Vec<_>>>()?;
    HolidaySet::new(JURISDICTION, VERSION_2026, Some(2026), holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Calendar, DeliveryCalendar};
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn table_is_complete() {
        let set = holidays_2026().unwrap();
        assert_eq!(set.len(), 14);
        assert_eq!(set.label(), "Singapore 2026.1");
        assert!(set.iter().all(|(d, _)| d.year() == 2026));
    }

    #[test]
    fn new_years_day() {
        let set = holidays_2026().unwrap();
        assert_eq!(set.name_of(date(2026, 1, 1)), Some("New Year's Day"));
    }

    #[test]
    fn sunday_holidays_have_observed_monday() {
        let set = holidays_2026().unwrap();
        for (sunday, monday) in [((5, 31), (6, 1)), ((8, 9), (8, 10)), ((11, 8), (11, 9))] {
            let sun = date(2026, sunday.0, sunday.1);
            let mon = date(2026, monday.0, monday.1);
            assert_eq!(sun.weekday(), Weekday::Sunday);
            assert_eq!(mon.weekday(), Weekday::Monday);
            assert!(set.contains(sun) && set.contains(mon));
        }
    }

    #[test]
    fn good_friday_not_a_delivery_day() {
        let cal = DeliveryCalendar::from(holidays_2026().unwrap());
        assert!(!cal.is_business_day(date(2026, 4, 3)));
        assert!(cal.is_business_day(date(2026, 4, 4)));
    }
}

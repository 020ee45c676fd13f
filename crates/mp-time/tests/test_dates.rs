//! Integration tests for `Date` parsing, arithmetic and formatting.

use mp_time::date::{days_in_month, is_leap_year};
use mp_time::{Date, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2026));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2026, 2), 28);
}

#[test]
fn consecutive_serials_are_consecutive_dates() {
    // Walk every day of 2026 and check year/month/day and weekday cycling.
    let start = date(2026, 1, 1);
    let end = date(2026, 12, 31);
    let mut expected_weekday = Weekday::Thursday.ordinal();
    let mut count = 0;
    for d in start.through(end) {
        assert_eq!(d.weekday().ordinal(), expected_weekday, "{d}");
        expected_weekday = expected_weekday % 7 + 1;
        assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
        count += 1;
    }
    assert_eq!(count, 365);
}

#[test]
fn known_weekdays() {
    assert_eq!(date(2026, 1, 9).weekday(), Weekday::Friday);
    assert_eq!(date(2026, 1, 20).weekday(), Weekday::Tuesday);
    assert_eq!(date(2026, 1, 25).weekday(), Weekday::Sunday);
    assert_eq!(date(2000, 2, 29).weekday(), Weekday::Tuesday);
}

#[test]
fn add_days_stays_in_range() {
    assert_eq!(date(1900, 1, 1), Date::MIN);
    assert_eq!(date(2199, 12, 31), Date::MAX);
    assert!(Date::MIN.add_days(-1).is_err());
    assert!(Date::MAX.add_days(1).is_err());
}

fn any_date() -> impl Strategy<Value = Date> {
    (0..=Date::MAX - Date::MIN).prop_map(|n| Date::MIN.add_days(n).unwrap())
}

proptest! {
    #[test]
    fn iso_text_roundtrips(d in any_date()) {
        let text = d.to_string();
        prop_assert_eq!(text.len(), 10);
        prop_assert_eq!(text.parse::<Date>().unwrap(), d);
    }

    #[test]
    fn add_days_matches_difference(d in any_date(), n in -400i32..400) {
        if let Ok(moved) = d.add_days(n) {
            prop_assert_eq!(moved - d, n);
            prop_assert_eq!(d - moved, -n);
        }
    }

    #[test]
    fn weekday_repeats_every_seven_days(d in any_date()) {
        if let Ok(next_week) = d.add_days(7) {
            prop_assert_eq!(next_week.weekday(), d.weekday());
        }
    }

    #[test]
    fn through_length_matches_span(d in any_date(), span in 0i32..60) {
        if let Ok(end) = d.add_days(span) {
            prop_assert_eq!(d.through(end).count(), span as usize + 1);
            prop_assert_eq!(end.through(d).count(), if span == 0 { 1 } else { 0 });
        }
    }
}

//! Integration tests for holiday tables and the delivery calendar.

use std::sync::Arc;

use mp_time::calendars::singapore;
use mp_time::{Calendar, Date, DeliveryCalendar, HolidaySet, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn singapore_calendar() -> DeliveryCalendar {
    DeliveryCalendar::new(Arc::new(singapore::holidays_2026().unwrap()))
}

/// Count rest days and holidays in the range, the way a person would with a
/// wall calendar.
fn excluded_in(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    from.through(to)
        .filter(|&d| d.weekday() == Weekday::Sunday || cal.is_public_holiday(d))
        .collect()
}

#[test]
fn february_2026_business_days() {
    let cal = singapore_calendar();
    let from = date(2026, 2, 1);
    let to = date(2026, 2, 28);
    let business = cal.business_days(from, to);
    let excluded = excluded_in(&cal, from, to);
    // 4 Sundays + 2 Chinese New Year days
    assert_eq!(excluded.len(), 6);
    assert_eq!(business.len(), 28 - 6);
    assert!(!business.contains(&date(2026, 2, 17)));
    assert!(!business.contains(&date(2026, 2, 18)));
}

#[test]
fn holiday_table_from_file() {
    let dir = std::env::temp_dir().join(format!("mp-time-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let toml_path = dir.join("holidays.toml");
    std::fs::write(
        &toml_path,
        "jurisdiction = \"Testland\"\nversion = \"7\"\n\n[[holidays]]\ndate = \"2026-01-13\"\nname = \"Test Day\"\n",
    )
    .unwrap();
    let from_toml = HolidaySet::from_path(&toml_path).unwrap();
    assert!(from_toml.contains(date(2026, 1, 13)));

    let json_path = dir.join("holidays.json");
    std::fs::write(&json_path, serde_json::to_string(&from_toml).unwrap()).unwrap();
    let from_json = HolidaySet::from_path(&json_path).unwrap();
    assert_eq!(from_json, from_toml);

    assert!(HolidaySet::from_path(&dir.join("missing.toml")).is_err());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn calendars_share_one_table() {
    let table = Arc::new(singapore::holidays_2026().unwrap());
    let a = DeliveryCalendar::new(Arc::clone(&table));
    let b = DeliveryCalendar::new(Arc::clone(&table));
    assert_eq!(Arc::strong_count(&table), 3);
    assert_eq!(a.name(), b.name());
    assert_eq!(a.holidays().len(), 14);
}

proptest! {
    #[test]
    fn business_days_never_sunday_or_holiday(start in 0i32..365, span in -5i32..60) {
        let cal = singapore_calendar();
        let from = date(2026, 1, 1).add_days(start).unwrap();
        let to = from.add_days(span).unwrap();
        let days = cal.business_days(from, to);
        for d in &days {
            prop_assert_ne!(d.weekday(), Weekday::Sunday);
            prop_assert!(!cal.holidays().contains(*d));
            prop_assert!(*d >= from && *d <= to);
        }
        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
        if span < 0 {
            prop_assert!(days.is_empty());
        }
    }
}

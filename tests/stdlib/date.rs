//! Integration tests for date helpers

use sundry::clock::{Clock, FixedClock};
use sundry::{Date, Value, date};

fn d(date: Date) -> Value {
    Value::Date(date)
}

#[test]
fn format_examples() {
    let day = d(Date::from_ymd(2025, 9, 5));
    assert_eq!(date::format_date(&day, "DD/MM/YYYY"), "05/09/2025");
    assert_eq!(date::format_date_default(&day), "05/09/2025");
    assert_eq!(date::format_date(&day, "YYYY"), "2025");
    assert_eq!(date::DEFAULT_FORMAT, "DD/MM/YYYY");
}

#[test]
fn leap_years() {
    assert!(date::is_leap_year(&Value::from(2024)));
    assert!(!date::is_leap_year(&Value::from(2025)));
    assert!(!date::is_leap_year(&Value::from(1900)));
    assert!(date::is_leap_year(&Value::from(2000)));
}

#[test]
fn days_between_example() {
    let a = Value::from("2025-01-01");
    let b = Value::from("2025-01-10");
    assert_eq!(date::days_between(&a, &b), 9.0);
    assert_eq!(date::days_between(&b, &a), 9.0);
    let mixed = date::days_between(&d(Date::from_ymd(2025, 1, 1)), &b);
    assert_eq!(mixed, 9.0);
}

#[test]
fn time_ago_with_injected_clock() {
    let clock = FixedClock(Date::from_ymd_hms(2025, 9, 5, 12, 0, 0));
    let cases = [
        (Date::from_ymd_hms(2025, 9, 5, 11, 59, 30), "30s ago"),
        (Date::from_ymd_hms(2025, 9, 5, 11, 55, 0), "5m ago"),
        (Date::from_ymd_hms(2025, 9, 5, 9, 0, 0), "3h ago"),
        (Date::from_ymd_hms(2025, 9, 1, 12, 0, 0), "4d ago"),
        (Date::from_ymd_hms(2025, 7, 1, 12, 0, 0), "2mo ago"),
        (Date::from_ymd_hms(2023, 9, 1, 12, 0, 0), "2y ago"),
    ];
    for (then, expected) in cases {
        assert_eq!(date::time_ago(&d(then), &clock), expected);
    }
}

#[test]
fn time_ago_accepts_borrowed_and_boxed_clocks() {
    let fixed = FixedClock(Date::from_ymd(2025, 1, 1));
    let boxed: Box<dyn Clock> = Box::new(FixedClock(Date::from_ymd(2025, 1, 1)));
    let then = d(Date::from_ymd_hms(2024, 12, 31, 23, 0, 0));
    assert_eq!(date::time_ago(&then, &&fixed), "1h ago");
    assert_eq!(date::time_ago(&then, boxed.as_ref()), "1h ago");
}

#[test]
fn day_bounds_and_shifts() {
    let moment = d(Date::from_ymd_hms(2024, 2, 28, 18, 30, 0));
    assert_eq!(date::add_days(&moment, &Value::from(1)), Date::from_ymd_hms(2024, 2, 29, 18, 30, 0));
    assert_eq!(date::start_of_day(&moment), Date::from_ymd(2024, 2, 28));
    assert_eq!(
        date::end_of_day(&moment),
        Date::from_ymd_hms_milli(2024, 2, 28, 23, 59, 59, 999)
    );
}

#[test]
fn invalid_inputs_use_sentinels() {
    let junk = Value::from("yesterday");
    let clock = FixedClock(Date::from_ymd(2025, 1, 1));
    assert_eq!(date::format_date(&junk, "DD"), "Invalid Date");
    assert_eq!(date::time_ago(&junk, &clock), "Invalid Date");
    assert!(date::days_between(&junk, &Value::from("2025-01-01")).is_nan());
    assert_eq!(date::add_days(&junk, &Value::from(1)), Date::INVALID);
    assert_eq!(date::start_of_day(&d(Date::INVALID)), Date::INVALID);
    assert_eq!(date::end_of_day(&junk), Date::INVALID);
}

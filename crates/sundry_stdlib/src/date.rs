//! Calendar formatting and arithmetic helpers.
//!
//! Helpers that expect a date accept only [`Value::Date`] holding a valid
//! instant. Anything else yields `"Invalid Date"` for string results and
//! [`Date::INVALID`] for date results. `days_between` is the exception: it
//! coerces strings, numbers and other date-like values first.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use sundry_foundation::{Date, Error, Result, Value};

use crate::clock::{Clock, SystemClock};
use crate::fallback::or_sentinel;

/// Format used by [`format_date_default`].
pub const DEFAULT_FORMAT: &str = "DD/MM/YYYY";

const MILLIS_PER_DAY: u64 = 86_400_000;

/// Largest distance from the epoch a date may have, in milliseconds.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
/// Thirty-day month.
const MONTH: i64 = 2_592_000;
/// 365-day year.
const YEAR: i64 = 31_536_000;

// =============================================================================
// Formatting
// =============================================================================

/// Date: format - substitute `DD`, `MM`, `YYYY`, `HH`, `mm`, `ss`
///
/// Tokens are replaced one after another, first occurrence only, in the
/// order listed. Text produced by an earlier substitution is visible to the
/// later ones. The year is not padded.
///
/// `format_date(2025-09-05, "DD/MM/YYYY") = "05/09/2025"`.
#[must_use]
pub fn format_date(date: &Value, format: &str) -> String {
    let result = expect_naive(date).map(|dt| {
        format
            .replacen("DD", &format!("{:02}", dt.day()), 1)
            .replacen("MM", &format!("{:02}", dt.month()), 1)
            .replacen("YYYY", &dt.year().to_string(), 1)
            .replacen("HH", &format!("{:02}", dt.hour()), 1)
            .replacen("mm", &format!("{:02}", dt.minute()), 1)
            .replacen("ss", &format!("{:02}", dt.second()), 1)
    });
    or_sentinel("format_date", result, invalid_text)
}

/// Date: format with [`DEFAULT_FORMAT`]
#[must_use]
pub fn format_date_default(date: &Value) -> String {
    format_date(date, DEFAULT_FORMAT)
}

/// Date: time-ago - coarse elapsed time such as `"5m ago"`
///
/// Elapsed whole seconds relative to `clock` pick the largest unit among
/// seconds, minutes, hours, days, 30-day months and 365-day years. Dates in
/// the future produce a negative second count.
pub fn time_ago<C: Clock + ?Sized>(date: &Value, clock: &C) -> String {
    let result = expect_naive(date).and_then(|then| {
        let now = clock
            .now()
            .naive()
            .ok_or_else(|| Error::invalid_date("clock reported an invalid date"))?;
        let elapsed = (now - then).num_milliseconds().div_euclid(1000);
        Ok(describe_elapsed(elapsed))
    });
    or_sentinel("time_ago", result, invalid_text)
}

/// Date: time-ago against the system clock
#[must_use]
pub fn time_ago_now(date: &Value) -> String {
    time_ago(date, &SystemClock)
}

fn describe_elapsed(seconds: i64) -> String {
    match seconds {
        s if s < MINUTE => format!("{s}s ago"),
        s if s < HOUR => format!("{}m ago", s / MINUTE),
        s if s < DAY => format!("{}h ago", s / HOUR),
        s if s < MONTH => format!("{}d ago", s / DAY),
        s if s < YEAR => format!("{}mo ago", s / MONTH),
        s => format!("{}y ago", s / YEAR),
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

/// Date: days-between - absolute difference in days, rounded up
///
/// Accepts dates, date strings, epoch milliseconds, and values that coerce
/// to one of those. `NaN` if either side is not a valid date.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn days_between(a: &Value, b: &Value) -> f64 {
    let result = coerce_millis(a).and_then(|a| {
        let diff = coerce_millis(b)?.abs_diff(a);
        Ok(diff.div_ceil(MILLIS_PER_DAY) as f64)
    });
    or_sentinel("days_between", result, || f64::NAN)
}

/// Date: leap-year? - Gregorian rule
///
/// The argument goes through numeric coercion first; `NaN` is never a
/// leap year.
#[must_use]
pub fn is_leap_year(year: &Value) -> bool {
    let y = year.to_number();
    (y % 4.0 == 0.0 && y % 100.0 != 0.0) || y % 400.0 == 0.0
}

/// Date: add-days - shift by `days` calendar days (may be negative)
///
/// `days` goes through numeric coercion. The day of the month moves to
/// `trunc(day + days)`, so a fractional count rounds toward the start of
/// the month: from the 5th, `1.5` lands on the 6th and `-1.5` on the 3rd.
/// A non-finite count gives [`Date::INVALID`].
#[must_use]
pub fn add_days(date: &Value, days: &Value) -> Date {
    let result = expect_naive(date).and_then(|dt| {
        let shift = day_shift(dt.day(), days.to_number())?;
        Ok(Date::from_naive(dt).add_days(shift))
    });
    or_sentinel("add_days", result, || Date::INVALID)
}

#[allow(clippy::cast_possible_truncation)]
fn day_shift(day: u32, days: f64) -> Result<i64> {
    let target = (f64::from(day) + days).trunc();
    if !target.is_finite() {
        return Err(Error::invalid_argument(format!("day count {days}")));
    }
    // `as` saturates; out-of-range shifts fail in `Date::add_days`.
    Ok((target as i64).saturating_sub(i64::from(day)))
}

/// Date: start-of-day - same day at `00:00:00.000`
#[must_use]
pub fn start_of_day(date: &Value) -> Date {
    let result = date.expect_date().map(|d| d.with_time(NaiveTime::MIN));
    or_sentinel("start_of_day", result, || Date::INVALID)
}

/// Date: end-of-day - same day at `23:59:59.999`
#[must_use]
pub fn end_of_day(date: &Value) -> Date {
    let result = date.expect_date().and_then(|d| {
        let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .ok_or_else(|| Error::invalid_argument("end of day"))?;
        Ok(d.with_time(last))
    });
    or_sentinel("end_of_day", result, || Date::INVALID)
}

// =============================================================================
// Coercion
// =============================================================================

fn invalid_text() -> String {
    Date::INVALID.to_string()
}

fn expect_naive(value: &Value) -> Result<NaiveDateTime> {
    value
        .expect_date()?
        .naive()
        .ok_or_else(|| Error::invalid_date(value.to_key()))
}

/// Epoch milliseconds of anything date-like.
fn coerce_millis(value: &Value) -> Result<i64> {
    let date = match value {
        Value::Date(d) => *d,
        Value::String(s) => Date::parse(s)?,
        Value::Number(n) => millis_to_date(*n)?,
        Value::Nil => Date::from_millis(0),
        Value::Bool(b) => Date::from_millis(i64::from(*b)),
        Value::Vec(_) => Date::parse(&value.to_key())?,
        Value::Undefined | Value::Map(_) => return Err(Error::invalid_date(value.to_key())),
    };
    date.timestamp_millis()
        .ok_or_else(|| Error::invalid_date(value.to_key()))
}

#[allow(clippy::cast_possible_truncation)]
fn millis_to_date(n: f64) -> Result<Date> {
    if !n.is_finite() || n.abs() > MAX_EPOCH_MILLIS {
        return Err(Error::invalid_date(n.to_string()));
    }
    Ok(Date::from_millis(n.trunc() as i64))
}

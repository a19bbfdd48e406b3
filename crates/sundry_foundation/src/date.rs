//! Calendar instants with an explicit invalid sentinel.
//!
//! A [`Date`] is a wall-clock date and time at millisecond precision. There
//! is no time zone: every field is read and written as given. Operations that
//! cannot produce a real instant return [`Date::INVALID`] instead of failing.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{Error, Result};

/// Wall-clock calendar instant, or the invalid sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(Option<NaiveDateTime>);

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

impl Date {
    /// The invalid date sentinel.
    pub const INVALID: Self = Self(None);

    /// Wraps a naive date-time, truncated to milliseconds.
    #[must_use]
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        let millis = naive.nanosecond() / 1_000_000 * 1_000_000;
        Self(naive.with_nanosecond(millis))
    }

    /// Midnight on the given calendar day. `month` is 1-based.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::from_ymd_hms_milli(year, month, day, 0, 0, 0, 0)
    }

    /// The given calendar day and time of day. `month` is 1-based.
    #[must_use]
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self::from_ymd_hms_milli(year, month, day, hour, min, sec, 0)
    }

    /// Fully specified constructor; any out-of-range field yields [`Date::INVALID`].
    #[must_use]
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
        milli: u32,
    ) -> Self {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_milli_opt(hour, min, sec, milli));
        Self(naive)
    }

    /// Milliseconds since 1970-01-01T00:00:00.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc()))
    }

    /// Parses an ISO 8601 style date string.
    ///
    /// Accepts RFC 3339 (offsets are normalised to UTC), date-times with a
    /// `T` or space separator, `YYYY-MM-DD`, `YYYY-MM`, and `YYYY`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidDate` error if no accepted layout matches.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_naive(dt.naive_utc()));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self::from_naive(naive));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self(Some(date.and_time(NaiveTime::MIN))));
        }
        if let Some(date) = parse_partial(s) {
            return Ok(Self(Some(date.and_time(NaiveTime::MIN))));
        }

        Err(Error::invalid_date(input))
    }

    /// Returns true unless this is the invalid sentinel.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the underlying wall-clock value.
    #[must_use]
    pub const fn naive(&self) -> Option<NaiveDateTime> {
        self.0
    }

    /// Milliseconds since 1970-01-01T00:00:00.
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.map(|dt| dt.and_utc().timestamp_millis())
    }

    /// Shifts by whole calendar days, keeping the time of day.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        let shifted = self
            .0
            .and_then(|dt| Duration::try_days(days).and_then(|d| dt.checked_add_signed(d)));
        Self(shifted)
    }

    /// Same calendar day with the time of day replaced.
    #[must_use]
    pub fn with_time(&self, time: NaiveTime) -> Self {
        Self(self.0.map(|dt| dt.date().and_time(time)))
    }
}

impl From<NaiveDateTime> for Date {
    fn from(naive: NaiveDateTime) -> Self {
        Self::from_naive(naive)
    }
}

/// `YYYY-MM` and `YYYY` resolve to the first day of the period.
fn parse_partial(s: &str) -> Option<NaiveDate> {
    let mut parts = s.splitn(2, '-');
    let year = parts.next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month = match parts.next() {
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "Date({})", dt.format("%Y-%m-%dT%H:%M:%S%.3f")),
            None => write!(f, "Date(Invalid Date)"),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format("%a %b %d %Y %H:%M:%S")),
            None => write!(f, "Invalid Date"),
        }
    }
}

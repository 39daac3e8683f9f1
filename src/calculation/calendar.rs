//! Calendar date primitives.
//!
//! This module owns the `YYYY-MM-DD` text form of dates and the day and month
//! arithmetic that accrual and holiday generation are built on. Dates are pure
//! calendar dates: no time of day and no timezone.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Canonical textual date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string into a date.
///
/// Surrounding whitespace is ignored. The year, month and day are taken
/// literally; the text must have exactly four year digits and two digits each
/// for month and day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateFormat`] if the text is malformed or names
/// a day that does not exist (e.g. `2023-02-29`).
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{format_date, parse_date};
///
/// let date = parse_date("2024-02-29").unwrap();
/// assert_eq!(format_date(date), "2024-02-29");
/// assert!(parse_date("2024-2-29").is_err());
/// ```
pub fn parse_date(text: &str) -> EngineResult<NaiveDate> {
    let trimmed = text.trim();
    let invalid = || EngineError::InvalidDateFormat {
        input: text.to_string(),
    };

    let well_shaped = trimmed.len() == 10
        && trimmed.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(1900, 2), 28);
/// assert_eq!(days_in_month(2025, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns the first day of the date's month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Returns the first day of the month after the date's month.
pub fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is a valid date")
}

/// Returns the last day of the date's month.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    add_days(next_month_start(date), -1)
}

/// Shifts a date by `days` (negative moves backwards).
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Counts calendar days from `b` to `a`, both endpoints included.
///
/// Meaningful when `a >= b`; for `a == b` the result is 1.
pub fn diff_days_inclusive(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days() + 1
}

/// Ascending iterator over the first-of-month dates overlapping a date range.
///
/// The iterator is `Clone`, so the same sequence can be re-derived by cloning
/// before consuming it.
#[derive(Debug, Clone)]
pub struct MonthStarts {
    current: NaiveDate,
    last: NaiveDate,
}

impl Iterator for MonthStarts {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.last {
            return None;
        }
        let item = self.current;
        self.current = next_month_start(item);
        Some(item)
    }
}

/// Iterates the first day of every calendar month overlapping `[start, end]`.
///
/// Yields nothing when `end` falls in an earlier month than `start`.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{format_date, iterate_month_starts, parse_date};
///
/// let start = parse_date("2024-11-15").unwrap();
/// let end = parse_date("2025-01-03").unwrap();
/// let months: Vec<String> = iterate_month_starts(start, end).map(format_date).collect();
/// assert_eq!(months, ["2024-11-01", "2024-12-01", "2025-01-01"]);
/// ```
pub fn iterate_month_starts(start: NaiveDate, end: NaiveDate) -> MonthStarts {
    MonthStarts {
        current: month_start(start),
        last: month_start(end),
    }
}

/// Lists the dates in `[start, end]` that fall Monday through Friday.
///
/// Returns an empty vector when `start > end`.
pub fn working_days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

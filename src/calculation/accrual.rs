//! Proportional accrual by calendar month.
//!
//! A monthly rate is earned in full for every fully covered calendar month and
//! pro rata by days for partially covered months, so a range is first split at
//! month boundaries and each piece is prorated against its own month length.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar::{days_in_month, diff_days_inclusive, iterate_month_starts, month_end};

/// The part of an accrual range that falls inside one calendar month.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{AccrualSegment, parse_date};
///
/// let segment = AccrualSegment {
///     month_start: parse_date("2024-01-01").unwrap(),
///     start: parse_date("2024-01-01").unwrap(),
///     end: parse_date("2024-01-15").unwrap(),
///     days: 15,
///     days_in_month: 31,
///     hours: 150.0,
/// };
/// assert!(!segment.is_full_month());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualSegment {
    /// First day of the calendar month this segment belongs to.
    pub month_start: NaiveDate,
    /// First covered day.
    pub start: NaiveDate,
    /// Last covered day.
    pub end: NaiveDate,
    /// Covered days, both ends included.
    pub days: u32,
    /// Length of the calendar month.
    pub days_in_month: u32,
    /// Hours earned in this segment.
    pub hours: f64,
}

impl AccrualSegment {
    /// Returns true if the segment covers its whole month.
    pub fn is_full_month(&self) -> bool {
        self.days == self.days_in_month
    }
}

/// Splits `[start, end]` into per-month segments and prorates `hours_per_month`.
///
/// Returns an empty vector when `end < start`. Segments are ordered
/// chronologically and their hours sum to [`accrue_hours_between`].
pub fn accrual_segments(
    start: NaiveDate,
    end: NaiveDate,
    hours_per_month: f64,
) -> Vec<AccrualSegment> {
    if end < start {
        return Vec::new();
    }

    iterate_month_starts(start, end)
        .filter_map(|ms| {
            let seg_start = start.max(ms);
            let seg_end = end.min(month_end(ms));
            if seg_end < seg_start {
                return None;
            }

            let dim = days_in_month(ms.year(), ms.month());
            let days = diff_days_inclusive(seg_end, seg_start) as u32;
            Some(AccrualSegment {
                month_start: ms,
                start: seg_start,
                end: seg_end,
                days,
                days_in_month: dim,
                hours: hours_per_month * (f64::from(days) / f64::from(dim)),
            })
        })
        .collect()
}

/// Accrues `hours_per_month` over `[start, end]` with exact per-month proration.
///
/// A full calendar month contributes exactly `hours_per_month`; a partial
/// month contributes the fraction of its days covered. No rounding is applied.
/// Returns `0.0` when `end < start`.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{accrue_hours_between, parse_date};
///
/// let start = parse_date("2024-01-01").unwrap();
/// let end = parse_date("2024-01-15").unwrap();
/// let hours = accrue_hours_between(start, end, 310.0);
/// assert!((hours - 150.0).abs() < 1e-9);
/// ```
pub fn accrue_hours_between(start: NaiveDate, end: NaiveDate, hours_per_month: f64) -> f64 {
    accrual_segments(start, end, hours_per_month)
        .iter()
        .map(|segment| segment.hours)
        .sum()
}

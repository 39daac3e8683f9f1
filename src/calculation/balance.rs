//! Balance report assembly.
//!
//! This module composes accrual and allocation into a [`BalanceReport`]: both
//! pools are accrued from the start date to the reference date, usage is summed
//! over the supplied entries, and the total is drawn ferie-first.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::AccrualRates;
use crate::models::{BalanceReport, EarnedHours, LeaveEntry, SimulationResult};

use super::accrual::accrue_hours_between;
use super::allocation::allocate_usage;

/// Converts hours into workday equivalents.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::hours_to_days;
///
/// assert_eq!(hours_to_days(20.0, 8.0), 2.5);
/// ```
pub fn hours_to_days(hours: f64, hours_per_workday: f64) -> f64 {
    hours / hours_per_workday
}

/// Accrues both pools from `start` to `as_of`.
///
/// Unset rates resolve to the statutory constants times twelve; each annual
/// rate is divided by 12 and accrued independently.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{earned_as_of, parse_date};
/// use ferie_engine::config::AccrualRates;
///
/// let start = parse_date("2024-01-01").unwrap();
/// let as_of = parse_date("2024-06-30").unwrap();
/// let earned = earned_as_of(as_of, start, &AccrualRates::new(Some(120.0), Some(24.0)));
/// assert!((earned.ferie - 60.0).abs() < 1e-9);
/// assert!((earned.par - 12.0).abs() < 1e-9);
/// ```
pub fn earned_as_of(as_of: NaiveDate, start: NaiveDate, rates: &AccrualRates) -> EarnedHours {
    EarnedHours {
        ferie: accrue_hours_between(start, as_of, rates.ferie_per_month()),
        par: accrue_hours_between(start, as_of, rates.par_per_month()),
    }
}

/// Builds the balance report as of a reference date.
///
/// Usage is the sum of hours over every entry in `leaves`. Entries dated
/// after `as_of` are counted too, so planned leave already reduces the
/// balance.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{calculate_balance, parse_date};
/// use ferie_engine::config::AccrualRates;
/// use ferie_engine::models::LeaveEntry;
///
/// let start = parse_date("2024-01-01").unwrap();
/// let as_of = parse_date("2024-12-31").unwrap();
/// let leaves = vec![LeaveEntry::new(parse_date("2024-08-12").unwrap(), 40.0, "Summer")];
///
/// let rates = AccrualRates::new(Some(160.0), Some(104.0));
/// let report = calculate_balance(as_of, start, &leaves, &rates);
/// assert!((report.ferie_remaining - 120.0).abs() < 1e-9);
/// assert!((report.total_remaining - 224.0).abs() < 1e-9);
/// ```
pub fn calculate_balance(
    as_of: NaiveDate,
    start: NaiveDate,
    leaves: &[LeaveEntry],
    rates: &AccrualRates,
) -> BalanceReport {
    let earned = earned_as_of(as_of, start, rates);
    let used: f64 = leaves.iter().map(|leave| leave.hours).sum();
    let remaining = allocate_usage(earned.ferie, earned.par, used);

    let report = BalanceReport {
        as_of,
        ferie_earned: earned.ferie,
        par_earned: earned.par,
        used,
        ferie_remaining: remaining.ferie,
        par_remaining: remaining.par,
        total_remaining: remaining.total(),
    };

    if report.is_overdrawn() {
        debug!(
            as_of = %as_of,
            used = report.used,
            ferie_remaining = report.ferie_remaining,
            "Leave usage exceeds earned hours"
        );
    }

    report
}

/// Checks whether `requested_hours` more leave fits in the balance at `as_of`.
///
/// The request is added to the usage already recorded in `leaves` and the
/// combined figure is drawn from the earned pools again.
pub fn simulate_request(
    as_of: NaiveDate,
    start: NaiveDate,
    leaves: &[LeaveEntry],
    requested_hours: f64,
    rates: &AccrualRates,
) -> SimulationResult {
    let report = calculate_balance(as_of, start, leaves, rates);
    let after = allocate_usage(
        report.ferie_earned,
        report.par_earned,
        report.used + requested_hours,
    );

    SimulationResult {
        report,
        requested_hours,
        ferie_after: after.ferie,
        par_after: after.par,
        total_after: after.total(),
        sufficient: after.total() >= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::parse_date;
    use crate::config::{FERIE_HOURS_PER_MONTH, PAR_HOURS_PER_MONTH};

    const TOLERANCE: f64 = 1e-5;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "Expected {}, got {}",
            expected,
            actual
        );
    }

    fn leave(d: &str, hours: f64, note: &str) -> LeaveEntry {
        LeaveEntry::new(date(d), hours, note)
    }

    #[test]
    fn test_earned_defaults_to_statutory_constants() {
        let earned = earned_as_of(date("2024-01-31"), date("2024-01-01"), &AccrualRates::default());
        assert_close(earned.ferie, FERIE_HOURS_PER_MONTH);
        assert_close(earned.par, PAR_HOURS_PER_MONTH);
    }

    #[test]
    fn test_earned_before_start_is_zero() {
        let earned = earned_as_of(date("2023-12-31"), date("2024-01-01"), &AccrualRates::default());
        assert_eq!(earned, EarnedHours { ferie: 0.0, par: 0.0 });
    }

    #[test]
    fn test_balance_counts_future_entries() {
        let leaves = vec![
            leave("2024-01-15", 8.0, "Test"),
            leave("2024-02-01", 8.0, "Future"),
        ];

        let report = calculate_balance(
            date("2024-01-31"),
            date("2024-01-01"),
            &leaves,
            &AccrualRates::default(),
        );

        assert_eq!(report.as_of, date("2024-01-31"));
        assert_close(report.ferie_earned, FERIE_HOURS_PER_MONTH);
        assert_close(report.par_earned, PAR_HOURS_PER_MONTH);
        assert_eq!(report.used, 16.0);

        // 16h exceeds ferie, so PAR absorbs the rest
        assert_close(report.ferie_remaining, 0.0);
        assert_close(
            report.par_remaining,
            PAR_HOURS_PER_MONTH - (16.0 - FERIE_HOURS_PER_MONTH),
        );
        assert_close(
            report.total_remaining,
            FERIE_HOURS_PER_MONTH + PAR_HOURS_PER_MONTH - 16.0,
        );
    }

    #[test]
    fn test_balance_overdraft_goes_to_ferie() {
        let leaves = vec![leave("2024-01-10", 40.0, "Long break")];
        let report = calculate_balance(
            date("2024-01-31"),
            date("2024-01-01"),
            &leaves,
            &AccrualRates::default(),
        );

        assert_close(report.par_remaining, 0.0);
        assert_close(
            report.ferie_remaining,
            FERIE_HOURS_PER_MONTH + PAR_HOURS_PER_MONTH - 40.0,
        );
        assert!(report.is_overdrawn());
    }

    #[test]
    fn test_balance_without_leaves() {
        let report = calculate_balance(
            date("2024-12-31"),
            date("2024-01-01"),
            &[],
            &AccrualRates::new(Some(160.0), Some(104.0)),
        );
        assert_eq!(report.used, 0.0);
        assert_close(report.ferie_remaining, 160.0);
        assert_close(report.par_remaining, 104.0);
        assert_close(report.total_remaining, 264.0);
    }

    #[test]
    fn test_holiday_records_do_not_consume_hours() {
        let leaves = vec![
            LeaveEntry::holiday(date("2024-01-06"), "Epifania"),
            leave("2024-01-08", 4.0, "Morning"),
        ];
        let report = calculate_balance(
            date("2024-01-31"),
            date("2024-01-01"),
            &leaves,
            &AccrualRates::default(),
        );
        assert_eq!(report.used, 4.0);
    }

    #[test]
    fn test_simulation_within_balance_is_sufficient() {
        let leaves = vec![leave("2024-03-04", 16.0, "Ski")];
        let result = simulate_request(
            date("2024-06-30"),
            date("2024-01-01"),
            &leaves,
            24.0,
            &AccrualRates::new(Some(120.0), Some(60.0)),
        );

        assert_close(result.report.ferie_remaining, 44.0);
        assert_close(result.ferie_after, 20.0);
        assert_close(result.par_after, 30.0);
        assert_close(result.total_after, 50.0);
        assert!(result.sufficient);
    }

    #[test]
    fn test_simulation_beyond_balance_is_insufficient() {
        let result = simulate_request(
            date("2024-01-31"),
            date("2024-01-01"),
            &[],
            30.0,
            &AccrualRates::new(Some(120.0), Some(60.0)),
        );

        assert_close(result.par_after, 0.0);
        assert_close(result.ferie_after, -15.0);
        assert!(!result.sufficient);
    }

    #[test]
    fn test_simulation_exactly_exhausting_is_sufficient() {
        let result = simulate_request(
            date("2024-01-31"),
            date("2024-01-01"),
            &[],
            15.0,
            &AccrualRates::new(Some(120.0), Some(60.0)),
        );
        assert_eq!(result.total_after, 0.0);
        assert!(result.sufficient);
    }
}

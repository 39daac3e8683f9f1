//! Balance report models for the Ferie Engine.
//!
//! This module contains the [`BalanceReport`] type and its companions that
//! capture all outputs from a balance calculation: earned hours per pool,
//! total usage, and what remains after the draw.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::hours_to_days;
use crate::config::HOURS_PER_WORKDAY;

/// Hours earned in each pool up to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarnedHours {
    /// Accrued ferie hours.
    pub ferie: f64,
    /// Accrued PAR hours.
    pub par: f64,
}

/// The complete result of a balance calculation.
///
/// Recomputed on every call and never persisted by the engine.
///
/// # Example
///
/// ```
/// use ferie_engine::models::BalanceReport;
/// use chrono::NaiveDate;
///
/// let report = BalanceReport {
///     as_of: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     ferie_earned: 16.0,
///     par_earned: 8.0,
///     used: 20.0,
///     ferie_remaining: 0.0,
///     par_remaining: 4.0,
///     total_remaining: 4.0,
/// };
/// assert!(!report.is_overdrawn());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Reference date of the report.
    pub as_of: NaiveDate,
    /// Ferie hours accrued from the start date to `as_of`.
    pub ferie_earned: f64,
    /// PAR hours accrued from the start date to `as_of`.
    pub par_earned: f64,
    /// Sum of hours across every supplied leave entry.
    pub used: f64,
    /// Ferie left after the draw; negative signals an overdraft.
    pub ferie_remaining: f64,
    /// PAR left after the draw; never negative for non-negative usage.
    pub par_remaining: f64,
    /// `ferie_remaining + par_remaining`.
    pub total_remaining: f64,
}

impl BalanceReport {
    /// Returns true if usage exceeded both pools and ferie went negative.
    pub fn is_overdrawn(&self) -> bool {
        self.ferie_remaining < 0.0
    }

    /// Expresses every figure of the report in workdays.
    pub fn in_days(&self, hours_per_workday: f64) -> DayEquivalents {
        DayEquivalents {
            ferie_earned: hours_to_days(self.ferie_earned, hours_per_workday),
            par_earned: hours_to_days(self.par_earned, hours_per_workday),
            used: hours_to_days(self.used, hours_per_workday),
            ferie_remaining: hours_to_days(self.ferie_remaining, hours_per_workday),
            par_remaining: hours_to_days(self.par_remaining, hours_per_workday),
            total_remaining: hours_to_days(self.total_remaining, hours_per_workday),
        }
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Balance as of {}", self.as_of.format("%Y-%m-%d"))?;
        write_line(f, "Ferie earned:", self.ferie_earned)?;
        write_line(f, "PAR earned:", self.par_earned)?;
        write_line(f, "Used:", self.used)?;
        write_line(f, "Ferie left:", self.ferie_remaining)?;
        write_line(f, "PAR left:", self.par_remaining)?;
        write_line(f, "Total left:", self.total_remaining)
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, label: &str, hours: f64) -> fmt::Result {
    writeln!(
        f,
        "  {:<16}{:.2} h ({:.2} days)",
        label,
        hours,
        hours_to_days(hours, HOURS_PER_WORKDAY)
    )
}

/// The figures of a [`BalanceReport`] converted to workdays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayEquivalents {
    /// Ferie earned, in days.
    pub ferie_earned: f64,
    /// PAR earned, in days.
    pub par_earned: f64,
    /// Usage, in days.
    pub used: f64,
    /// Ferie left, in days.
    pub ferie_remaining: f64,
    /// PAR left, in days.
    pub par_remaining: f64,
    /// Total left, in days.
    pub total_remaining: f64,
}

/// Outcome of simulating an additional leave request on top of a balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The balance before the request.
    pub report: BalanceReport,
    /// Hours requested.
    pub requested_hours: f64,
    /// Ferie left after the request.
    pub ferie_after: f64,
    /// PAR left after the request.
    pub par_after: f64,
    /// `ferie_after + par_after`.
    pub total_after: f64,
    /// True when the request fits in the earned pools (`total_after >= 0`).
    pub sufficient: bool,
}

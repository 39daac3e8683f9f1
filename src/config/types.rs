//! Configuration types for leave accrual.
//!
//! This module contains the statutory default constants and the strongly-typed
//! policy structures deserialized from the YAML policy file.

use serde::{Deserialize, Serialize};

use crate::calculation::Province;

/// Ferie hours accrued per full calendar month.
pub const FERIE_HOURS_PER_MONTH: f64 = 13.3333333;

/// PAR hours accrued per full calendar month.
pub const PAR_HOURS_PER_MONTH: f64 = 8.6666666;

/// Hours in one working day, used to express balances in days.
pub const HOURS_PER_WORKDAY: f64 = 8.0;

/// Annual accrual rates, each falling back to the statutory constant.
///
/// # Example
///
/// ```
/// use ferie_engine::config::{AccrualRates, FERIE_HOURS_PER_MONTH};
///
/// let rates = AccrualRates::default();
/// assert_eq!(rates.ferie_per_year(), FERIE_HOURS_PER_MONTH * 12.0);
///
/// let custom = AccrualRates::new(Some(120.0), None);
/// assert_eq!(custom.ferie_per_month(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccrualRates {
    /// Ferie hours per year; `None` means `FERIE_HOURS_PER_MONTH * 12`.
    #[serde(default)]
    pub ferie_hours_per_year: Option<f64>,
    /// PAR hours per year; `None` means `PAR_HOURS_PER_MONTH * 12`.
    #[serde(default)]
    pub par_hours_per_year: Option<f64>,
}

impl AccrualRates {
    /// Creates rates from optional annual figures.
    pub fn new(ferie_hours_per_year: Option<f64>, par_hours_per_year: Option<f64>) -> Self {
        Self {
            ferie_hours_per_year,
            par_hours_per_year,
        }
    }

    /// Fills whichever rate is unset here from `fallback`.
    pub fn or(self, fallback: AccrualRates) -> Self {
        Self {
            ferie_hours_per_year: self.ferie_hours_per_year.or(fallback.ferie_hours_per_year),
            par_hours_per_year: self.par_hours_per_year.or(fallback.par_hours_per_year),
        }
    }

    /// Resolved annual ferie rate.
    pub fn ferie_per_year(&self) -> f64 {
        self.ferie_hours_per_year
            .unwrap_or(FERIE_HOURS_PER_MONTH * 12.0)
    }

    /// Resolved annual PAR rate.
    pub fn par_per_year(&self) -> f64 {
        self.par_hours_per_year.unwrap_or(PAR_HOURS_PER_MONTH * 12.0)
    }

    /// Resolved monthly ferie rate.
    pub fn ferie_per_month(&self) -> f64 {
        self.ferie_per_year() / 12.0
    }

    /// Resolved monthly PAR rate.
    pub fn par_per_month(&self) -> f64 {
        self.par_per_year() / 12.0
    }
}

/// Leave policy loaded from `policy.yaml`.
///
/// Every field is optional in the file; missing fields take the statutory
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Annual ferie entitlement in hours.
    #[serde(default)]
    pub ferie_hours_per_year: Option<f64>,
    /// Annual PAR entitlement in hours.
    #[serde(default)]
    pub par_hours_per_year: Option<f64>,
    /// Hours in one working day.
    #[serde(default = "default_hours_per_workday")]
    pub hours_per_workday: f64,
    /// Province used for holiday generation when a request names none.
    #[serde(default)]
    pub default_province: Province,
}

fn default_hours_per_workday() -> f64 {
    HOURS_PER_WORKDAY
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            ferie_hours_per_year: None,
            par_hours_per_year: None,
            hours_per_workday: HOURS_PER_WORKDAY,
            default_province: Province::default(),
        }
    }
}

impl LeavePolicy {
    /// The policy's accrual rates.
    pub fn rates(&self) -> AccrualRates {
        AccrualRates::new(self.ferie_hours_per_year, self.par_hours_per_year)
    }
}

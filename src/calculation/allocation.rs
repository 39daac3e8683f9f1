//! Usage allocation across the ferie and PAR pools.
//!
//! Usage is drawn from ferie first, then from PAR. Whatever is left once both
//! pools are empty is charged to ferie, which then goes negative. That
//! overdraft is a signal to the caller, not an error.

use serde::{Deserialize, Serialize};

/// Remaining pool balances after usage has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Remaining ferie hours; negative on overdraft.
    pub ferie: f64,
    /// Remaining PAR hours.
    pub par: f64,
}

impl AllocationResult {
    /// Sum of both pools.
    pub fn total(&self) -> f64 {
        self.ferie + self.par
    }
}

/// Draws `used` hours from the ferie pool, then PAR, overdrafting ferie.
///
/// The function is total. `par` never ends below zero for non-negative input
/// pools; `ferie` ends negative only when `used > ferie + par`. Negative `used`
/// is not rejected and flows through the same arithmetic.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{AllocationResult, allocate_usage};
///
/// assert_eq!(allocate_usage(20.0, 10.0, 5.0), AllocationResult { ferie: 15.0, par: 10.0 });
/// assert_eq!(allocate_usage(5.0, 10.0, 10.0), AllocationResult { ferie: 0.0, par: 5.0 });
/// assert_eq!(allocate_usage(5.0, 10.0, 20.0), AllocationResult { ferie: -5.0, par: 0.0 });
/// ```
pub fn allocate_usage(ferie: f64, par: f64, used: f64) -> AllocationResult {
    let mut ferie = ferie;
    let mut par = par;
    let mut used = used;

    let take_ferie = ferie.min(used);
    ferie -= take_ferie;
    used -= take_ferie;

    let take_par = par.min(used);
    par -= take_par;
    used -= take_par;

    // anything left overdrafts ferie
    ferie -= used;

    AllocationResult { ferie, par }
}

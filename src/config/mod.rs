//! Configuration loading and management for the Ferie Engine.
//!
//! This module provides the statutory accrual constants, the optional-rate
//! structure that replaces default parameters, and loading of the leave policy
//! from YAML.
//!
//! # Example
//!
//! ```no_run
//! use ferie_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Ferie per month: {}", config.rates().ferie_per_month());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE};
pub use types::{
    AccrualRates, FERIE_HOURS_PER_MONTH, HOURS_PER_WORKDAY, LeavePolicy, PAR_HOURS_PER_MONTH,
};

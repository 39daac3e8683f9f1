//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave policy
//! from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AccrualRates, LeavePolicy};

/// Name of the policy file inside a configuration directory.
pub const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to the leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── policy.yaml   # Accrual rates, workday length, default province
/// ```
///
/// # Example
///
/// ```no_run
/// use ferie_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Hours per workday: {}", loader.policy().hours_per_workday);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads the policy from `policy.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The policy file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let policy = Self::load_yaml::<LeavePolicy>(&policy_path)?;

        info!(
            path = %policy_path.display(),
            province = %policy.default_province,
            hours_per_workday = policy.hours_per_workday,
            "Loaded leave policy"
        );

        Ok(Self { policy })
    }

    /// Wraps an in-memory policy.
    pub fn from_policy(policy: LeavePolicy) -> Self {
        Self { policy }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the policy's accrual rates.
    pub fn rates(&self) -> AccrualRates {
        self.policy.rates()
    }
}

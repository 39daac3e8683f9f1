//! Error types for the Ferie Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Calculation failures are date parsing ([`EngineError::InvalidDateFormat`])
//! and holiday years chrono cannot represent ([`EngineError::YearOutOfRange`]);
//! the remaining variants come from loading the leave policy.

use thiserror::Error;

/// The main error type for the Ferie Engine.
///
/// # Example
///
/// ```
/// use ferie_engine::error::EngineError;
///
/// let error = EngineError::InvalidDateFormat {
///     input: "2024/01/31".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date format '2024/01/31': expected YYYY-MM-DD"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string did not match `YYYY-MM-DD` or named a day that does not exist.
    #[error("Invalid date format '{input}': expected YYYY-MM-DD")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// A calendar year lies outside the range chrono can represent.
    #[error("Year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Policy file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

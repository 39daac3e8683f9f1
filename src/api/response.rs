//! Response types for the Ferie Engine API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{BalanceReport, DayEquivalents};

/// Success body of `/balance`: the report plus its figures in workdays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// The balance report.
    #[serde(flatten)]
    pub report: BalanceReport,
    /// The same figures in workdays.
    pub days: DayEquivalents,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid date error response.
    pub fn invalid_date(input: &str) -> Self {
        Self::with_details(
            "INVALID_DATE_FORMAT",
            format!("Invalid date format '{}': expected YYYY-MM-DD", input),
            "Dates must be calendar dates written as YYYY-MM-DD",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidDateFormat { input } => {
                ApiErrorResponse::bad_request(ApiError::invalid_date(&input))
            }
            EngineError::YearOutOfRange { year } => ApiErrorResponse::bad_request(
                ApiError::validation_error(format!(
                    "Year {} is outside the supported calendar range",
                    year
                )),
            ),
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_date_maps_to_bad_request() {
        let engine_error = EngineError::InvalidDateFormat {
            input: "2024-13-01".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE_FORMAT");
        assert!(api_error.error.message.contains("2024-13-01"));
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "./config/policy.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_year_out_of_range_maps_to_validation_error() {
        let api_error: ApiErrorResponse = EngineError::YearOutOfRange { year: 300_000 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("300000"));
    }

    #[test]
    fn test_error_response_keeps_status_and_json_body() {
        let response =
            ApiErrorResponse::bad_request(ApiError::validation_error("bad")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn test_balance_response_flattens_report() {
        let report = BalanceReport {
            as_of: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            ferie_earned: 16.0,
            par_earned: 8.0,
            used: 8.0,
            ferie_remaining: 8.0,
            par_remaining: 8.0,
            total_remaining: 16.0,
        };
        let response = BalanceResponse {
            days: report.in_days(8.0),
            report,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["as_of"], "2024-01-31");
        assert_eq!(json["total_remaining"], 16.0);
        assert_eq!(json["days"]["total_remaining"], 2.0);
    }
}

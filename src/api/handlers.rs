//! HTTP request handlers for the Ferie Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    Province, calculate_balance, format_date, get_holidays_for_year, parse_date,
    simulate_request, working_days_in_range,
};

use super::request::{
    BalanceInput, BalanceRequest, HolidaysQuery, SimulationRequest, WorkingDaysQuery,
};
use super::response::{ApiError, ApiErrorResponse, BalanceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/balance", post(balance_handler))
        .route("/simulate", post(simulate_handler))
        .route("/holidays/:year", get(holidays_handler))
        .route("/working-days", get(working_days_handler))
        .with_state(state)
}

/// Handler for POST /balance.
///
/// Accepts a balance request and returns the balance report.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let input = match resolve_input(request, &state) {
        Ok(input) => input,
        Err(response) => return failure(response, correlation_id),
    };

    let start_time = Instant::now();
    let report = calculate_balance(input.as_of, input.start, &input.leaves, &input.rates);
    let days = report.in_days(state.config().policy().hours_per_workday);

    info!(
        correlation_id = %correlation_id,
        as_of = %input.as_of,
        leaves_count = input.leaves.len(),
        total_remaining = report.total_remaining,
        duration_us = start_time.elapsed().as_micros(),
        "Balance calculated successfully"
    );

    json_ok(BalanceResponse { report, days })
}

/// Handler for POST /simulate.
///
/// Adds the requested hours to the recorded usage and reports whether the
/// balance covers them.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let requested_hours = request.requested_hours;
    let input = match resolve_input(request.balance, &state) {
        Ok(input) => input,
        Err(response) => return failure(response, correlation_id),
    };

    let start_time = Instant::now();
    let result = simulate_request(
        input.as_of,
        input.start,
        &input.leaves,
        requested_hours,
        &input.rates,
    );

    info!(
        correlation_id = %correlation_id,
        as_of = %input.as_of,
        requested_hours,
        total_after = result.total_after,
        sufficient = result.sufficient,
        duration_us = start_time.elapsed().as_micros(),
        "Simulation completed successfully"
    );

    json_ok(result)
}

/// Handler for GET /holidays/:year.
async fn holidays_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
    query: Result<Query<HolidaysQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => {
            let error = ApiError::validation_error(rejection.body_text());
            return failure(ApiErrorResponse::bad_request(error), correlation_id);
        }
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let error = ApiError::validation_error(rejection.body_text());
            return failure(ApiErrorResponse::bad_request(error), correlation_id);
        }
    };

    let province = query
        .province
        .as_deref()
        .map(Province::from_code)
        .unwrap_or(state.config().policy().default_province);
    let holidays = match get_holidays_for_year(year, province) {
        Ok(holidays) => holidays,
        Err(err) => return failure(err.into(), correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        year,
        province = %province,
        holidays_count = holidays.len(),
        "Holidays generated"
    );

    json_ok(holidays)
}

/// Handler for GET /working-days.
async fn working_days_handler(query: Result<Query<WorkingDaysQuery>, QueryRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let error = ApiError::validation_error(rejection.body_text());
            return failure(ApiErrorResponse::bad_request(error), correlation_id);
        }
    };

    let range = parse_date(&query.start)
        .and_then(|start| parse_date(&query.end).map(|end| (start, end)));
    let (start, end) = match range {
        Ok(range) => range,
        Err(err) => return failure(err.into(), correlation_id),
    };

    let days: Vec<String> = working_days_in_range(start, end)
        .into_iter()
        .map(format_date)
        .collect();

    info!(
        correlation_id = %correlation_id,
        start = %start,
        end = %end,
        days_count = days.len(),
        "Working days listed"
    );

    json_ok(days)
}

/// Parses request dates and fills unset rates from the loaded policy.
fn resolve_input(
    request: BalanceRequest,
    state: &AppState,
) -> Result<BalanceInput, ApiErrorResponse> {
    let mut input = BalanceInput::try_from(request)?;
    input.rates = input.rates.or(state.config().rates());
    Ok(input)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn failure(response: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        status = response.status.as_u16(),
        code = %response.error.code,
        error = %response.error.message,
        "Request rejected"
    );
    response.into_response()
}

/// Maps a JSON body rejection to an API error response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message names the offending field
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    failure(ApiErrorResponse::bad_request(error), correlation_id)
}

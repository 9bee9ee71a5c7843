//! HTTP request handlers for the Bracket Tax Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compare_scenarios, compare_years, compute_breakdown, compute_tax, generate_report,
    round_half_up,
};
use crate::error::EngineError;
use crate::models::TaxInput;

use super::request::{ScenarioComparisonRequest, TaxRequest, YearComparisonRequest};
use super::response::{
    ApiError, ApiErrorResponse, BreakdownResponse, ScenarioComparisonResponse, TaxResponse,
    YearComparisonResponse, YearsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tax", post(tax_handler))
        .route("/breakdown", post(breakdown_handler))
        .route("/summary", post(summary_handler))
        .route("/compare/scenarios", post(compare_scenarios_handler))
        .route("/compare/years", post(compare_years_handler))
        .route("/years", get(years_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Unwraps a JSON body or builds the 400 response for a rejected one.
fn extract_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

/// Handler for POST /tax.
async fn tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax request");

    let request = match extract_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let table = state.registry().resolve(&request.year);
    let tax = round_half_up(compute_tax(request.taxable_income, table));

    info!(
        correlation_id = %correlation_id,
        year_applied = %table.year(),
        tax = %tax,
        "Tax computed"
    );
    json_response(
        StatusCode::OK,
        TaxResponse {
            year_requested: request.year.clone(),
            year_applied: table.year().to_string(),
            taxable_income: request.taxable_income,
            tax,
        },
    )
}

/// Handler for POST /breakdown.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match extract_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let table = state.registry().resolve(&request.year);
    let entries = compute_breakdown(request.taxable_income, table);
    let raw_total: Decimal = entries.iter().map(|entry| entry.tax_amount).sum();
    let total_tax = round_half_up(raw_total);

    info!(
        correlation_id = %correlation_id,
        year_applied = %table.year(),
        entries = entries.len(),
        "Breakdown computed"
    );
    json_response(
        StatusCode::OK,
        BreakdownResponse {
            year_requested: request.year.clone(),
            year_applied: table.year().to_string(),
            taxable_income: request.taxable_income,
            total_tax,
            entries,
        },
    )
}

/// Handler for POST /summary.
///
/// Returns a full report with audit trace for one set of inputs.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let input = match extract_json(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match generate_report(&input, state.registry()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %report.calculation_id,
                total_tax = %report.summary.total_tax,
                duration_us = start_time.elapsed().as_micros(),
                "Summary completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /compare/scenarios.
async fn compare_scenarios_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioComparisonRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing scenario comparison request");

    let request = match extract_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let summaries = compare_scenarios(&request.scenarios, state.registry());

    info!(
        correlation_id = %correlation_id,
        scenarios = summaries.len(),
        "Scenario comparison completed"
    );
    json_response(StatusCode::OK, ScenarioComparisonResponse { summaries })
}

/// Handler for POST /compare/years.
async fn compare_years_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearComparisonRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing year comparison request");

    let request = match extract_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let registry = state.registry();
    let rows = if request.years.is_empty() {
        compare_years(request.income, &registry.years(), registry)
    } else {
        compare_years(request.income, &request.years, registry)
    };

    info!(
        correlation_id = %correlation_id,
        years = rows.len(),
        "Year comparison completed"
    );
    json_response(
        StatusCode::OK,
        YearComparisonResponse {
            income: request.income,
            rows,
        },
    )
}

/// Handler for GET /years.
async fn years_handler(State(state): State<AppState>) -> Response {
    let registry = state.registry();
    json_response(
        StatusCode::OK,
        YearsResponse {
            name: state.config().metadata().name.clone(),
            default_year: registry.default_year().to_string(),
            years: registry.years().into_iter().map(str::to_string).collect(),
        },
    )
}

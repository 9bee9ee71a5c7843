//! Response types for the Bracket Tax Engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from engine errors to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{BracketEntry, TaxSummary, YearComparisonRow};

/// Response body for `/tax`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxResponse {
    /// The year that was asked for.
    pub year_requested: String,
    /// The year whose table was applied.
    pub year_applied: String,
    /// The taxable income that was taxed.
    pub taxable_income: Decimal,
    /// Tax owed, rounded to the cent.
    pub tax: Decimal,
}

/// Response body for `/breakdown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownResponse {
    /// The year that was asked for.
    pub year_requested: String,
    /// The year whose table was applied.
    pub year_applied: String,
    /// The taxable income that was broken down.
    pub taxable_income: Decimal,
    /// Sum of the entries' tax amounts, rounded to the cent.
    pub total_tax: Decimal,
    /// One entry per bracket that taxes part of the income.
    pub entries: Vec<BracketEntry>,
}

/// Response body for `/compare/scenarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioComparisonResponse {
    /// One summary per scenario, in request order.
    pub summaries: Vec<TaxSummary>,
}

/// Response body for `/compare/years`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearComparisonResponse {
    /// The compared income.
    pub income: Decimal,
    /// One row per year, oldest first.
    pub rows: Vec<YearComparisonRow>,
}

/// Response body for `/years`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearsResponse {
    /// Name of the configured schedule.
    pub name: String,
    /// Year used when an unknown year is requested.
    pub default_year: String,
    /// Every configured year, oldest first.
    pub years: Vec<String>,
}

/// Body returned for every rejected request.
///
/// `code` is stable for clients to match on; `message` is for people.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code such as `INVALID_INPUT`.
    pub code: String,
    /// What went wrong.
    pub message: String,
    /// Extra context, omitted when there is none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Builds an error body without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Builds an error body carrying extra context.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// A request body that parsed but lacks a required field.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// A request body that is not valid JSON for the endpoint.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] paired with the status it is sent with.
pub struct ApiErrorResponse {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// JSON body of the response.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let ApiErrorResponse { status, error } = self;
        (status, Json(error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidInput { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    "Amounts must be zero or positive",
                ),
            },
            // Table and registry problems are server-side; callers cannot fix them.
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidBracketTable { .. }
            | EngineError::DefaultYearMissing { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Bracket configuration error",
                    message,
                ),
            },
        }
    }
}

//! HTTP API module for the Bracket Tax Engine.
//!
//! This module exposes the tax calculator, breakdown generator, summaries,
//! and comparisons as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ScenarioComparisonRequest, TaxRequest, YearComparisonRequest};
pub use response::{
    ApiError, BreakdownResponse, ScenarioComparisonResponse, TaxResponse, YearComparisonResponse,
    YearsResponse,
};
pub use state::AppState;

//! Request types for the Bracket Tax Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_YEAR;
use crate::error::{EngineError, EngineResult};
use crate::models::TaxInput;

fn default_year() -> String {
    DEFAULT_YEAR.to_string()
}

fn reject_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

/// Request body for the `/tax` and `/breakdown` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// Income after deductions.
    pub taxable_income: Decimal,
    /// Year identifier; unknown years use the default table.
    #[serde(default = "default_year")]
    pub year: String,
}

impl TaxRequest {
    /// Rejects a negative taxable income.
    pub fn validate(&self) -> EngineResult<()> {
        reject_negative("taxable_income", self.taxable_income)
    }
}

/// Request body for the `/compare/scenarios` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioComparisonRequest {
    /// Scenarios to evaluate, in display order.
    pub scenarios: Vec<TaxInput>,
}

impl ScenarioComparisonRequest {
    /// Validates every scenario, naming the offending index on failure.
    pub fn validate(&self) -> EngineResult<()> {
        for (index, scenario) in self.scenarios.iter().enumerate() {
            scenario.validate().map_err(|err| match err {
                EngineError::InvalidInput { field, message } => EngineError::InvalidInput {
                    field: format!("scenarios[{}].{}", index, field),
                    message,
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

/// Request body for the `/compare/years` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearComparisonRequest {
    /// Income compared across years.
    pub income: Decimal,
    /// Years to compare; every registered year when empty.
    #[serde(default)]
    pub years: Vec<String>,
}

impl YearComparisonRequest {
    /// Rejects a negative income.
    pub fn validate(&self) -> EngineResult<()> {
        reject_negative("income", self.income)
    }
}

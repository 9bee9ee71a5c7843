//! Calculation input models.
//!
//! This module contains [`TaxInput`] and the itemized [`DeductionItems`] and
//! [`CreditItems`] used to build one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Itemized deductions subtracted from gross income.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionItems {
    /// Retirement plan contributions.
    pub retirement_contributions: Decimal,
    /// Deductible medical expenses.
    pub medical_expenses: Decimal,
    /// Charitable donations.
    pub charitable_donations: Decimal,
    /// Mortgage interest.
    pub mortgage_interest: Decimal,
}

impl DeductionItems {
    /// Returns the sum of all deduction items.
    pub fn total(&self) -> Decimal {
        self.retirement_contributions
            + self.medical_expenses
            + self.charitable_donations
            + self.mortgage_interest
    }
}

/// Itemized credits subtracted from the computed tax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditItems {
    /// Child tax credit.
    pub child: Decimal,
    /// Education credit.
    pub education: Decimal,
    /// Energy efficiency credit.
    pub energy: Decimal,
}

impl CreditItems {
    /// Returns the sum of all credit items.
    pub fn total(&self) -> Decimal {
        self.child + self.education + self.energy
    }
}

fn default_year() -> String {
    crate::config::DEFAULT_YEAR.to_string()
}

/// Inputs for a full tax summary.
///
/// # Example
///
/// ```
/// use bracket_tax_engine::models::{CreditItems, DeductionItems, TaxInput};
/// use rust_decimal_macros::dec;
///
/// let deductions = DeductionItems {
///     retirement_contributions: dec!(5000),
///     medical_expenses: dec!(1200),
///     ..Default::default()
/// };
/// let credits = CreditItems { child: dec!(2000), ..Default::default() };
///
/// let input = TaxInput::from_itemized(dec!(80000), &deductions, &credits, "2025");
/// assert_eq!(input.deductions, dec!(6200));
/// assert_eq!(input.credits, dec!(2000));
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Gross income before deductions.
    pub gross_income: Decimal,
    /// Total deductions.
    #[serde(default)]
    pub deductions: Decimal,
    /// Total non-refundable credits.
    #[serde(default)]
    pub credits: Decimal,
    /// Year identifier used to pick the bracket table.
    #[serde(default = "default_year")]
    pub year: String,
}

impl TaxInput {
    /// Creates an input with no deductions or credits.
    pub fn new(gross_income: Decimal, year: impl Into<String>) -> Self {
        Self {
            gross_income,
            deductions: Decimal::ZERO,
            credits: Decimal::ZERO,
            year: year.into(),
        }
    }

    /// Creates an input from itemized deductions and credits.
    pub fn from_itemized(
        gross_income: Decimal,
        deductions: &DeductionItems,
        credits: &CreditItems,
        year: impl Into<String>,
    ) -> Self {
        Self {
            gross_income,
            deductions: deductions.total(),
            credits: credits.total(),
            year: year.into(),
        }
    }

    /// Rejects negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the first negative field.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("gross_income", self.gross_income),
            ("deductions", self.deductions),
            ("credits", self.credits),
        ] {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }
        Ok(())
    }
}

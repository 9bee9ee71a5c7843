//! Tax summary and comparison models.
//!
//! This module contains the [`TaxSummary`] produced for a single input and
//! the [`YearComparisonRow`] produced when one income is evaluated across
//! several years.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BracketEntry;

/// The result of evaluating one [`TaxInput`](super::TaxInput).
///
/// `gross_tax`, `total_tax` and `net_income` are rounded to the cent and
/// `effective_rate` is a percentage rounded to two decimals. The entries in
/// `breakdown` keep their exact, unrounded amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// The year that was asked for.
    pub year_requested: String,
    /// The year whose table was actually applied.
    pub year_applied: String,
    /// Gross income before deductions.
    pub gross_income: Decimal,
    /// Total deductions.
    pub deductions: Decimal,
    /// Total credits.
    pub credits: Decimal,
    /// Gross income minus deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Tax computed from the brackets before credits.
    pub gross_tax: Decimal,
    /// Tax after credits, floored at zero.
    pub total_tax: Decimal,
    /// Total tax as a percentage of gross income.
    pub effective_rate: Decimal,
    /// Gross income minus total tax.
    pub net_income: Decimal,
    /// Per-bracket breakdown of the taxable income.
    pub breakdown: Vec<BracketEntry>,
}

/// One year's row in a year-over-year comparison.
///
/// # Example
///
/// ```
/// use bracket_tax_engine::models::YearComparisonRow;
/// use rust_decimal_macros::dec;
///
/// let row = YearComparisonRow {
///     year: "2022".to_string(),
///     year_applied: "2022".to_string(),
///     tax: dec!(15424.50),
///     effective_rate: dec!(20.57),
///     net_income: dec!(59575.50),
///     difference: None,
///     difference_pct: None,
///     difference_label: None,
///     breakdown: vec![],
/// };
/// assert!(row.difference.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearComparisonRow {
    /// The year of this row as requested.
    pub year: String,
    /// The year whose table was applied.
    pub year_applied: String,
    /// Tax owed on the compared income.
    pub tax: Decimal,
    /// Tax as a percentage of the compared income.
    pub effective_rate: Decimal,
    /// Income minus tax.
    pub net_income: Decimal,
    /// Change in tax versus the previous row, absent on the first row.
    pub difference: Option<Decimal>,
    /// Change in tax as a percentage of the previous row's tax.
    pub difference_pct: Option<Decimal>,
    /// The change formatted for display, e.g. `+$268.00 (+1.74%)`.
    pub difference_label: Option<String>,
    /// Per-bracket breakdown of the compared income under this row's table.
    pub breakdown: Vec<BracketEntry>,
}

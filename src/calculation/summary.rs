//! Tax summary calculation.
//!
//! This module applies deductions and credits around the bracket engine and
//! derives the effective rate and net income.

use rust_decimal::Decimal;

use crate::config::BracketRegistry;
use crate::models::{TaxInput, TaxSummary};

use super::breakdown::compute_breakdown;
use super::rounding::{percentage_of, round_half_up};
use super::tax::compute_tax;

/// Gross income minus deductions, floored at zero.
pub fn taxable_income(gross_income: Decimal, deductions: Decimal) -> Decimal {
    (gross_income - deductions).max(Decimal::ZERO)
}

/// Evaluates one input against the registry.
///
/// - `taxable_income = max(0, gross_income - deductions)`
/// - `gross_tax` is the bracket tax on the taxable income, rounded to the cent
/// - `total_tax = max(0, gross_tax - credits)`
/// - `effective_rate = total_tax / gross_income * 100` (zero for zero income)
/// - `net_income = gross_income - total_tax`
///
/// # Examples
///
/// ```
/// use bracket_tax_engine::calculation::summarize;
/// use bracket_tax_engine::config::BracketRegistry;
/// use bracket_tax_engine::models::TaxInput;
/// use rust_decimal_macros::dec;
///
/// let registry = BracketRegistry::builtin().unwrap();
/// let summary = summarize(&TaxInput::new(dec!(50000), "2025"), &registry);
///
/// assert_eq!(summary.total_tax, dec!(9017.75));
/// assert_eq!(summary.effective_rate, dec!(18.04));
/// assert_eq!(summary.net_income, dec!(40982.25));
/// ```
pub fn summarize(input: &TaxInput, registry: &BracketRegistry) -> TaxSummary {
    let table = registry.resolve(&input.year);

    let taxable = taxable_income(input.gross_income, input.deductions);
    let gross_tax = round_half_up(compute_tax(taxable, table));
    let total_tax = (gross_tax - input.credits).max(Decimal::ZERO);

    TaxSummary {
        year_requested: input.year.clone(),
        year_applied: table.year().to_string(),
        gross_income: input.gross_income,
        deductions: input.deductions,
        credits: input.credits,
        taxable_income: taxable,
        gross_tax,
        total_tax,
        effective_rate: percentage_of(total_tax, input.gross_income),
        net_income: input.gross_income - total_tax,
        breakdown: compute_breakdown(taxable, table),
    }
}

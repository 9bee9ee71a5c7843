//! Progressive tax calculation.
//!
//! This module provides [`compute_tax`], which stacks marginal rates over a
//! bracket table.

use rust_decimal::Decimal;

use crate::models::BracketTable;

use super::contribution::contributions;

/// Computes total tax owed on `taxable_income` under `table`.
///
/// Each bracket taxes only the income strictly above its lower bound and up
/// to its upper bound; the total is the sum of those contributions. The
/// result is exact and unrounded. Zero or negative income yields zero.
///
/// # Examples
///
/// ```
/// use bracket_tax_engine::calculation::compute_tax;
/// use bracket_tax_engine::config::BracketRegistry;
/// use rust_decimal_macros::dec;
///
/// let registry = BracketRegistry::builtin().unwrap();
/// let table = registry.resolve("2025");
///
/// // 0 + 15,595 x 11% + 24,341 x 30%
/// assert_eq!(compute_tax(dec!(50000), table), dec!(9017.75));
/// assert_eq!(compute_tax(dec!(0), table), dec!(0));
/// ```
pub fn compute_tax(taxable_income: Decimal, table: &BracketTable) -> Decimal {
    contributions(taxable_income, table)
        .map(|(_, contribution)| contribution.tax_amount)
        .sum()
}

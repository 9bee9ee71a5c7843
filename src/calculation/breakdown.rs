//! Per-bracket breakdown generation.
//!
//! This module provides [`compute_breakdown`], the itemized counterpart of
//! [`compute_tax`](super::compute_tax).

use rust_decimal::Decimal;

use crate::format::{format_bound, format_rate};
use crate::models::{Bracket, BracketEntry, BracketTable};

use super::contribution::contributions;

/// Builds the display label for a bracket's range.
///
/// The open-ended top bracket is labelled "<lower> and above".
pub fn range_label(bracket: &Bracket) -> String {
    match bracket.upper {
        Some(upper) => format!("{} - {}", format_bound(bracket.lower), format_bound(upper)),
        None => format!("{} and above", format_bound(bracket.lower)),
    }
}

/// Produces one ledger entry per bracket that taxes part of `taxable_income`.
///
/// Brackets whose lower bound is at or above the income are omitted. The
/// entries' `tax_amount`s sum exactly to `compute_tax(taxable_income, table)`.
///
/// # Examples
///
/// ```
/// use bracket_tax_engine::calculation::compute_breakdown;
/// use bracket_tax_engine::config::BracketRegistry;
/// use rust_decimal_macros::dec;
///
/// let registry = BracketRegistry::builtin().unwrap();
/// let entries = compute_breakdown(dec!(50000), registry.resolve("2025"));
///
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[1].range_label, "$10,064 - $25,659");
/// assert_eq!(entries[1].rate_label, "11%");
/// assert_eq!(entries[1].tax_amount, dec!(1715.45));
/// assert_eq!(entries[2].taxable_amount, dec!(24341));
/// ```
pub fn compute_breakdown(taxable_income: Decimal, table: &BracketTable) -> Vec<BracketEntry> {
    contributions(taxable_income, table)
        .map(|(bracket, contribution)| BracketEntry {
            range_label: range_label(bracket),
            rate: bracket.rate,
            rate_label: format_rate(bracket.rate),
            taxable_amount: contribution.taxable_amount,
            tax_amount: contribution.tax_amount,
        })
        .collect()
}

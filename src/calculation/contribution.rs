//! Per-bracket contribution.
//!
//! Both [`compute_tax`](super::compute_tax) and
//! [`compute_breakdown`](super::compute_breakdown) are built on the single
//! step in this module, so the breakdown always sums to the total tax.

use rust_decimal::Decimal;

use crate::models::{Bracket, BracketTable};

/// The share of income falling into one bracket and the tax on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketContribution {
    /// Income inside the bracket.
    pub taxable_amount: Decimal,
    /// `taxable_amount * rate`.
    pub tax_amount: Decimal,
}

/// Computes how much of `taxable_income` one bracket taxes.
///
/// Returns `None` unless income strictly exceeds the bracket's lower bound,
/// so income sitting exactly on a threshold pays nothing in the bracket
/// above it.
///
/// # Examples
///
/// ```
/// use bracket_tax_engine::calculation::bracket_contribution;
/// use bracket_tax_engine::models::Bracket;
/// use rust_decimal_macros::dec;
///
/// let bracket = Bracket::bounded(dec!(10064), dec!(25659), dec!(0.11));
///
/// let partial = bracket_contribution(&bracket, dec!(20000)).unwrap();
/// assert_eq!(partial.taxable_amount, dec!(9936));
///
/// let full = bracket_contribution(&bracket, dec!(50000)).unwrap();
/// assert_eq!(full.tax_amount, dec!(1715.45));
///
/// assert!(bracket_contribution(&bracket, dec!(10064)).is_none());
/// ```
pub fn bracket_contribution(
    bracket: &Bracket,
    taxable_income: Decimal,
) -> Option<BracketContribution> {
    if taxable_income <= bracket.lower {
        return None;
    }

    let ceiling = match bracket.upper {
        Some(upper) => taxable_income.min(upper),
        None => taxable_income,
    };
    let taxable_amount = ceiling - bracket.lower;

    Some(BracketContribution {
        taxable_amount,
        tax_amount: taxable_amount * bracket.rate,
    })
}

/// Yields every bracket that taxes part of `taxable_income`, in ascending order.
pub fn contributions(
    taxable_income: Decimal,
    table: &BracketTable,
) -> impl Iterator<Item = (&Bracket, BracketContribution)> {
    table
        .brackets()
        .iter()
        .filter_map(move |bracket| {
            bracket_contribution(bracket, taxable_income).map(|c| (bracket, c))
        })
}

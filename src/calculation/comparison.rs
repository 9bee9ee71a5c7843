//! Scenario and year-over-year comparisons.
//!
//! Each row is an independent evaluation; comparisons only order and diff
//! the results.

use rust_decimal::Decimal;

use crate::config::BracketRegistry;
use crate::format::format_change;
use crate::models::{TaxInput, TaxSummary, YearComparisonRow};

use super::breakdown::compute_breakdown;
use super::rounding::{percentage_of, round_half_up};
use super::summary::summarize;
use super::tax::compute_tax;

/// Evaluates several inputs side by side, preserving input order.
pub fn compare_scenarios(inputs: &[TaxInput], registry: &BracketRegistry) -> Vec<TaxSummary> {
    inputs
        .iter()
        .map(|input| summarize(input, registry))
        .collect()
}

/// Evaluates one income across several years.
///
/// Years are sorted ascending and de-duplicated. No deductions or credits are
/// applied. Every row after the first carries the change in tax against the
/// previous row and that change as a percentage of the previous tax (zero
/// when the previous tax was zero). Each row also carries the bracket
/// breakdown of the income under the table it applied.
///
/// # Examples
///
/// ```
/// use bracket_tax_engine::calculation::compare_years;
/// use bracket_tax_engine::config::BracketRegistry;
/// use rust_decimal_macros::dec;
///
/// let registry = BracketRegistry::builtin().unwrap();
/// let rows = compare_years(dec!(75000), &["2025", "2024"], &registry);
///
/// assert_eq!(rows[0].year, "2024");
/// assert!(rows[0].difference.is_none());
/// assert_eq!(rows[1].difference, Some(rows[1].tax - rows[0].tax));
/// ```
pub fn compare_years<S: AsRef<str>>(
    income: Decimal,
    years: &[S],
    registry: &BracketRegistry,
) -> Vec<YearComparisonRow> {
    let mut sorted: Vec<&str> = years.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut rows: Vec<YearComparisonRow> = Vec::with_capacity(sorted.len());
    for year in sorted {
        let table = registry.resolve(year);
        let tax = round_half_up(compute_tax(income, table));

        let (difference, difference_pct, difference_label) = match rows.last() {
            Some(previous) => {
                let difference = tax - previous.tax;
                let difference_pct = percentage_of(difference, previous.tax);
                (
                    Some(difference),
                    Some(difference_pct),
                    Some(format_change(difference, difference_pct)),
                )
            }
            None => (None, None, None),
        };

        rows.push(YearComparisonRow {
            year: year.to_string(),
            year_applied: table.year().to_string(),
            tax,
            effective_rate: percentage_of(tax, income),
            net_income: income - tax,
            difference,
            difference_pct,
            difference_label,
            breakdown: compute_breakdown(income, table),
        });
    }

    rows
}

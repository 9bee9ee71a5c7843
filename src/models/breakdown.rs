//! Per-bracket breakdown entry model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the itemized per-bracket ledger.
///
/// Entries are produced fresh for every computation and carry raw decimal
/// amounts alongside the display labels.
///
/// # Example
///
/// ```
/// use bracket_tax_engine::models::BracketEntry;
/// use rust_decimal_macros::dec;
///
/// let entry = BracketEntry {
///     range_label: "$10,064 - $25,659".to_string(),
///     rate: dec!(0.11),
///     rate_label: "11%".to_string(),
///     taxable_amount: dec!(15595),
///     tax_amount: dec!(1715.45),
/// };
/// assert_eq!(entry.tax_amount, entry.taxable_amount * entry.rate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketEntry {
    /// Human-readable range, e.g. "$10,064 - $25,659" or "$157,806 and above".
    pub range_label: String,
    /// Marginal rate as a fraction.
    pub rate: Decimal,
    /// Marginal rate formatted as a percentage, e.g. "11%".
    pub rate_label: String,
    /// Income falling inside this bracket.
    pub taxable_amount: Decimal,
    /// Tax owed on the income inside this bracket.
    pub tax_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_entry_serializes_amounts_as_strings() {
        let entry = BracketEntry {
            range_label: "$0 - $10,064".to_string(),
            rate: dec!(0.00),
            rate_label: "0%".to_string(),
            taxable_amount: dec!(10064),
            tax_amount: dec!(0.00),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"range_label\":\"$0 - $10,064\""));
        assert!(json.contains("\"taxable_amount\":\"10064\""));
        assert!(json.contains("\"rate_label\":\"0%\""));
    }
}

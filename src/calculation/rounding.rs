//! Rounding helpers for reported amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use bracket_tax_engine::calculation::round_half_up;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_up(dec!(1715.615)), dec!(1715.62));
/// assert_eq!(round_half_up(dec!(18.0355)), dec!(18.04));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Expresses `part` as a percentage of `whole`, rounded to two decimals.
///
/// Returns zero when `whole` is zero or negative.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(part / whole * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn test_round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn test_round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(9017.75)), dec!(9017.75));
    }

    #[test]
    fn test_percentage_of_reference_scenario() {
        assert_eq!(percentage_of(dec!(9017.75), dec!(50000)), dec!(18.04));
    }

    #[test]
    fn test_percentage_of_zero_whole_is_zero() {
        assert_eq!(percentage_of(dec!(100), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_of_negative_whole_is_zero() {
        assert_eq!(percentage_of(dec!(100), dec!(-50)), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_of_negative_part() {
        assert_eq!(percentage_of(dec!(-268), dec!(15424.50)), dec!(-1.74));
    }
}

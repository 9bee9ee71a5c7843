//! Display formatting for amounts, bracket bounds, and rates.

use rust_decimal::{Decimal, RoundingStrategy};

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a value with thousands separators and a fixed number of decimals.
///
/// # Examples
///
/// ```
/// use bracket_tax_engine::format::format_number;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_number(dec!(9017.75), 2), "9,017.75");
/// assert_eq!(format_number(dec!(1234567), 0), "1,234,567");
/// assert_eq!(format_number(dec!(-1000.5), 2), "-1,000.50");
/// ```
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, group_thousands(whole), fraction),
        None => format!("{}{}", sign, group_thousands(whole)),
    }
}

/// Formats a monetary amount to the cent, e.g. `$9,017.75`.
///
/// ```
/// use bracket_tax_engine::format::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(40982.25)), "$40,982.25");
/// assert_eq!(format_currency(dec!(-268)), "-$268.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let number = format_number(value, 2);
    match number.strip_prefix('-') {
        Some(magnitude) => format!("-${}", magnitude),
        None => format!("${}", number),
    }
}

/// Formats a signed change in money, e.g. `+$268.00`.
pub fn format_signed_currency(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

/// Formats a signed percentage change, e.g. `+1.74%`.
pub fn format_signed_percentage(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", format_percentage(value))
    } else {
        format_percentage(value)
    }
}

/// Formats a change in tax with its relative size, e.g. `+$268.00 (+1.74%)`.
pub fn format_change(difference: Decimal, difference_pct: Decimal) -> String {
    format!(
        "{} ({})",
        format_signed_currency(difference),
        format_signed_percentage(difference_pct)
    )
}

/// Formats a bracket bound: whole dollars unless the bound carries cents.
///
/// ```
/// use bracket_tax_engine::format::format_bound;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_bound(dec!(157806)), "$157,806");
/// assert_eq!(format_bound(dec!(1000.50)), "$1,000.50");
/// ```
pub fn format_bound(value: Decimal) -> String {
    let decimals = if value.fract().is_zero() { 0 } else { 2 };
    let number = format_number(value, decimals);
    format!("${}", number)
}

/// Formats a fractional rate as a percentage, e.g. `0.11` as `11%`.
///
/// ```
/// use bracket_tax_engine::format::format_rate;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_rate(dec!(0.11)), "11%");
/// assert_eq!(format_rate(dec!(0.125)), "12.5%");
/// assert_eq!(format_rate(dec!(0.00)), "0%");
/// ```
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// Formats a percentage value to two decimals, e.g. `18.04%`.
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", format_number(value, 2))
}

//! Number formatting helpers for tables and summaries

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Round the shortest decimal form of `value`, midpoints away from zero
///
/// `1.005` is stored as 1.00499999..., so rounding the binary value would
/// give 1.00; the shortest form "1.005" rounds to 1.01.
/// Returns `None` for NaN, infinities and values outside `Decimal` range.
fn round_half_away_from_zero(value: f64, decimals: u32) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let mut rounded = Decimal::from_str(&value.to_string())
        .ok()?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    Some(rounded)
}

/// Formats a number with a thousands separator and the given number of decimals
///
/// # Examples
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2, ',');
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8, separator: char) -> String {
    let decimals = if decimals > 3 { 2 } else { decimals }; // two decimals by default
    let formatted = match round_half_away_from_zero(value, decimals.into()) {
        Some(rounded) => rounded.to_string(),
        None => format!("{:.*}", decimals as usize, value),
    };

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        // "-0.00" after rounding is still zero
        Some(rest) if rest.chars().any(|c| c.is_ascii_digit() && c != '0') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", formatted.as_str()),
    };

    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Insert the separator every 3 digits from the right
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, formatted_integer, d),
        None => format!("{}{}", sign, formatted_integer),
    }
}

/// Formats an amount as US dollars: `$` prefix, comma thousands, two decimals
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_usd(1234.5), "$1,234.50");
/// assert_eq!(format_usd(-20.0), "-$20.00");
/// ```
pub fn format_usd(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 2, ',');
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(100.0), "$100.00");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(-1234.56), "-$1,234.56");
    }

    #[test]
    fn test_format_usd_rounds_half_cents_up() {
        assert_eq!(format_usd(1.005), "$1.01");
        assert_eq!(format_usd(0.125), "$0.13");
        assert_eq!(format_usd(2.675), "$2.68");
        assert_eq!(format_usd(0.005), "$0.01");
        assert_eq!(format_usd(1234.565), "$1,234.57");
        assert_eq!(format_usd(-2.675), "-$2.68");
    }

    #[test]
    fn test_non_finite_falls_back() {
        assert_eq!(format_usd(f64::INFINITY), "$inf");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(format_usd(-0.001), "$0.00");
        assert_eq!(format_number_with_decimals(-0.0, 0, ','), "0");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, ','), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1, ','), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2, ' '), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3, ','), "1,234.567");
        assert_eq!(format_number_with_decimals(-1234.0, 0, ','), "-1,234");
    }
}

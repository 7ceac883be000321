//! Currency Formatting
//!
//! Dollar display formatting for the results panel: thousands separators,
//! no fraction digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as whole dollars, e.g. `$151,200`. Negatives carry the
/// sign after the dollar symbol, `$-24,000`, as the results panel always
/// rendered them.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_usd(dec!(151200)), "$151,200");
        assert_eq!(format_usd(dec!(1000000)), "$1,000,000");
        assert_eq!(format_usd(dec!(225)), "$225");
        assert_eq!(format_usd(dec!(0)), "$0");
    }

    #[test]
    fn test_fractions_rounded_away() {
        assert_eq!(format_usd(dec!(1234.56)), "$1,235");
        assert_eq!(format_usd(dec!(999.4)), "$999");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_usd(dec!(-24000)), "$-24,000");
        assert_eq!(format_usd(dec!(-1234567.8)), "$-1,234,568");
        assert_eq!(format_usd(dec!(-0.2)), "$0");
    }
}

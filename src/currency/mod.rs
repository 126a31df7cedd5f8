//! Display formatting for amounts, shares and dates.
//!
//! Rounding here is presentation only. Nothing formatted by these helpers is
//! ever parsed back into the ledger.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const AMOUNT_PRECISION: u32 = 2;
const PERCENT_PRECISION: u32 = 1;

/// Formats a value with exactly `precision` fractional digits, rounding
/// halves away from zero.
pub fn format_fixed(value: Decimal, precision: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(precision);
    rounded.to_string()
}

/// Two-decimal amount, e.g. `10.00`.
pub fn format_amount(value: Decimal) -> String {
    format_fixed(value, AMOUNT_PRECISION)
}

/// One-decimal percentage without the sign, e.g. `25.0`.
pub fn format_percent(value: Decimal) -> String {
    format_fixed(value, PERCENT_PRECISION)
}

/// Amount followed by the configured currency symbol, e.g. `10.00 €`.
pub fn format_amount_with_symbol(value: Decimal, symbol: &str) -> String {
    let amount = format_amount(value);
    if symbol.trim().is_empty() {
        amount
    } else {
        format!("{amount} {}", symbol.trim())
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn amounts_pad_and_round_to_cents() {
        assert_eq!(format_amount(dec("10")), "10.00");
        assert_eq!(format_amount(dec("0.001")), "0.00");
        assert_eq!(format_amount(dec("2.005")), "2.01");
        assert_eq!(format_amount(dec("1234.5")), "1234.50");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(dec("25")), "25.0");
        assert_eq!(format_percent(dec("33.3333333")), "33.3");
        assert_eq!(format_percent(dec("66.66")), "66.7");
    }

    #[test]
    fn symbol_is_optional() {
        assert_eq!(format_amount_with_symbol(dec("3.5"), "€"), "3.50 €");
        assert_eq!(format_amount_with_symbol(dec("3.5"), ""), "3.50");
    }

    #[test]
    fn dates_use_iso_layout() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
    }
}

use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number of decimal places for the given currency
/// (ex. JPY = 0, BRL = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Formats an amount in the tracker's display currency.
pub(crate) fn format_money(amount: f64) -> String {
    format_amount(amount, Currency::BRL)
}

/// Formats a cash amount symbol-first in the Brazilian convention:
/// '.' thousands grouping, ',' decimal mark ("R$ 1.234,56"), a leading
/// '-' for negative amounts. The amount is rounded to the currency's
/// precision before splitting, so values like 9.999 carry into the
/// integer part instead of truncating.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10f64.powi(decimal_places as i32) as i64;
    let scaled = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && scaled != 0 { "-" } else { "" };
    let integer_part = (scaled / scale).to_formatted_string(&Locale::pt);
    if decimal_places == 0 {
        return format!("{}{} {}", sign, currency.symbol(), integer_part);
    }
    format!(
        "{}{} {},{:0width$}",
        sign,
        currency.symbol(),
        integer_part,
        scaled % scale,
        width = decimal_places
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_brazilian_separators() {
        assert_eq!(format_money(1234.56), "R$ 1.234,56");
        assert_eq!(format_money(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn formats_zero_and_negative_amounts() {
        assert_eq!(format_money(0.0), "R$ 0,00");
        assert_eq!(format_money(-100.0), "-R$ 100,00");
    }

    #[test]
    fn rounding_carries_into_the_integer_part() {
        assert_eq!(format_money(9.999), "R$ 10,00");
        assert_eq!(format_money(25.504), "R$ 25,50");
    }

    #[test]
    fn sub_cent_negatives_do_not_show_a_sign() {
        assert_eq!(format_money(-0.001), "R$ 0,00");
    }

    #[test]
    fn zero_decimal_currencies_have_no_fraction() {
        assert_eq!(format_amount(1000.0, Currency::JPY), "¥ 1.000");
    }
}

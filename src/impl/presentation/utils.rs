use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format an amount with currency symbol, the currency's number of decimal
/// places, and thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: Decimal, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let rounded =
        amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = rounded.abs();
    let amount_integer_part = magnitude
        .trunc()
        .to_u128()
        .unwrap_or_default()
        .to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        return format!("{}{} {}", sign, amount_integer_part, currency.symbol());
    }
    let width = decimal_places as usize;
    let amount_fractional_part = format!("{:.width$}", magnitude.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}{}.{:0<width$} {}",
        sign,
        amount_integer_part,
        amount_fractional_part,
        currency.symbol(),
    )
}

/// Section header as a `;` comment line, padded to 80
/// columns.
pub(crate) fn section_header(title: &str) -> String {
    format!("; --- {} {:-<width$}\n\n", title, "", width = 73 - title.len().min(73))
}

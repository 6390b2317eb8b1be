use std::str::FromStr;

use rust_decimal::Decimal;

/// Monetary amount, kept at full decimal precision. Accepts thousands
/// separators (`1,500.50`), accounting-style negatives (`(250)`) and
/// scientific notation as produced by some JSON encoders (`1.5e3`).
#[derive(Debug)]
pub(crate) struct MoneyAmountModel(pub Decimal);

impl FromStr for MoneyAmountModel {
    type Err = rust_decimal::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')').trim();
        let amount = Decimal::from_str(numeric_part)
            .or_else(|_| Decimal::from_scientific(numeric_part))?;
        Ok(MoneyAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<Decimal> for MoneyAmountModel {
    fn into(self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Option<Decimal> {
        s.parse::<MoneyAmountModel>().ok().map(Into::into)
    }

    #[test]
    fn test_parse_amounts() {
        assert_eq!(parse("1000"), Some(Decimal::new(1000, 0)));
        assert_eq!(parse("1,500.50"), Some(Decimal::new(150050, 2)));
        assert_eq!(parse(" 0.01 "), Some(Decimal::new(1, 2)));
        assert_eq!(parse("(250)"), Some(Decimal::new(-250, 0)));
        assert_eq!(parse("1.5e3"), Some(Decimal::new(1500, 0)));
    }

    #[test]
    fn test_parse_keeps_precision() {
        assert_eq!(parse("0.1").unwrap() + parse("0.2").unwrap(), parse("0.3").unwrap());
        assert_eq!(parse("3500.125"), Some(Decimal::new(3500125, 3)));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("12abc"), None);
        assert_eq!(parse(""), None);
    }
}

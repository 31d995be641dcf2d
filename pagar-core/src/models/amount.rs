//! Rupee amount coercion at input boundaries.
//!
//! Form entries and imported spreadsheets deliver amounts as numbers,
//! numeric strings, blanks, or outright garbage. The computation core never
//! rejects a record over a bad cell: anything that does not parse as a
//! number reads as zero. Negative numbers are numbers and pass through.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Parses a raw cell into a rupee amount, coercing non-numeric input to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pagar_core::models::parse_amount_or_zero;
///
/// assert_eq!(parse_amount_or_zero("56900"), dec!(56900));
/// assert_eq!(parse_amount_or_zero(" 1,500 "), dec!(1500));
/// assert_eq!(parse_amount_or_zero("-200"), dec!(-200));
/// assert_eq!(parse_amount_or_zero(""), dec!(0));
/// assert_eq!(parse_amount_or_zero("n/a"), dec!(0));
/// ```
pub fn parse_amount_or_zero(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '₹')
        .collect();
    cleaned.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Serde deserializer applying the same coercion to model fields.
///
/// Used together with `#[serde(default)]` so that missing fields, `null`,
/// numbers, numeric strings, and garbage all produce a usable amount.
pub fn amount_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => parse_amount_or_zero(&text),
        Raw::Other(_) => Decimal::ZERO,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde::Deserialize;

    use super::parse_amount_or_zero;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::amount_or_zero")]
        amount: Decimal,
    }

    fn amount(json: &str) -> Decimal {
        serde_json::from_str::<Holder>(json).unwrap().amount
    }

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_amount_or_zero("56900"), dec!(56900));
    }

    #[test]
    fn strips_grouping_commas_and_rupee_sign() {
        assert_eq!(parse_amount_or_zero("₹1,50,000"), dec!(150000));
    }

    #[test]
    fn negative_amounts_pass_through() {
        assert_eq!(parse_amount_or_zero("-339932"), dec!(-339932));
    }

    #[test]
    fn empty_and_garbage_coerce_to_zero() {
        assert_eq!(parse_amount_or_zero(""), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("   "), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("NaN"), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("twelve"), Decimal::ZERO);
    }

    #[test]
    fn deserializes_number() {
        assert_eq!(amount(r#"{"amount": 26174}"#), dec!(26174));
    }

    #[test]
    fn deserializes_numeric_string() {
        assert_eq!(amount(r#"{"amount": "4552"}"#), dec!(4552));
    }

    #[test]
    fn missing_field_defaults_to_zero() {
        assert_eq!(amount(r#"{}"#), Decimal::ZERO);
    }

    #[test]
    fn null_coerces_to_zero() {
        assert_eq!(amount(r#"{"amount": null}"#), Decimal::ZERO);
    }

    #[test]
    fn garbage_string_coerces_to_zero() {
        assert_eq!(amount(r#"{"amount": "abc"}"#), Decimal::ZERO);
    }

    #[test]
    fn non_scalar_coerces_to_zero() {
        assert_eq!(amount(r#"{"amount": [1, 2]}"#), Decimal::ZERO);
    }
}

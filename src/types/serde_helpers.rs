//! Custom serde helpers for Binance's loose numeric encodings.
//!
//! Binance transmits monetary amounts as decimal strings, but occasionally sends an
//! empty string, `null` or a bare JSON number for the same field.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};

/// Deserialize a decimal that may be a string, a number, `""` or `null`.
///
/// Empty strings and `null` become zero, matching the zero value of an absent field.
/// Combine with `#[serde(default)]` so missing keys decode to zero as well.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use rust_decimal::Decimal;
/// use binance_staking_client::types::serde_helpers::decimal_or_zero;
///
/// #[derive(Deserialize, Debug)]
/// struct Position {
///     #[serde(deserialize_with = "decimal_or_zero::deserialize", default)]
///     redeem_amount_early: Decimal,
/// }
///
/// let json = r#"{"redeem_amount_early":""}"#;
/// let position: Position = serde_json::from_str(json).unwrap();
/// assert!(position.redeem_amount_early.is_zero());
///
/// let json = r#"{"redeem_amount_early":"0.015"}"#;
/// let position: Position = serde_json::from_str(json).unwrap();
/// assert_eq!(position.redeem_amount_early.to_string(), "0.015");
/// ```
pub mod decimal_or_zero {
    use super::*;

    /// Deserialize a loosely encoded decimal.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Going through `Value` keeps exact digits for bare numbers under
        // serde_json's `arbitrary_precision`.
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Ok(Decimal::ZERO),
            serde_json::Value::String(s) if s.trim().is_empty() => Ok(Decimal::ZERO),
            serde_json::Value::String(s) => parse(s.trim()).map_err(de::Error::custom),
            serde_json::Value::Number(n) => parse(&n.to_string()).map_err(de::Error::custom),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(value_kind(&other)),
                &"a decimal string or number",
            )),
        }
    }

    fn parse(s: &str) -> Result<Decimal, rust_decimal::Error> {
        s.parse::<Decimal>().or_else(|_| Decimal::from_scientific(s))
    }

    fn value_kind(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
            _ => "value",
        }
    }
}

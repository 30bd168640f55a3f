//! Serde helpers for the v20 wire format.
//!
//! The API encodes decimal numbers (prices, units, P/L) as JSON strings to
//! avoid precision loss. These helpers accept either a string or a plain JSON
//! number on input so that files written by this crate read back cleanly.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

fn parse_float<E: de::Error>(value: StringOrFloat) -> Result<f64, E> {
    match value {
        StringOrFloat::Float(f) => Ok(f),
        StringOrFloat::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid decimal: {s}"))),
    }
}

/// Deserializes a decimal sent as a string (`"1.08523"`) or a number
pub fn string_as_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_float(StringOrFloat::deserialize(deserializer)?)
}

/// Same as [`string_as_float`] for optional fields; empty strings and `null` become `None`
pub fn string_as_float_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrFloat::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => parse_float(value).map(Some),
    }
}

/// Serializes a decimal back into the string form used by the API
pub fn float_as_string<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Optional counterpart of [`float_as_string`]
pub fn float_as_string_opt<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&v.to_string()),
        None => Option::<String>::None.serialize(serializer),
    }
}

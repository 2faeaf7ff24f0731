//! Deserializers for the backend's loosely typed numbers.
//!
//! PHP answers amounts and counters as JSON numbers or as decimal strings
//! (`"250.00"`, `"3"`), depending on the query that produced them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strict amount: a number or a numeric string, anything else is an error.
pub(crate) fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Amount that reads as `0.0` when missing or unparsable.
pub(crate) fn amount_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Counter that reads as `0` when missing or unparsable.
pub(crate) fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or(0) as u32,
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Short label that may arrive as a string or a number; `null` reads as empty.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "amount")]
        strict: f64,
        #[serde(default, deserialize_with = "amount_or_zero")]
        loose: f64,
        #[serde(default, deserialize_with = "count")]
        total: u32,
    }

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        let row: Row =
            serde_json::from_str(r#"{"strict":"250.50","loose":12,"total":"3"}"#).unwrap();
        assert_eq!(row.strict, 250.5);
        assert_eq!(row.loose, 12.0);
        assert_eq!(row.total, 3);
    }

    #[test]
    fn loose_fields_fall_back_to_zero() {
        let row: Row = serde_json::from_str(r#"{"strict":1,"loose":null,"total":"n/a"}"#).unwrap();
        assert_eq!(row.loose, 0.0);
        assert_eq!(row.total, 0);
    }

    #[test]
    fn strict_amount_rejects_text() {
        assert!(serde_json::from_str::<Row>(r#"{"strict":"lots"}"#).is_err());
    }
}

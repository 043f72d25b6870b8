//! Serde helpers for the provider's loosely typed JSON scalars.
//!
//! The CTyun API is inconsistent about whether identifiers, sizes and flags
//! arrive as JSON strings or numbers. These helpers accept either.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

/// Renders a scalar the way the provider's own clients stringify it.
///
/// Strings are returned verbatim; numbers and booleans use their JSON text.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A required identifier given as a JSON string or number.
pub mod string_or_number {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!(
                "expected a string or number, got {}",
                other
            ))),
        }
    }
}

/// An optional scalar given as a JSON string, number or boolean. `null` maps to `None`.
pub mod opt_scalar_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        match value {
            None => Ok(None),
            Some(v @ (Value::Array(_) | Value::Object(_))) => Err(D::Error::custom(format!(
                "expected a scalar, got {}",
                v
            ))),
            Some(v) => Ok(scalar_to_string(&v)),
        }
    }
}

/// A size given as an integer, a float (truncated) or a numeric string.
pub mod integer_size {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        coerce_size(&value).ok_or_else(|| {
            D::Error::custom(format!("expected a non-negative size, got {}", value))
        })
    }

    pub(crate) fn coerce_size(value: &Value) -> Option<u64> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f.trunc() as u64)
                })
            }
            _ => None,
        }
    }
}

/// A flag given as a boolean, `0`/`1`, or their string forms. `null` or absent maps to `false`.
pub mod flexible_bool {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(b),
            Some(Value::Number(n)) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" | "" => Ok(false),
                other => Err(D::Error::custom(format!("unrecognized flag '{}'", other))),
            },
            Some(other) => Err(D::Error::custom(format!("expected a flag, got {}", other))),
        }
    }
}

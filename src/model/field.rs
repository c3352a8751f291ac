//! Deserialization helpers for catalog request fields.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a catalog column that clients may send either as a JSON string or a
/// JSON number (`"height": 172` and `"height": "172"` are stored the same way).
///
/// `null` and an absent field both deserialize to `None`; use together with
/// `#[serde(default)]`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or a number, found {}",
            other
        ))),
    }
}

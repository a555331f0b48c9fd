pub mod assistant;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treat an explicit JSON `null` like a missing field, so both fail the
/// same "is required" validation as an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep a string value and drop anything else (numbers, objects, `null`).
pub(crate) fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

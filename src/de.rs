//! Deserialization helpers that treat malformed fields as absent instead of
//! rejecting the whole document.

use crate::Value;

use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Keeps a field that is present in the document, `null` included.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(v).ok())
}

pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

/// Collects the entries of a sequence that deserialize, skipping the rest.
/// Anything that is not a sequence yields an empty list.
pub(crate) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => vec![],
    })
}

/// Like [`lenient_seq`] for mappings, keeping document key order.
pub(crate) fn lenient_map<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, val)| serde_json::from_value(val).ok().map(|val| (key, val)))
            .collect(),
        _ => vec![],
    })
}

/// Loose truthiness: `null`, `false`, `0` and `""` count as unset.
pub(crate) fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

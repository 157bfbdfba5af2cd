//! Field deserializers that repair shape errors instead of rejecting the document.
//!
//! Exports in the wild are hand-edited, produced by several generations of the
//! exporting tool, and occasionally plain wrong. A field holding the wrong kind
//! of JSON value is treated exactly as if the field were absent, so the only
//! thing intake can reject is the byte stream itself.
use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Any value, falling back to `T::default()` if it doesn't fit
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A record: only a JSON object is read, anything else is an empty record.
/// Derived struct deserializers would otherwise read an array by position.
pub fn record_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(record(value))
}

fn record<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if !value.is_object() {
        return T::default();
    }
    serde_json::from_value(value).unwrap_or_default()
}

/// An object of records, keeping key order. Records that don't fit become
/// default records rather than sinking the whole map.
pub fn map_or_default<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(IndexMap::new());
    };

    let map = entries
        .into_iter()
        .map(|(key, value)| (key, record(value)))
        .collect();

    Ok(map)
}

/// A list of records, same repair rules as [map_or_default]
pub fn seq_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(opt_seq_or_default(deserializer)?.unwrap_or_default())
}

/// Like [seq_or_default], but keeps "not a list" apart from "empty list"
pub fn opt_seq_or_default<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    let seq = items
        .into_iter()
        .map(record)
        .collect();

    Ok(Some(seq))
}

/// Text form of a string or number
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A string or number field as text. Anything else counts as absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

/// A list of strings or numbers as text. Other items are dropped.
pub fn text_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(vec![]);
    };

    Ok(items.iter().filter_map(scalar_text).collect())
}

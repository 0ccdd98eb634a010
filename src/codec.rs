//! Round-trip JSON codec for queue message bodies.
//!
//! Message bodies travel as plain JSON, so timestamps and UUIDs are tagged on
//! the way out (`{"_type": "datetime", "value": <epoch seconds>}`,
//! `{"_type": "UUID", "value": "<hyphenated string>"}`) and reconstructed as
//! typed values on the way in. The tag is recognized on every object node,
//! however deeply nested.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use crate::errors::SqsError;

/// Key marking an object node as a tagged non-native value.
pub const TYPE_TAG: &str = "_type";

/// A JSON value extended with the two non-native types the body convention
/// preserves across serialization.
///
/// `Timestamp` values round-trip exactly at up to microsecond precision; the
/// wire form carries epoch seconds as a JSON number.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Array(Vec<Payload>),
    Object(BTreeMap<String, Payload>),
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Bool(value)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Number(Number::from(value))
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::String(value.to_owned())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::String(value)
    }
}

impl From<DateTime<Utc>> for Payload {
    fn from(value: DateTime<Utc>) -> Self {
        Payload::Timestamp(value)
    }
}

impl From<Uuid> for Payload {
    fn from(value: Uuid) -> Self {
        Payload::Uuid(value)
    }
}

impl From<Vec<Payload>> for Payload {
    fn from(value: Vec<Payload>) -> Self {
        Payload::Array(value)
    }
}

impl From<BTreeMap<String, Payload>> for Payload {
    fn from(value: BTreeMap<String, Payload>) -> Self {
        Payload::Object(value)
    }
}

/// Serialize a payload to the tagged JSON wire form.
///
/// # Errors
///
/// Returns `SqsError::FormatError` if JSON serialization fails.
pub fn encode(payload: &Payload) -> Result<String, SqsError> {
    Ok(serde_json::to_string(&to_tagged_json(payload))?)
}

/// Parse tagged JSON text back into a typed payload.
///
/// # Errors
///
/// Returns `SqsError::FormatError` if the text is not valid JSON or a
/// recognized tag carries a malformed value.
pub fn decode(text: &str) -> Result<Payload, SqsError> {
    let value: Value = serde_json::from_str(text)?;
    from_tagged_json(value)
}

fn tagged(tag: &str, value: Value) -> Value {
    let mut node = Map::new();
    node.insert(TYPE_TAG.to_owned(), Value::String(tag.to_owned()));
    node.insert("value".to_owned(), value);
    Value::Object(node)
}

fn to_tagged_json(payload: &Payload) -> Value {
    match payload {
        Payload::Null => Value::Null,
        Payload::Bool(flag) => Value::Bool(*flag),
        Payload::Number(number) => Value::Number(number.clone()),
        Payload::String(text) => Value::String(text.clone()),
        Payload::Timestamp(timestamp) => {
            let seconds = timestamp.timestamp_micros() as f64 / 1_000_000.0;
            tagged("datetime", Value::from(seconds))
        }
        Payload::Uuid(id) => tagged("UUID", Value::String(id.to_string())),
        Payload::Array(items) => Value::Array(items.iter().map(to_tagged_json).collect()),
        Payload::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), to_tagged_json(value)))
                .collect(),
        ),
    }
}

fn from_tagged_json(value: Value) -> Result<Payload, SqsError> {
    match value {
        Value::Null => Ok(Payload::Null),
        Value::Bool(flag) => Ok(Payload::Bool(flag)),
        Value::Number(number) => Ok(Payload::Number(number)),
        Value::String(text) => Ok(Payload::String(text)),
        Value::Array(items) => Ok(Payload::Array(
            items
                .into_iter()
                .map(from_tagged_json)
                .collect::<Result<_, _>>()?,
        )),
        Value::Object(fields) => from_tagged_object(fields),
    }
}

fn from_tagged_object(fields: Map<String, Value>) -> Result<Payload, SqsError> {
    let tag = fields
        .get(TYPE_TAG)
        .and_then(Value::as_str)
        .map(str::to_owned);

    match tag.as_deref() {
        Some("datetime") => {
            let seconds = fields.get("value").and_then(Value::as_f64).ok_or_else(|| {
                SqsError::FormatError("datetime node is missing a numeric value".to_string())
            })?;
            let micros = (seconds * 1_000_000.0).round() as i64;
            let timestamp = DateTime::from_timestamp_micros(micros).ok_or_else(|| {
                SqsError::FormatError(format!("datetime value {seconds} is out of range"))
            })?;
            Ok(Payload::Timestamp(timestamp))
        }
        Some("UUID") => {
            let raw = fields.get("value").and_then(Value::as_str).ok_or_else(|| {
                SqsError::FormatError("UUID node is missing a string value".to_string())
            })?;
            Ok(Payload::Uuid(Uuid::parse_str(raw)?))
        }
        // Untagged objects and unrecognized tags pass through unchanged.
        _ => Ok(Payload::Object(
            fields
                .into_iter()
                .map(|(key, value)| Ok((key, from_tagged_json(value)?)))
                .collect::<Result<_, SqsError>>()?,
        )),
    }
}

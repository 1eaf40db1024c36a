//! Result-typed field accessors over decoded JSON records.
//!
//! Every lookup names the dotted path it was asked for, so a record that does
//! not match the expected shape is reported as `DisplayError::Access` for the
//! exact field instead of failing somewhere further down.

use serde_json::{Map, Value};

use crate::error::{DisplayError, Result};

pub fn object<'a>(value: &'a Value, field: &'static str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DisplayError::wrong_type(field, "an object"))
}

/// Looks up a dotted path such as `annunciator.summary`.
pub fn require<'a>(record: &'a Value, path: &'static str) -> Result<&'a Value> {
    optional(record, path)?.ok_or_else(|| DisplayError::missing(path))
}

/// Like [`require`], but an absent or `null` leaf is `Ok(None)`.
///
/// Intermediate segments must still exist.
pub fn optional<'a>(record: &'a Value, path: &'static str) -> Result<Option<&'a Value>> {
    let mut current = record;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        let map = object(current, path)?;
        match map.get(segment) {
            Some(Value::Null) | None if segments.peek().is_none() => return Ok(None),
            Some(Value::Null) | None => return Err(DisplayError::missing(path)),
            Some(next) => current = next,
        }
    }

    Ok(Some(current))
}

pub fn require_i64(record: &Value, path: &'static str) -> Result<i64> {
    require(record, path)?
        .as_i64()
        .ok_or_else(|| DisplayError::wrong_type(path, "an integer"))
}

pub fn require_u64(record: &Value, path: &'static str) -> Result<u64> {
    require(record, path)?
        .as_u64()
        .ok_or_else(|| DisplayError::wrong_type(path, "a non-negative integer"))
}

pub fn require_str<'a>(record: &'a Value, path: &'static str) -> Result<&'a str> {
    require(record, path)?
        .as_str()
        .ok_or_else(|| DisplayError::wrong_type(path, "a string"))
}

//! JSON file loading and saving.
//!
//! Supported inputs:
//! - A single JSON object: `{"a": 1}`
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::error::{ReshapeError, ReshapeResult};
use crate::types::{Mapping, MappingList};

/// Loads a single JSON object from a file.
///
/// Fails with [`ReshapeError::Malformed`] if the document parses but is not an object.
pub fn load_mapping(path: impl AsRef<Path>) -> ReshapeResult<Mapping> {
    let text = fs::read_to_string(path)?;
    load_mapping_from_str(&text)
}

/// Parses a single JSON object from an in-memory string.
pub fn load_mapping_from_str(input: &str) -> ReshapeResult<Mapping> {
    let v: serde_json::Value = serde_json::from_str(input.trim())?;
    match v {
        serde_json::Value::Object(m) => Ok(m),
        other => Err(ReshapeError::Malformed {
            message: format!("expected a json object, got {}", kind_name(&other)),
        }),
    }
}

/// Loads a list of JSON objects from a file.
///
/// Accepts an array of objects, a single object (yielding a one-element list), or NDJSON.
pub fn load_mapping_list(path: impl AsRef<Path>) -> ReshapeResult<MappingList> {
    let text = fs::read_to_string(path)?;
    load_mapping_list_from_str(&text)
}

/// Parses a list of JSON objects from an in-memory string.
pub fn load_mapping_list_from_str(input: &str) -> ReshapeResult<MappingList> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ReshapeError::Malformed {
            message: "json input is empty".to_string(),
        });
    }

    // Only an NDJSON stream is ambiguous with a single document, and every NDJSON line
    // starts with '{'. Anything else is one document; parse it directly so the underlying
    // parse error surfaces instead of an NDJSON line error.
    if !trimmed.starts_with('{') {
        return match serde_json::from_str::<serde_json::Value>(trimmed)? {
            serde_json::Value::Array(items) => as_mappings(items),
            other => Err(ReshapeError::Malformed {
                message: format!(
                    "json must be an object, an array of objects, or NDJSON, got {}",
                    kind_name(&other)
                ),
            }),
        };
    }

    // Starts with '{': a single object, or NDJSON.
    if let Ok(serde_json::Value::Object(m)) = serde_json::from_str(trimmed) {
        return Ok(vec![m]);
    }

    let mut items = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
            ReshapeError::Malformed {
                message: format!("invalid ndjson at line {}: {}", i + 1, e),
            }
        })?;
        items.push(v);
    }
    as_mappings(items)
}

/// Serializes `value` as JSON to `path`, overwriting any existing content.
pub fn save<T>(path: impl AsRef<Path>, value: &T) -> ReshapeResult<()>
where
    T: ?Sized + Serialize,
{
    let file = fs::File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), value)?;
    Ok(())
}

fn as_mappings(items: Vec<serde_json::Value>) -> ReshapeResult<MappingList> {
    let mut out = Vec::with_capacity(items.len());
    for (idx0, item) in items.into_iter().enumerate() {
        match item {
            serde_json::Value::Object(m) => out.push(m),
            other => {
                return Err(ReshapeError::Malformed {
                    message: format!("row {} is not a json object, got {}", idx0 + 1, kind_name(&other)),
                })
            }
        }
    }
    Ok(out)
}

fn kind_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

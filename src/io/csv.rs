//! CSV loading into a [`Matrix`].

use std::path::Path;

use serde_json::Value;

use crate::error::ReshapeResult;
use crate::types::Matrix;

/// Loads a CSV file as a [`Matrix`], one row of cells per record.
///
/// The header row, if any, is kept as row 0 so that [`crate::transform::matrix`] can consume
/// it as the field-name row. Cell values are inferred:
///
/// - empty cell -> `null`
/// - `true`/`false` -> bool
/// - integer / float text -> number
/// - anything else -> string
pub fn load_matrix(path: impl AsRef<Path>) -> ReshapeResult<Matrix> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    load_matrix_from_reader(&mut rdr)
}

/// Loads CSV data from an existing CSV reader.
pub fn load_matrix_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> ReshapeResult<Matrix> {
    let mut rows: Matrix = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(infer_cell).collect());
    }
    Ok(rows)
}

fn infer_cell(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(raw.to_string())
}

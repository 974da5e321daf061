//! Constructing mappings from parallel sequences and tabular rows.

use serde_json::Value;

use crate::error::{ReshapeError, ReshapeResult};
use crate::types::{Mapping, MappingList, Matrix};

/// Zips `fields` and `values` positionally into a new [`Mapping`].
///
/// Fails with [`ReshapeError::LengthMismatch`] if the two sequences differ in length; the
/// check happens before anything is built. If a field name repeats, the later value wins.
pub fn create(fields: &[String], values: Vec<Value>) -> ReshapeResult<Mapping> {
    ReshapeError::check_equal_length("fields/values", fields, &values)?;
    Ok(fields.iter().cloned().zip(values).collect())
}

/// Converts tabular rows into a [`MappingList`], one mapping per row.
///
/// If `headers` is `None`, the first row is consumed as the header row; non-string header
/// cells are rendered to their JSON text. Each remaining row is padded with `null` when
/// shorter than the headers and truncated when longer, then zipped via [`create`]. Output
/// order matches row order.
///
/// Fails with [`ReshapeError::Malformed`] when `rows` is empty and no headers were provided.
pub fn matrix(mut rows: Matrix, headers: Option<Vec<String>>) -> ReshapeResult<MappingList> {
    let headers = match headers {
        Some(headers) => headers,
        None => {
            if rows.is_empty() {
                return Err(ReshapeError::Malformed {
                    message: "matrix is empty and no headers were provided".to_string(),
                });
            }
            rows.remove(0).into_iter().map(header_name).collect()
        }
    };

    let mut out = Vec::with_capacity(rows.len());
    for mut row in rows {
        row.resize(headers.len(), Value::Null);
        out.push(create(&headers, row)?);
    }
    Ok(out)
}

fn header_name(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{create, matrix};
    use crate::error::ReshapeError;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn create_zips_fields_and_values() {
        let m = create(&fields(&["a", "b"]), vec![json!(1), json!(2)]).unwrap();
        assert_eq!(serde_json::Value::Object(m), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn create_rejects_length_mismatch_before_building() {
        let err = create(&fields(&["a", "b"]), vec![json!(1)]).unwrap_err();
        assert!(matches!(
            err,
            ReshapeError::LengthMismatch { left: 2, right: 1, .. }
        ));
    }

    #[test]
    fn matrix_takes_headers_from_first_row() {
        let rows = vec![
            vec![json!("a"), json!("b")],
            vec![json!(1), json!(2)],
            vec![json!(3), json!(4)],
        ];
        let out = matrix(rows, None).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(serde_json::Value::Object(out[0].clone()), json!({"a": 1, "b": 2}));
        assert_eq!(serde_json::Value::Object(out[1].clone()), json!({"a": 3, "b": 4}));
    }

    #[test]
    fn matrix_pads_short_rows_and_truncates_long_rows() {
        let rows = vec![
            vec![json!(1)],
            vec![json!(3), json!(4), json!(5)],
        ];
        let headers = Some(fields(&["a", "b"]));
        let out = matrix(rows, headers).unwrap();

        assert_eq!(serde_json::Value::Object(out[0].clone()), json!({"a": 1, "b": null}));
        assert_eq!(serde_json::Value::Object(out[1].clone()), json!({"a": 3, "b": 4}));
    }

    #[test]
    fn matrix_renders_non_string_header_cells() {
        let rows = vec![vec![json!(1), json!("b")], vec![json!("x"), json!("y")]];
        let out = matrix(rows, None).unwrap();
        assert_eq!(serde_json::Value::Object(out[0].clone()), json!({"1": "x", "b": "y"}));
    }

    #[test]
    fn matrix_errors_on_empty_input_without_headers() {
        let err = matrix(Vec::new(), None).unwrap_err();
        assert!(err.to_string().contains("no headers"));
    }

    #[test]
    fn matrix_with_explicit_headers_keeps_every_row() {
        let rows = vec![vec![json!(1), json!(2)]];
        let out = matrix(rows, Some(fields(&["a", "b"]))).unwrap();
        assert_eq!(out.len(), 1);
    }
}

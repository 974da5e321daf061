//! Structural predicates over mappings and values.
//!
//! These back the list-level duplicate scan ([`crate::lists::remove_duplicates`]), the
//! recursive flatten fixpoint ([`crate::transform::flatten`]), and the truthy-wins rule in
//! [`crate::transform::intersection`].

use serde_json::Value;

use crate::types::Mapping;

/// One-sided structural equality: every key of `a` must be present in `b` with an equal value.
///
/// Note this is deliberately **not** symmetric: keys that appear only in `b` are ignored, so
/// `subset_equal(&a, &b)` can hold while `subset_equal(&b, &a)` does not. The duplicate scan
/// in [`crate::lists::remove_duplicates`] depends on exactly this check.
pub fn subset_equal(a: &Mapping, b: &Mapping) -> bool {
    a.iter().all(|(key, value)| b.get(key) == Some(value))
}

/// Returns `true` if any value in `m` is itself an object.
///
/// With `include_arrays`, array-valued entries also count as children. The flag only widens
/// this detection; the flatten operations never unpack arrays.
pub fn has_children(m: &Mapping, include_arrays: bool) -> bool {
    m.values()
        .any(|v| v.is_object() || (include_arrays && v.is_array()))
}

/// Boolean coercion for JSON values, matching loosely-typed truthiness rules.
///
/// Falsy: `null`, `false`, numeric zero, and empty strings/arrays/objects. Everything else is
/// truthy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

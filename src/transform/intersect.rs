//! Intersection of two mappings.

use crate::check;
use crate::transform::keys::reduce;
use crate::types::Mapping;

/// Returns a new mapping holding the keys present in **both** `a` and `b`.
///
/// For each shared key, `b`'s value is taken if it is truthy (see [`check::is_truthy`]);
/// otherwise the result falls back to `a`'s value. This truthy-wins rule is deliberately
/// asymmetric and part of the contract: `b` does not strictly override `a`.
///
/// If `fields` is given, the result is additionally reduced to those fields; listed fields
/// that are not shared keys are simply absent. An explicitly empty `fields` slice keeps
/// nothing, so `Some(&[])` yields an empty mapping; only `None` skips the filter.
pub fn intersection(a: &Mapping, b: &Mapping, fields: Option<&[String]>) -> Mapping {
    let mut out = Mapping::new();
    for (key, a_value) in a {
        if let Some(b_value) = b.get(key) {
            let chosen = if check::is_truthy(b_value) { b_value } else { a_value };
            out.insert(key.clone(), chosen.clone());
        }
    }

    if let Some(fields) = fields {
        reduce(&mut out, fields);
    }
    out
}

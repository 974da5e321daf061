//! Single-mapping transforms.
//!
//! Every function here is a direct, single-pass operation over one [`crate::types::Mapping`].
//! Constructive operations ([`create`], [`merge`], [`intersection`], [`matrix`]) return a new
//! value and leave their inputs alone; the rest mutate their input through `&mut` and return
//! nothing. Callers who need the original preserved should clone first.
//!
//! Currently implemented:
//!
//! - [`create()`] / [`matrix()`]: build mappings from parallel sequences / tabular rows
//! - [`merge()`]: right-biased union of two mappings
//! - [`reduce()`] / [`remove_null_values()`]: field pruning
//! - [`replace_keys()`] / [`replace_keys_custom()`]: key renaming
//! - [`flatten()`]: one-level or recursive unnesting of object-valued fields
//! - [`intersection()`]: shared keys with the truthy-wins value rule
//!
//! ## Example: build → rename → flatten
//!
//! ```rust
//! use json_reshape::transform::{create, flatten, replace_keys};
//! use serde_json::json;
//!
//! let fields = vec!["id".to_string(), "meta".to_string()];
//! let mut m = create(&fields, vec![json!(7), json!({"tag": "x"})]).unwrap();
//!
//! replace_keys(&mut m, &["id".to_string()], &["ident".to_string()]).unwrap();
//! flatten(&mut m, false);
//!
//! assert_eq!(serde_json::Value::Object(m), json!({"ident": 7, "tag": "x"}));
//! ```

pub mod build;
pub mod flatten;
pub mod intersect;
pub mod keys;

pub use build::{create, matrix};
pub use flatten::flatten;
pub use intersect::intersection;
pub use keys::{reduce, remove_null_values, replace_keys, replace_keys_custom};

use crate::types::Mapping;

/// Returns a new mapping containing every key of `a` and `b`; on collision `b`'s value wins.
///
/// Key order in the result is `a`'s keys first (in `a`'s order), then keys only in `b` (in
/// `b`'s order). Neither input is modified.
pub fn merge(a: &Mapping, b: &Mapping) -> Mapping {
    let mut out = a.clone();
    for (key, value) in b {
        out.insert(key.clone(), value.clone());
    }
    out
}

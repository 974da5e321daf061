//! `json-reshape` is a small library for reshaping structured records that are already in
//! memory as parsed JSON: single mappings ([`types::Mapping`]) and lists of mappings
//! ([`types::MappingList`]).
//!
//! It covers the common reshaping chores application code keeps rewriting: key renaming,
//! field reduction, merging, flattening of nested objects, duplicate removal, intersection of
//! two mappings, and building mappings from tabular rows.
//!
//! ## Contract
//!
//! One discipline throughout:
//!
//! - **Mutating** operations (`reduce`, `replace_keys*`, `remove_null_values`, `flatten`, and
//!   the list-level equivalents) take `&mut` and return nothing. Clone first if you need the
//!   original.
//! - **Constructive** operations (`create`, `merge`, `intersection`, `matrix`, `lists::keys`)
//!   leave their inputs alone and return a new value.
//!
//! Parallel-sequence preconditions (fields/values, from-keys/to-keys) are checked before any
//! mutation begins, so a [`ReshapeError::LengthMismatch`] never leaves a mapping
//! half-transformed.
//!
//! ## Quick example: reshape a record
//!
//! ```rust
//! use json_reshape::transform::{flatten, reduce, remove_null_values};
//! use serde_json::json;
//!
//! let mut m = json!({
//!     "id": 7,
//!     "user": {"name": "Ada", "title": null},
//!     "score": 98.5,
//! })
//! .as_object()
//! .cloned()
//! .unwrap();
//!
//! flatten(&mut m, true);
//! remove_null_values(&mut m);
//! reduce(&mut m, &["id".to_string(), "name".to_string()]);
//!
//! assert_eq!(serde_json::Value::Object(m), json!({"id": 7, "name": "Ada"}));
//! ```
//!
//! ## Quick example: work over a list
//!
//! ```rust
//! use json_reshape::lists;
//! use serde_json::json;
//!
//! let mut records: json_reshape::MappingList = vec![
//!     json!({"Old Name": 1}).as_object().cloned().unwrap(),
//!     json!({"Old Name": 2, "extra": true}).as_object().cloned().unwrap(),
//! ];
//!
//! lists::replace_keys_custom(&mut records, |k| k.to_lowercase().replace(' ', "_"));
//!
//! let keys = lists::keys(&records);
//! assert!(keys.contains("old_name"));
//! assert!(keys.contains("extra"));
//! ```
//!
//! ## Modules
//!
//! - [`transform`]: single-mapping transforms (create/merge/reduce/rename/flatten/intersect)
//! - [`lists`]: the same operations across a [`types::MappingList`], plus key aggregation and
//!   duplicate removal
//! - [`check`]: structural predicates (asymmetric equality, child detection, truthiness)
//! - [`io`]: load/save helpers for JSON and CSV sources, with optional observers for every
//!   load/save outcome
//! - [`types`]: core data model aliases
//! - [`util`]: parallel-sequence helpers
//! - [`error`]: the error type used across the crate
//!
//! ## Two behaviors worth knowing about
//!
//! Both are part of the contract and pinned by tests:
//!
//! - [`transform::intersection`] is **truthy-biased**, not right-biased: the right mapping's
//!   value is only taken when it is truthy ([`check::is_truthy`]), otherwise the left value
//!   is kept.
//! - [`lists::remove_duplicates`] compares with the asymmetric [`check::subset_equal`] and
//!   schedules removals by tail-relative index, so chained duplicates do not reduce the way a
//!   keep-first-occurrence dedup would.

pub mod check;
pub mod error;
pub mod io;
pub mod lists;
pub mod transform;
pub mod types;
pub mod util;

pub use error::{ReshapeError, ReshapeResult};
pub use types::{Mapping, MappingList, Matrix};

//! Core data model aliases.
//!
//! The whole crate operates on already-parsed JSON structure, so the data model is simply
//! [`serde_json::Value`] and its object form. The aliases below name the three shapes the
//! transform layer works with.
//!
//! `serde_json` is built with the `preserve_order` feature, so a [`Mapping`] keeps keys in
//! insertion order. Several operations rely on that: a renamed key is relocated to the end of
//! the mapping, and when two writes target the same key the later one is the one you observe.

use serde_json::Value;

/// A single structured record: string keys mapped to JSON values.
pub type Mapping = serde_json::Map<String, Value>;

/// An ordered sequence of [`Mapping`]s.
///
/// Order is significant for the per-element operations in [`crate::lists`] (elements are
/// visited and rewritten in list order); it is irrelevant for key aggregation.
pub type MappingList = Vec<Mapping>;

/// Tabular input: ordered rows of ordered cells.
///
/// Used by [`crate::transform::matrix`] to build a [`MappingList`] from row data, with the
/// first row optionally serving as the header row.
pub type Matrix = Vec<Vec<Value>>;

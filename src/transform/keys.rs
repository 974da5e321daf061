//! In-place key operations: pruning and renaming.

use crate::error::{ReshapeError, ReshapeResult};
use crate::types::Mapping;

/// Removes every key of `m` not present in `keep`.
///
/// Keys in `keep` that are absent from `m` are never added.
pub fn reduce(m: &mut Mapping, keep: &[String]) {
    m.retain(|key, _| keep.iter().any(|k| k == key));
}

/// Relocates each key in `from` to the corresponding key in `to`.
///
/// The two sequences are parallel and must have equal length; the check happens before any
/// mutation. Pairs are processed in order: a `from` key absent from `m` is skipped, a present
/// one is removed and its value reinserted under `to` (which places it at the end of the key
/// order). If two pairs target the same `to` key, the later pair's write wins.
pub fn replace_keys(m: &mut Mapping, from: &[String], to: &[String]) -> ReshapeResult<()> {
    ReshapeError::check_equal_length("from/to keys", from, to)?;

    for (from_key, to_key) in from.iter().zip(to) {
        if let Some(value) = m.shift_remove(from_key) {
            m.insert(to_key.clone(), value);
        }
    }
    Ok(())
}

/// Renames every key of `m` through `rename`.
///
/// The key list is snapshotted up front, then each key is removed and reinserted under its
/// renamed form, in the original key order. If two keys rename to the same target, the later
/// one wins.
pub fn replace_keys_custom(m: &mut Mapping, mut rename: impl FnMut(&str) -> String) {
    let keys: Vec<String> = m.keys().cloned().collect();
    for key in keys {
        if let Some(value) = m.shift_remove(&key) {
            m.insert(rename(&key), value);
        }
    }
}

/// Deletes every key whose value is `null`.
///
/// Only explicit `null` values are removed; absent keys are (by definition) left alone.
pub fn remove_null_values(m: &mut Mapping) {
    m.retain(|_, value| !value.is_null());
}

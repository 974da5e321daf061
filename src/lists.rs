//! List-level operations over [`MappingList`]s.
//!
//! Per-element work is dispatched to [`crate::transform`]; the operations that need
//! cross-element reasoning (key aggregation, duplicate removal) live here. All mutating
//! operations rewrite the list in place, in list order.

use std::collections::BTreeSet;

use crate::check;
use crate::error::{ReshapeError, ReshapeResult};
use crate::transform;
use crate::types::MappingList;
use crate::util;

/// Returns the union of all keys appearing in any element.
pub fn keys(list: &MappingList) -> BTreeSet<String> {
    list.iter()
        .flat_map(|m| m.keys().cloned())
        .collect()
}

/// Reduces every element to the `keep` keys, in place.
pub fn reduce(list: &mut MappingList, keep: &[String]) {
    for m in list.iter_mut() {
        transform::reduce(m, keep);
    }
}

/// Removes elements that duplicate an earlier element under [`check::subset_equal`].
///
/// The scan is the classic double loop: for each index `i`, every element after `i` is
/// compared against element `i`, and a match records the matching element's index *relative
/// to* `i + 1` (not its absolute list index). After the full scan those recorded positions
/// are deleted from the list in one pass. Because the recorded index is relative, the set of
/// elements actually removed can differ from a keep-first-occurrence dedup when duplicates
/// chain; callers rely on this exact behavior.
pub fn remove_duplicates(list: &mut MappingList) {
    let mut to_remove: Vec<usize> = Vec::new();

    if list.len() > 1 {
        for i in 0..list.len() - 1 {
            for (rel_idx, later) in list[i + 1..].iter().enumerate() {
                if check::subset_equal(&list[i], later) {
                    to_remove.push(rel_idx);
                }
            }
        }
    }

    util::remove_indexes(list, &to_remove);
}

/// Applies [`transform::replace_keys`] to every element, in list order.
///
/// The `from`/`to` length check happens once, up front, before any element is touched.
pub fn replace_keys(list: &mut MappingList, from: &[String], to: &[String]) -> ReshapeResult<()> {
    ReshapeError::check_equal_length("from/to keys", from, to)?;

    for m in list.iter_mut() {
        transform::replace_keys(m, from, to)?;
    }
    Ok(())
}

/// Applies [`transform::replace_keys_custom`] to every element, in list order.
pub fn replace_keys_custom(list: &mut MappingList, mut rename: impl FnMut(&str) -> String) {
    for m in list.iter_mut() {
        transform::replace_keys_custom(m, &mut rename);
    }
}

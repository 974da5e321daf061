//! Small parallel-sequence helpers used by the transform and list layers.

/// Returns `true` if the two slices have the same length.
///
/// Every operation that takes parallel key/replacement sequences checks this before touching
/// its input.
pub fn equal_length<A, B>(a: &[A], b: &[B]) -> bool {
    a.len() == b.len()
}

/// Removes every element whose position appears in `indexes`.
///
/// Duplicate and out-of-range indexes are ignored. Remaining elements keep their relative
/// order.
pub fn remove_indexes<T>(list: &mut Vec<T>, indexes: &[usize]) {
    if indexes.is_empty() {
        return;
    }
    let mut idx = 0;
    list.retain(|_| {
        let keep = !indexes.contains(&idx);
        idx += 1;
        keep
    });
}

//! Unnesting of object-valued fields.

use serde_json::Value;

use crate::check;
use crate::types::Mapping;

/// Flattens object-valued fields of `m` into `m` itself, in place.
///
/// One level (`recursive = false`): the key list is snapshotted, then every key whose value
/// is an object is removed and the child's entries are inserted into `m`. A child entry that
/// collides with an existing key overwrites it (nested wins); fresh child keys append at the
/// end of the key order. Values one level down that are themselves objects stay nested.
///
/// Recursive: repeats the one-level pass until no value is an object
/// ([`check::has_children`] with arrays excluded). Array-valued fields are never descended
/// into, even when they contain objects.
pub fn flatten(m: &mut Mapping, recursive: bool) {
    if recursive {
        while check::has_children(m, false) {
            flatten_one_level(m);
        }
    } else {
        flatten_one_level(m);
    }
}

fn flatten_one_level(m: &mut Mapping) {
    let keys: Vec<String> = m.keys().cloned().collect();
    for key in keys {
        if m.get(&key).is_some_and(Value::is_object) {
            if let Some(Value::Object(child)) = m.shift_remove(&key) {
                for (child_key, child_value) in child {
                    m.insert(child_key, child_value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::flatten;
    use crate::check::has_children;
    use crate::types::Mapping;

    fn obj(v: serde_json::Value) -> Mapping {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn one_level_lifts_nested_entries() {
        let mut m = obj(json!({"a": 1, "b": {"c": 2, "d": 3}}));
        flatten(&mut m, false);
        assert_eq!(serde_json::Value::Object(m), json!({"a": 1, "c": 2, "d": 3}));
    }

    #[test]
    fn one_level_leaves_deeper_nesting_alone() {
        let mut m = obj(json!({"a": {"b": {"c": 1}}}));
        flatten(&mut m, false);
        assert_eq!(serde_json::Value::Object(m), json!({"b": {"c": 1}}));
    }

    #[test]
    fn nested_value_wins_on_key_collision() {
        let mut m = obj(json!({"a": 1, "child": {"a": 2}}));
        flatten(&mut m, false);
        assert_eq!(serde_json::Value::Object(m), json!({"a": 2}));
    }

    #[test]
    fn recursive_reaches_a_fixpoint() {
        let mut m = obj(json!({"a": 1, "b": {"c": {"d": {"e": 2}}, "f": 3}}));
        flatten(&mut m, true);

        assert!(!has_children(&m, false));
        assert_eq!(serde_json::Value::Object(m), json!({"a": 1, "f": 3, "e": 2}));
    }

    #[test]
    fn arrays_are_never_descended_into() {
        let mut m = obj(json!({"a": [{"b": 1}], "c": {"d": 2}}));
        flatten(&mut m, true);
        assert_eq!(serde_json::Value::Object(m), json!({"a": [{"b": 1}], "d": 2}));
    }

    #[test]
    fn flat_mapping_is_unchanged() {
        let mut m = obj(json!({"a": 1, "b": [1, 2], "c": "x"}));
        let before = m.clone();
        flatten(&mut m, true);
        assert_eq!(m, before);
    }
}

//! End-to-end transform pipelines over in-memory mappings and lists.

use json_reshape::lists;
use json_reshape::transform::{
    create, flatten, intersection, matrix, merge, reduce, remove_null_values, replace_keys,
};
use json_reshape::types::{Mapping, MappingList};
use serde_json::json;

fn obj(v: serde_json::Value) -> Mapping {
    v.as_object().cloned().unwrap()
}

fn mapping_list(v: serde_json::Value) -> MappingList {
    v.as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_object().cloned().unwrap())
        .collect()
}

fn names(strs: &[&str]) -> Vec<String> {
    strs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn create_then_merge() {
    let a = create(&names(&["a", "b"]), vec![json!(1), json!(2)]).unwrap();
    let b = obj(json!({"b": 3, "c": 4}));

    let merged = merge(&a, &b);
    assert_eq!(serde_json::Value::Object(merged), json!({"a": 1, "b": 3, "c": 4}));
}

#[test]
fn flatten_one_level_lifts_children() {
    let mut m = obj(json!({"a": 1, "b": {"c": 2, "d": 3}}));
    flatten(&mut m, false);
    assert_eq!(serde_json::Value::Object(m), json!({"a": 1, "c": 2, "d": 3}));
}

#[test]
fn intersection_prefers_truthy_right_values() {
    let out = intersection(&obj(json!({"a": 1, "b": 0})), &obj(json!({"a": 2, "b": 5})), None);
    assert_eq!(serde_json::Value::Object(out), json!({"a": 2, "b": 5}));

    let out = intersection(&obj(json!({"a": 1, "b": 7})), &obj(json!({"a": 0, "b": 0})), None);
    assert_eq!(serde_json::Value::Object(out), json!({"a": 1, "b": 7}));
}

#[test]
fn matrix_with_header_row() {
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
fn dedup_follows_the_tail_relative_scan() {
    // Element 0 subset-matches both later elements (tail positions 0 and 1),
    // so positions 0 and 1 of the list are removed, keeping only the last
    // element. A keep-first-occurrence dedup would keep elements 0 and 1.
    let mut l = mapping_list(json!([{"a": 1}, {"a": 1, "b": 2}, {"a": 1}]));
    lists::remove_duplicates(&mut l);

    assert_eq!(l.len(), 1);
    assert_eq!(serde_json::Value::Object(l[0].clone()), json!({"a": 1}));
}

#[test]
fn normalize_records_pipeline() {
    // Load-shaped records: flatten nested payloads, drop nulls, rename, trim fields.
    let mut records = mapping_list(json!([
        {"ID": 1, "payload": {"city": "Oslo", "zip": null}},
        {"ID": 2, "payload": {"city": "Lima", "zip": "04001"}},
    ]));

    for record in records.iter_mut() {
        flatten(record, true);
        remove_null_values(record);
    }
    lists::replace_keys(&mut records, &names(&["ID"]), &names(&["id"])).unwrap();
    lists::reduce(&mut records, &names(&["id", "city"]));

    assert_eq!(serde_json::Value::Object(records[0].clone()), json!({"city": "Oslo", "id": 1}));
    assert_eq!(serde_json::Value::Object(records[1].clone()), json!({"city": "Lima", "id": 2}));
    assert_eq!(
        lists::keys(&records).into_iter().collect::<Vec<_>>(),
        vec!["city".to_string(), "id".to_string()]
    );
}

#[test]
fn reduce_result_is_subset_of_keep_set() {
    let mut m = obj(json!({"a": 1, "b": 2, "c": 3}));
    let keep = names(&["a", "b"]);
    reduce(&mut m, &keep);

    assert!(m.keys().all(|k| keep.contains(k)));
    assert_eq!(m.len(), 2);
}

#[test]
fn replace_keys_round_trip_restores_original() {
    let original = obj(json!({"x": 1, "y": 2, "z": 3}));
    let mut m = original.clone();

    let from = names(&["x", "y"]);
    let to = names(&["u", "v"]);
    replace_keys(&mut m, &from, &to).unwrap();
    replace_keys(&mut m, &to, &from).unwrap();

    assert_eq!(m, original);
}

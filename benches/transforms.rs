use criterion::{black_box, criterion_group, criterion_main, Criterion};
use json_reshape::types::{Mapping, MappingList};
use json_reshape::{lists, transform};
use serde_json::{json, Value};

fn deep_mapping(depth: usize, width: usize) -> Mapping {
    let mut current = Mapping::new();
    for i in 0..width {
        current.insert(format!("leaf{i}"), json!(i));
    }
    for level in 0..depth {
        let mut parent = Mapping::new();
        parent.insert(format!("level{level}"), Value::Object(current));
        for i in 0..width {
            parent.insert(format!("k{level}_{i}"), json!(i));
        }
        current = parent;
    }
    current
}

fn duplicate_heavy_list(len: usize) -> MappingList {
    (0..len)
        .map(|i| {
            json!({"id": i % 10, "name": format!("n{}", i % 10)})
                .as_object()
                .cloned()
                .unwrap()
        })
        .collect()
}

fn bench_flatten(c: &mut Criterion) {
    let m = deep_mapping(16, 8);
    c.bench_function("flatten_recursive_depth16", |b| {
        b.iter(|| {
            let mut copy = m.clone();
            transform::flatten(black_box(&mut copy), true);
            copy
        })
    });
}

fn bench_remove_duplicates(c: &mut Criterion) {
    let l = duplicate_heavy_list(500);
    c.bench_function("remove_duplicates_500", |b| {
        b.iter(|| {
            let mut copy = l.clone();
            lists::remove_duplicates(black_box(&mut copy));
            copy
        })
    });
}

criterion_group!(benches, bench_flatten, bench_remove_duplicates);
criterion_main!(benches);

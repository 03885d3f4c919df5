use crate::common::{chain_with_depth, configure_criterion};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;

pub fn bench_to_json(c: &mut Criterion) {
    let err = chain_with_depth(5);
    c.bench_function("serialization/json_depth_5", |b| {
        b.iter(|| black_box(serde_json::to_string(&err)))
    });
}

criterion_group! {
    name = serialization_benches;
    config = configure_criterion();
    targets = bench_to_json
}

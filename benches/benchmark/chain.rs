use crate::common::{chain_with_depth, configure_criterion};
use chained_error::chain;
use criterion::{criterion_group, BenchmarkId, Criterion};
use std::hint::black_box;
use std::io;

pub fn bench_chain_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/walk");

    for depth in [1, 5, 20] {
        let err = chain_with_depth(depth);

        group.bench_with_input(BenchmarkId::new("links", depth), &err, |b, err| {
            b.iter(|| black_box(err.links().len()))
        });
        group.bench_with_input(BenchmarkId::new("find_io", depth), &err, |b, err| {
            b.iter(|| black_box(chain::find::<io::Error>(err).is_some()))
        });
    }

    group.finish();
}

criterion_group! {
    name = chain_benches;
    config = configure_criterion();
    targets = bench_chain_walk
}

// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::StreamExt;
use pullstream_merge::{MergeExt, MergeMapExt};
use pullstream_stream::from_values;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn bench_merge(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("merge");
    let sizes = [1_000usize, 10_000usize];

    for &size in &sizes {
        group.throughput(Throughput::Elements((size * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter(|| {
                let streams: Vec<_> = (0..4)
                    .map(|lane| from_values((0..size as u64).map(|i| i * 4 + lane).collect()))
                    .collect();

                rt.block_on(async {
                    let mut merged = streams.merge_concurrent(4);
                    while let Some(item) = merged.next().await {
                        black_box(item);
                    }
                });
            });
        });
    }
    group.finish();
}

fn bench_merge_map(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("merge_map");
    let sizes = [1_000usize, 10_000usize];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter(|| {
                let upstream = from_values((0..size as u64).collect());

                rt.block_on(async {
                    let mut mapped =
                        upstream.merge_map_concurrent(8, |x| async move { Ok(x.wrapping_mul(31)) });
                    while let Some(item) = mapped.next().await {
                        black_box(item);
                    }
                });
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge, bench_merge_map);
criterion_main!(benches);

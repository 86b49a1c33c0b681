// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use uncross_segment::{GeometryStore, Polyline, QueryStats, Segment};
use uncross_session::{DrawingSession, Rng, ScatterConfig, scatter};

fn filled_store(count: usize) -> GeometryStore<i32> {
    let mut store = GeometryStore::new();
    let config = ScatterConfig {
        count,
        ..ScatterConfig::default()
    };
    scatter(&mut store, &mut Rng::new(0x3C6E_F35F_4750_2932), &config);
    store
}

fn candidates(count: usize) -> Vec<Segment<i32>> {
    let config = ScatterConfig::default();
    let mut rng = Rng::new(0x81FD_BEE7_94F0_AF1A);
    (0..count).map(|_| config.sample(&mut rng)).collect()
}

fn bench_intersects_any(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/intersects_any");
    let queries = candidates(256);
    group.throughput(Throughput::Elements(queries.len() as u64));

    for attempts in [100_usize, 500, 1_500, 4_000] {
        let store = filled_store(attempts);
        group.bench_with_input(
            BenchmarkId::from_parameter(store.segment_count()),
            &store,
            |b, store| {
                b.iter(|| {
                    let mut hits = 0_usize;
                    for q in &queries {
                        hits += usize::from(store.intersects_any(black_box(q)));
                    }
                    black_box(hits)
                });
            },
        );
    }

    group.finish();
}

fn bench_intersects_any_traced(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/intersects_any_traced");
    let queries = candidates(256);
    let store = filled_store(1_500);
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("unit", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for q in &queries {
                hits += usize::from(store.intersects_any_traced(black_box(q), &mut ()));
            }
            black_box(hits)
        });
    });
    group.bench_function("query_stats", |b| {
        b.iter(|| {
            let mut stats = QueryStats::new();
            for q in &queries {
                store.intersects_any_traced(black_box(q), &mut stats);
            }
            black_box(stats)
        });
    });

    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/scatter");

    for count in [100_usize, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        let config = ScatterConfig {
            count,
            ..ScatterConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(count), &config, |b, config| {
            b.iter_batched(
                DrawingSession::<i32>::new,
                |mut session| {
                    black_box(session.scatter(&mut Rng::new(1), config));
                    session
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_stroke(c: &mut Criterion) {
    let store = filled_store(1_500);
    // A stroke hugging the bottom edge, below every scattered segment.
    let points: Vec<(i32, i32)> = (0..200).map(|i| (i * 3, -20 - (i % 2))).collect();

    c.bench_function("session/polyline_stroke_200", |b| {
        b.iter(|| {
            let mut stroke = Polyline::new();
            let mut rejected = 0_usize;
            for pair in points.windows(2) {
                let s = Segment::new(pair[0], pair[1]);
                if store.intersects_any(&s) {
                    rejected += 1;
                } else {
                    stroke.extend(s);
                }
            }
            black_box((stroke.len(), rejected))
        });
    });
}

criterion_group!(
    benches,
    bench_intersects_any,
    bench_intersects_any_traced,
    bench_scatter,
    bench_stroke
);
criterion_main!(benches);

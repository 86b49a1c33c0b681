// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use uncross_segment::{IntersectParams, Segment};
use uncross_session::{Rng, ScatterConfig};

fn pairs<T: uncross_segment::Coord + From<i32>>(
    count: usize,
    config: &ScatterConfig,
) -> Vec<(Segment<T>, Segment<T>)> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| (config.sample(&mut rng), config.sample(&mut rng)))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment/intersects");

    // Sparse pairs are mostly rejected by the bounding box; dense ones reach
    // the orientation tests.
    let sparse = ScatterConfig::default();
    let dense = ScatterConfig {
        width: 16,
        height: 16,
        ..ScatterConfig::default()
    };

    for (name, config) in [("sparse", sparse), ("dense", dense)] {
        let ints = pairs::<i32>(1_024, &config);
        let floats = pairs::<f64>(1_024, &config);
        group.throughput(Throughput::Elements(ints.len() as u64));

        group.bench_with_input(BenchmarkId::new("i32", name), &ints, |b, pairs| {
            b.iter(|| {
                let mut hits = 0_usize;
                for (a, s) in pairs {
                    hits += usize::from(black_box(a).intersects(s).is_hit());
                }
                black_box(hits)
            });
        });
        group.bench_with_input(BenchmarkId::new("f64", name), &floats, |b, pairs| {
            b.iter(|| {
                let mut hits = 0_usize;
                for (a, s) in pairs {
                    hits += usize::from(black_box(a).intersects(s).is_hit());
                }
                black_box(hits)
            });
        });

        let params = IntersectParams::with_tolerance(1e-9);
        group.bench_with_input(
            BenchmarkId::new("f64_tolerance", name),
            &floats,
            |b, pairs| {
                b.iter(|| {
                    let mut hits = 0_usize;
                    for (a, s) in pairs {
                        hits += usize::from(black_box(a).intersects_with(s, &params).is_hit());
                    }
                    black_box(hits)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);

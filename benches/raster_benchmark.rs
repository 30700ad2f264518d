#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the line and circle generators.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use office_raster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    for length in [10, 100, 1_000, 10_000] {
        let end = Pixel::new(length, length / 3);

        group.bench_with_input(BenchmarkId::new("bresenham", length), &end, |b, &end| {
            b.iter(|| BresenhamLine::new(black_box(Pixel::new(0, 0)), black_box(end)).count());
        });

        let end = end.to_point();
        group.bench_with_input(BenchmarkId::new("dda", length), &end, |b, &end| {
            b.iter(|| DdaLine::new(black_box(Point::ORIGIN), black_box(end)).count());
        });
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circles");

    for radius in [5, 50, 500, 5_000] {
        group.bench_with_input(
            BenchmarkId::new("midpoint", radius),
            &radius,
            |b, &radius| {
                b.iter(|| MidpointCircle::new(black_box(Pixel::new(0, 0)), radius).count());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("midpoint_dedup", radius),
            &radius,
            |b, &radius| {
                b.iter(|| dedup_pixels(MidpointCircle::new(black_box(Pixel::new(0, 0)), radius)));
            },
        );
    }

    for segments in [8, 32, 128] {
        group.bench_with_input(
            BenchmarkId::new("fan", segments),
            &segments,
            |b, &segments| {
                b.iter(|| {
                    let fan = CircleFan::new(black_box(Point::ORIGIN), 50.0, segments)
                        .expect("fan should be valid");
                    fan.vertices().count()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, line_benchmark, circle_benchmark);
criterion_main!(benches);

//! Proximity evaluation benchmarks over synthetic grove fields.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use grovetrack::proximity::{evaluate, nearest_grove};
use grovetrack::synthetic::GroveField;
use grovetrack::{GeoPoint, ProximityConfig};

fn bench_proximity(c: &mut Criterion) {
    let field = GroveField {
        grove_count: 1_000,
        ..GroveField::default()
    };
    let groves = field.generate();
    let here = GeoPoint::new(field.origin.latitude, field.origin.longitude);
    let config = ProximityConfig::default();

    c.bench_function("nearest_grove_1000", |b| {
        b.iter(|| nearest_grove(black_box(&here), black_box(&groves)))
    });

    c.bench_function("evaluate_1000", |b| {
        b.iter(|| evaluate(black_box(&here), black_box(&groves), black_box(&config)))
    });
}

criterion_group!(benches, bench_proximity);
criterion_main!(benches);

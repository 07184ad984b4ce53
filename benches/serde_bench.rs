//! Benchmark for serde serialization/deserialization of `Optional<T>`.
//!
//! Compares `Optional<T>` against the standard library's `Option<T>`, which
//! shares its wire shape.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use presence::prelude::*;
use std::hint::black_box;

fn sample(size: i64) -> Vec<Optional<i64>> {
    (0..size)
        .map(|index| if index % 4 == 0 { absent() } else { present(index) })
        .collect()
}

// =============================================================================
// Serialize
// =============================================================================

fn benchmark_serialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_serialize_optional");

    for size in [100, 1000, 10000] {
        let optionals = sample(size);
        let options: Vec<Option<i64>> = optionals.iter().map(|value| value.into_option()).collect();

        group.bench_with_input(BenchmarkId::new("Optional", size), &size, |bencher, _| {
            bencher.iter(|| {
                let json = serde_json::to_string(&optionals).unwrap();
                black_box(json)
            });
        });

        group.bench_with_input(BenchmarkId::new("Option", size), &size, |bencher, _| {
            bencher.iter(|| {
                let json = serde_json::to_string(&options).unwrap();
                black_box(json)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Deserialize
// =============================================================================

fn benchmark_deserialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_deserialize_optional");

    for size in [100, 1000, 10000] {
        let json = serde_json::to_string(&sample(size)).unwrap();

        group.bench_with_input(BenchmarkId::new("Optional", size), &json, |bencher, json| {
            bencher.iter(|| {
                let restored: Vec<Optional<i64>> = serde_json::from_str(json).unwrap();
                black_box(restored)
            });
        });

        group.bench_with_input(BenchmarkId::new("Option", size), &json, |bencher, json| {
            bencher.iter(|| {
                let restored: Vec<Option<i64>> = serde_json::from_str(json).unwrap();
                black_box(restored)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_serialize, benchmark_deserialize);

criterion_main!(benches);

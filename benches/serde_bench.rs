//! Benchmark for archiving object collections through serde.
//!
//! Compares the typed archive view of an `ObjectArray` against serializing
//! a plain `Vec` of the same values.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use object_array::prelude::*;
use std::hint::black_box;

// =============================================================================
// Serialize
// =============================================================================

fn benchmark_archive_serialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_serialize_archive");

    for size in [100, 1000, 10000] {
        let array = ObjectArray::from_values(0..size);
        let standard_vec: Vec<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("ObjectArray", size), &size, |bencher, _| {
            bencher.iter(|| {
                let json = serde_json::to_string(&array.archive_of::<i32>()).unwrap();
                black_box(json)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let json = serde_json::to_string(&standard_vec).unwrap();
                black_box(json)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Deserialize
// =============================================================================

fn benchmark_archive_deserialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_deserialize_archive");

    for size in [100, 1000, 10000] {
        let standard_vec: Vec<i32> = (0..size).collect();
        let json = serde_json::to_string(&standard_vec).unwrap();

        group.bench_with_input(BenchmarkId::new("ObjectArray", size), &json, |bencher, json| {
            bencher.iter(|| {
                let mut deserializer = serde_json::Deserializer::from_str(json);
                let array = ObjectArray::from_archive::<i32, _>(&mut deserializer).unwrap();
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &json, |bencher, json| {
            bencher.iter(|| {
                let vector: Vec<i32> = serde_json::from_str(json).unwrap();
                black_box(vector)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_archive_serialize, benchmark_archive_deserialize);
criterion_main!(benches);

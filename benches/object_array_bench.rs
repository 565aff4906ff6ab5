//! Benchmark for ObjectArray and MutableObjectArray.
//!
//! Compares the object collections against `Vec<i32>` for the operations
//! that dominate typical use: building, searching, sorting and bulk
//! mutation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use object_array::prelude::*;
use std::cmp::Ordering;
use std::hint::black_box;

fn by_value(left: &ObjectRef, right: &ObjectRef) -> Ordering {
    left.as_any()
        .downcast_ref::<i32>()
        .cmp(&right.as_any().downcast_ref::<i32>())
}

// =============================================================================
// Construction
// =============================================================================

fn benchmark_from_values(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("from_values");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("ObjectArray", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(ObjectArray::from_values(0..size)));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| black_box((0..size).collect::<Vec<i32>>()));
        });
    }

    group.finish();
}

// =============================================================================
// Search
// =============================================================================

fn benchmark_index_of(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("index_of");

    for size in [100, 1000, 10000] {
        let array = ObjectArray::from_values(0..size);
        let target = object(size - 1);

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |bencher, _| {
            bencher.iter(|| black_box(array.index_of(&target)));
        });

        group.bench_with_input(BenchmarkId::new("binary", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(array.binary_search(
                    &target,
                    IndexRange::full(array.count()),
                    BinarySearchingOptions::empty(),
                    by_value,
                ))
            });
        });
    }

    group.finish();
}

fn benchmark_remove_all_in(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_all_in");

    for size in [100, 1000, 10000] {
        let source = MutableObjectArray::from_values((0..size).map(|value| value % 16));
        let removed = ObjectArray::from_values(0..8);

        group.bench_with_input(BenchmarkId::new("MutableObjectArray", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut array = source.clone();
                black_box(array.remove_all_in(removed.as_slice()))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Sorting
// =============================================================================

fn benchmark_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort");

    for size in [100, 1000, 10000] {
        let array = ObjectArray::from_values((0..size).rev());

        group.bench_with_input(BenchmarkId::new("sorted_copy", size), &size, |bencher, _| {
            bencher.iter(|| black_box(array.sorted_copy(by_value)));
        });

        group.bench_with_input(BenchmarkId::new("sort_in_place", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut mutable = array.mutable_copy();
                mutable.sort_in_place(by_value);
                black_box(mutable)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Bulk mutation
// =============================================================================

fn benchmark_remove_all_at(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_all_at");

    for size in [100, 1000, 10000] {
        let source = MutableObjectArray::from_values(0..size);
        let indexes: IndexSet = (0..size as usize).step_by(3).collect();

        group.bench_with_input(BenchmarkId::new("every_third", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut array = source.clone();
                array.remove_all_at(&indexes);
                black_box(array)
            });
        });
    }

    group.finish();
}

fn benchmark_force_bridge(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("force_bridge");

    for size in [100, 1000, 10000] {
        let array = ObjectArray::from_values(0..size);

        group.bench_with_input(BenchmarkId::new("i32", size), &size, |bencher, _| {
            bencher.iter(|| black_box(array.force_bridge::<i32>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_from_values,
    benchmark_index_of,
    benchmark_remove_all_in,
    benchmark_sort,
    benchmark_remove_all_at,
    benchmark_force_bridge
);
criterion_main!(benches);

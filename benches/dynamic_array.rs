// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Benchmarks for DynamicArray vs Vec
//!
//! Run with: `cargo bench --bench dynamic_array`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynamic_array::DynamicArray;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = DynamicArray::new();
                for i in 0..size {
                    v.push(black_box(i as u32)).unwrap();
                }
                black_box(v);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..size {
                    v.push(black_box(i as u32));
                }
                black_box(v);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [64, 512] {
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = DynamicArray::new();
                for i in 0..size {
                    v.insert_at(v.begin(), black_box(i as u64)).unwrap();
                }
                black_box(v);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..size {
                    v.insert(0, black_box(i as u64));
                }
                black_box(v);
            });
        });
    }

    group.finish();
}

fn bench_erase_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_middle_half");
    let source: Vec<u64> = (0..4096).collect();

    group.bench_function("DynamicArray", |b| {
        b.iter(|| {
            let mut v: DynamicArray<u64> = DynamicArray::try_from(&source[..]).unwrap();
            let quarter = (v.len() / 4) as isize;
            v.erase_range(v.begin() + quarter, v.end() - quarter).unwrap();
            black_box(v);
        });
    });

    group.bench_function("Vec", |b| {
        b.iter(|| {
            let mut v = source.clone();
            let quarter = v.len() / 4;
            let end = v.len() - quarter;
            v.drain(quarter..end);
            black_box(v);
        });
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    let array: DynamicArray<u64> = (0..4096).collect();
    let vec: Vec<u64> = (0..4096).collect();

    group.bench_function("DynamicArray", |b| b.iter(|| black_box(array.clone())));
    group.bench_function("Vec", |b| b.iter(|| black_box(vec.clone())));

    group.finish();
}

fn bench_iter_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter_sum");
    let array: DynamicArray<u64> = (0..4096).collect();
    let vec: Vec<u64> = (0..4096).collect();

    group.bench_function("DynamicArray", |b| {
        b.iter(|| black_box(&array).iter().sum::<u64>())
    });
    group.bench_function("Vec", |b| b.iter(|| black_box(&vec).iter().sum::<u64>()));

    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_insert_front,
    bench_erase_range,
    bench_clone,
    bench_iter_sum
);
criterion_main!(benches);

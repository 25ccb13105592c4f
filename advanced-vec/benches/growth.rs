//! Criterion micro-benchmarks for growing and shifting vectors.

use std::hint::black_box;

use advanced_vec::Vector;
use criterion::{criterion_group, criterion_main, Criterion};

const COUNT: usize = 10_000;

/// Appending one element at a time, paying for every doubling.
fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_10k");
    group.bench_function("Vector", |b| {
        b.iter(|| {
            let mut vec = Vector::new();
            for i in 0..COUNT {
                vec.push_back(black_box(i));
            }
            vec
        });
    });
    group.bench_function("Vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..COUNT {
                vec.push(black_box(i));
            }
            vec
        });
    });
    group.finish();
}

/// Appending into storage reserved up front.
fn bench_push_back_reserved(c: &mut Criterion) {
    c.bench_function("push_back_reserved_10k", |b| {
        b.iter(|| {
            let mut vec = Vector::with_capacity(COUNT);
            for i in 0..COUNT {
                vec.push_back(black_box(i));
            }
            vec
        });
    });
}

/// Inserting at the front shifts the whole vector every time.
fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut vec = Vector::new();
            for i in 0..1_000usize {
                vec.insert(0, black_box(i));
            }
            vec
        });
    });
}

fn bench_clone(c: &mut Criterion) {
    let source: Vector<String> = (0..1_000).map(|i| i.to_string()).collect();
    c.bench_function("clone_1k_strings", |b| {
        b.iter(|| black_box(&source).clone());
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_back_reserved,
    bench_insert_front,
    bench_clone
);
criterion_main!(benches);

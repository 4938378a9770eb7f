//! Benchmarks for Vector vs SmallVec vs Vec
//!
//! Run with: `cargo bench --bench vector`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use growvec_core::Vector;
use smallvec::SmallVec;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [4, 16, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::new();
                for i in 0..size {
                    vec.push(black_box(i as u32));
                }
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("SmallVec<16>", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = SmallVec::<[u32; 16]>::new();
                for i in 0..size {
                    vec.push(black_box(i as u32));
                }
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u32>::new();
                for i in 0..size {
                    vec.push(black_box(i as u32));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [16, 128, 512] {
        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::with_capacity(size);
                for i in 0..size {
                    // Position 0 is always valid.
                    let _ = vec.insert(0, black_box(i as u32));
                }
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u32>::with_capacity(size);
                for i in 0..size {
                    vec.insert(0, black_box(i as u32));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    group.bench_function("Vector_256", |b| {
        let vec: Vector<u32> = (0..256).collect();
        b.iter(|| black_box(vec.clone()));
    });

    group.bench_function("SmallVec_256", |b| {
        let vec: SmallVec<[u32; 16]> = (0..256).collect();
        b.iter(|| black_box(vec.clone()));
    });

    group.bench_function("Vec_256", |b| {
        let vec: Vec<u32> = (0..256).collect();
        b.iter(|| black_box(vec.clone()));
    });

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_sum");

    group.bench_function("Vector_4096", |b| {
        let vec: Vector<u64> = (0..4096).collect();
        b.iter(|| black_box(vec.iter().sum::<u64>()));
    });

    group.bench_function("Vec_4096", |b| {
        let vec: Vec<u64> = (0..4096).collect();
        b.iter(|| black_box(vec.iter().sum::<u64>()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_insert_front,
    bench_clone,
    bench_iterate
);
criterion_main!(benches);

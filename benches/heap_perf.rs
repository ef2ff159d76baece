//! Heap operation benchmarks
//!
//! Compares build, insert and extract across branching factors. Higher
//! degrees trade cheaper sift-up paths for wider child scans during
//! sift-down, so the interesting axis is the degree, not just n.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dary_maxheap::{DaryHeap, MAX_CAPACITY};

const DEGREES: &[usize] = &[1, 2, 3, 4, 8];
const N: usize = MAX_CAPACITY;

fn random_values(n: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

fn bench_build(c: &mut Criterion) {
    let values = random_values(N);
    let mut group = c.benchmark_group("build");
    for &d in DEGREES {
        group.bench_with_input(BenchmarkId::from_parameter(d), &d, |b, &d| {
            b.iter(|| {
                let mut heap = DaryHeap::from_vec(black_box(values.clone()), d).unwrap();
                heap.build();
                black_box(heap.peek())
            });
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let values = random_values(N);
    let mut group = c.benchmark_group("insert");
    for &d in DEGREES {
        group.bench_with_input(BenchmarkId::from_parameter(d), &d, |b, &d| {
            b.iter(|| {
                let mut heap = DaryHeap::new(MAX_CAPACITY, d).unwrap();
                for &v in &values {
                    heap.insert(black_box(v)).unwrap();
                }
                black_box(heap.len())
            });
        });
    }
    group.finish();
}

fn bench_extract_all(c: &mut Criterion) {
    let values = random_values(N);
    let mut group = c.benchmark_group("extract_all");
    for &d in DEGREES {
        let mut built = DaryHeap::from_vec(values.clone(), d).unwrap();
        built.build();
        group.bench_with_input(BenchmarkId::from_parameter(d), &built, |b, built| {
            b.iter(|| {
                let mut heap = built.clone();
                let mut acc = 0i64;
                while let Ok(max) = heap.extract_max() {
                    acc = acc.wrapping_add(max);
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_insert, bench_extract_all);
criterion_main!(benches);

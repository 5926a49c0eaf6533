// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for elementwise, scalar and reduction kernels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tensor_core::Tensor;

/// Element counts on both sides of the parallel threshold.
const SIZES: &[usize] = &[1 << 10, 1 << 14, 1 << 18, 1 << 20];

fn ramp(n: usize) -> Tensor<f32> {
    let data = (0..n).map(|i| (i % 97) as f32 * 0.25).collect();
    Tensor::from_vec([n], data).unwrap()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for &n in SIZES {
        let a = ramp(n);
        let b = ramp(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(a.add(&b).unwrap()))
        });
    }
    group.finish();
}

fn bench_mul_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_scalar");
    for &n in SIZES {
        let a = ramp(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(&a * 1.5))
        });
    }
    group.finish();
}

fn bench_add_in_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_in_place");
    for &n in SIZES {
        let mut a = ramp(n);
        let b = ramp(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| {
                a.add_(&b).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for &n in SIZES {
        let a = ramp(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(a.sum().unwrap()))
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_exp");
    for &n in SIZES {
        let a = ramp(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(a.map(|x| x.exp())))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_mul_scalar,
    bench_add_in_place,
    bench_sum,
    bench_map
);
criterion_main!(benches);

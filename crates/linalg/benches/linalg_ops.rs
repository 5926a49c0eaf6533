// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for matmul, transpose and norms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tensor_core::Tensor;

const SIZES: &[usize] = &[16, 64, 128, 256];

fn square(n: usize) -> Tensor<f32> {
    let data = (0..n * n).map(|i| ((i * 7) % 31) as f32 / 31.0).collect();
    Tensor::from_vec([n, n], data).unwrap()
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    for &n in SIZES {
        let a = square(n);
        let b = square(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(linalg::matmul(&a, &b).unwrap()))
        });
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    for &n in SIZES {
        let a = square(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(linalg::transpose(&a).unwrap()))
        });
    }
    group.finish();
}

fn bench_norms(c: &mut Criterion) {
    let a = square(256);
    for kind in ["frob", "1", "inf"] {
        c.bench_function(&format!("matrix_norm_{kind}_256"), |bench| {
            bench.iter(|| black_box(linalg::matrix_norm(&a, kind).unwrap()))
        });
    }
}

criterion_group!(benches, bench_matmul, bench_transpose, bench_norms);
criterion_main!(benches);

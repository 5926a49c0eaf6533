// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tl demo` command: a guided tour of the library.
//!
//! Builds small tensors and prints the result of each operation family:
//! construction and chained indexing, scalar arithmetic, reductions, linear
//! algebra and the float-promoting unary maps.

use linalg::NormKind;
use tensor_core::{dot, Tensor};

use crate::config::CliConfig;

pub fn execute(config: &CliConfig) -> anyhow::Result<()> {
    let p = config.precision;

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                 tl · Library Demo                   ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Construction & Indexing ────────────────────────────────
    let data: Vec<i32> = (0..24).collect();
    let mut t = Tensor::from_vec([2, 3, 4], data)?;
    println!("  Tensor {} ({}), strides {:?}:", t.shape(), t.dtype(), t.strides());
    println!("{t}");
    println!("  t[1][2][3] = {}", t.view().index(1)?.index(2)?.index(3)?.get()?);

    t.view_mut().index(0)?.index(1)?.index(2)?.set(-1)?;
    let row = Tensor::from_vec([4], vec![90, 91, 92, 93])?;
    t.view_mut().index(1)?.index(0)?.assign_tensor(&row)?;
    println!("  After t[0][1][2] = -1 and t[1][0] = [90 91 92 93]:");
    println!("{t}");

    let reshaped = t.reshape([4, 6])?;
    println!("  Reshaped to {}, strides {:?}", reshaped.shape(), reshaped.strides());
    println!();

    // ── Scalar Arithmetic ──────────────────────────────────────
    let v = Tensor::from_vec([4], vec![1.0f64, 2.0, 4.0, 8.0])?;
    println!("  v        = {v:.p$}");
    println!("  v * 2    = {:.p$}", &v * 2.0);
    println!("  10 - v   = {:.p$}", 10.0 - &v);
    println!("  1 / v    = {:.p$}", 1.0 / &v);
    let mut w = v.clone();
    w += 0.5;
    w.mul_(&v)?;
    println!("  (v + 0.5) * v = {w:.p$}");
    println!();

    // ── Reductions ─────────────────────────────────────────────
    let a = Tensor::from_vec([3], vec![1, 2, 3])?;
    let b = Tensor::from_vec([3], vec![4, 5, 6])?;
    println!("  sum(v) = {:.p$}  mean(v) = {:.p$}", v.sum()?, v.mean()?);
    println!("  max(v) = {:.p$}  min(v)  = {:.p$}", v.max()?, v.min()?);
    println!("  dot([1 2 3], [4 5 6]) = {}", dot(&a, &b)?);
    println!();

    // ── Linear Algebra ─────────────────────────────────────────
    let m = Tensor::from_vec([2, 3], vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    let mt = linalg::transpose(&m)?;
    println!("  M =\n{m:.p$}");
    println!("  Mᵀ =\n{mt:.p$}");
    println!("  M @ Mᵀ =\n{:.p$}", linalg::matmul(&m, &mt)?);
    println!("  trace(eye(4)) = {}", linalg::trace(&linalg::eye::<i32>(4))?);

    let n = Tensor::from_vec([2, 2], vec![3.0f64, 4.0, 0.0, 0.0])?;
    for kind in [NormKind::Frobenius, NormKind::One, NormKind::Infinity] {
        println!(
            "  norm([[3 4] [0 0]], {:<4}) = {:.p$}",
            kind.as_str(),
            linalg::matrix_norm_with(&n, kind)?,
        );
    }
    println!();

    // ── Functional Maps ────────────────────────────────────────
    let x = Tensor::from_vec([5], vec![-10, -1, 0, 1, 5])?;
    println!("  x                 = {x}");
    println!("  relu(x)           = {:.p$}", functional::relu(&x));
    println!(
        "  leaky_relu(x)     = {:.p$}",
        functional::leaky_relu(&x, functional::DEFAULT_LEAKY_SLOPE),
    );
    println!("  sigmoid(x)        = {:.p$}", functional::sigmoid(&x));
    println!("  sqrt(x)           = {:.p$}", functional::sqrt(&x));
    println!("  clip(x, -2, 2)    = {:.p$}", functional::clip(&x, -2.0, 2.0));
    println!();

    Ok(())
}

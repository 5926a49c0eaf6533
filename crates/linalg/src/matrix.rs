// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Structural matrix operations: transpose, identity and trace.

use tensor_core::{Element, Shape, Tensor};

use crate::LinalgError;

/// Returns the `[cols, rows]` transpose, with `result[j][i] = a[i][j]`.
///
/// # Errors
/// Returns [`LinalgError::Tensor`] wrapping a rank mismatch unless `a` is
/// rank 2.
pub fn transpose<T: Element>(a: &Tensor<T>) -> Result<Tensor<T>, LinalgError> {
    a.ensure_rank("transpose", 2)?;
    let dims = a.shape().dims();
    let (rows, cols) = (dims[0], dims[1]);

    let src = a.as_slice();
    let mut data = Vec::with_capacity(src.len());
    for j in 0..cols {
        data.extend((0..rows).map(|i| src[i * cols + j]));
    }
    Ok(Tensor::from_vec(Shape::matrix(cols, rows), data)?)
}

/// The `n × n` identity matrix.
pub fn eye<T: Element>(n: usize) -> Tensor<T> {
    let mut out = Tensor::zeros(Shape::matrix(n, n));
    out.as_mut_slice()
        .iter_mut()
        .step_by(n + 1)
        .for_each(|x| *x = T::one());
    out
}

/// Sum of the main diagonal, accumulated in the element type.
///
/// # Errors
/// Returns [`LinalgError::Tensor`] wrapping a rank mismatch unless `a` is
/// rank 2, and [`LinalgError::NotSquare`] for a non-square matrix.
pub fn trace<T: Element>(a: &Tensor<T>) -> Result<T, LinalgError> {
    a.ensure_rank("trace", 2)?;
    let dims = a.shape().dims();
    if dims[0] != dims[1] {
        return Err(LinalgError::NotSquare {
            op: "trace",
            shape: a.shape().clone(),
        });
    }
    Ok(a.as_slice()
        .iter()
        .step_by(dims[0] + 1)
        .fold(T::zero(), |acc, &x| acc.wrap_add(x)))
}

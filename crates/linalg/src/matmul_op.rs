// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication.

use tensor_core::{Element, Shape, Tensor};

use crate::LinalgError;

/// Validates operands and returns `(m, k, n)` for `[m, k] @ [k, n]`.
fn matmul_dims<T: Element>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<(usize, usize, usize), LinalgError> {
    lhs.ensure_rank("matmul", 2)?;
    rhs.ensure_rank("matmul", 2)?;
    let dims = lhs.shape().as_matrix().zip(rhs.shape().as_matrix());
    match dims {
        Some(((m, k), (k2, n))) if k == k2 => Ok((m, k, n)),
        _ => Err(LinalgError::InnerDimMismatch {
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        }),
    }
}

/// Computes `lhs @ rhs` into a freshly allocated `[m, n]` tensor.
///
/// # Errors
/// Returns [`LinalgError::Tensor`] wrapping a rank mismatch unless both
/// operands are rank 2, and [`LinalgError::InnerDimMismatch`] if
/// `lhs.cols != rhs.rows`.
///
/// # Examples
/// ```
/// use tensor_core::Tensor;
/// let a = Tensor::<f64>::ones([2, 3]);
/// let b = Tensor::<f64>::ones([3, 4]);
/// let c = linalg::matmul(&a, &b).unwrap();
/// assert_eq!(c.shape().dims(), &[2, 4]);
/// assert!(c.iter().all(|&x| x == 3.0));
/// ```
pub fn matmul<T: Element>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, LinalgError> {
    let (m, _, n) = matmul_dims(lhs, rhs)?;
    let mut output = Tensor::zeros(Shape::matrix(m, n));
    matmul_into(lhs, rhs, &mut output)?;
    Ok(output)
}

/// Computes `lhs @ rhs` into a caller-provided `[m, n]` buffer.
///
/// `output` is overwritten; its previous contents do not matter.
///
/// # Errors
/// As [`matmul`], plus [`LinalgError::OutputShapeMismatch`] if `output` is
/// not `[m, n]`.
pub fn matmul_into<T: Element>(
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
    output: &mut Tensor<T>,
) -> Result<(), LinalgError> {
    let (m, k, n) = matmul_dims(lhs, rhs)?;

    let expected = Shape::matrix(m, n);
    if output.shape() != &expected {
        return Err(LinalgError::OutputShapeMismatch {
            expected,
            actual: output.shape().clone(),
        });
    }

    tracing::debug!(m, k, n, dtype = T::DTYPE.as_str(), "matmul");
    matmul_ikj(lhs.as_slice(), rhs.as_slice(), output.as_mut_slice(), k, n);
    Ok(())
}

/// ikj loop order: `a[i][p]` is held while the inner loop streams a row of
/// `b` into a row of `c`, so both inner accesses are sequential in memory.
fn matmul_ikj<T: Element>(a: &[T], b: &[T], c: &mut [T], k: usize, n: usize) {
    c.iter_mut().for_each(|x| *x = T::zero());
    if n == 0 {
        return;
    }

    for (a_row, c_row) in a.chunks_exact(k.max(1)).zip(c.chunks_exact_mut(n)) {
        for p in 0..k {
            let a_ip = a_row[p];
            let b_row = &b[p * n..(p + 1) * n];
            for (c_ij, &b_pj) in c_row.iter_mut().zip(b_row) {
                *c_ij = c_ij.wrap_add(a_ip.wrap_mul(b_pj));
            }
        }
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for linear-algebra operations.

use tensor_core::{Shape, TensorError};

/// Errors that can occur during linear-algebra operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinalgError {
    /// A rank or other structural check from the tensor layer failed.
    #[error(transparent)]
    Tensor(#[from] TensorError),

    /// `lhs.cols != rhs.rows` for a matrix product.
    #[error("matmul inner dimensions differ: {lhs} @ {rhs}")]
    InnerDimMismatch { lhs: Shape, rhs: Shape },

    /// The output buffer of [`crate::matmul_into`] has the wrong shape.
    #[error("matmul output must be {expected}, got {actual}")]
    OutputShapeMismatch { expected: Shape, actual: Shape },

    /// The operation is only defined for square matrices.
    #[error("{op} requires a square matrix, got {shape}")]
    NotSquare { op: &'static str, shape: Shape },

    /// The norm selector is not one of `frob`, `fro`, `1`, `inf`.
    #[error("unsupported norm kind '{0}' (expected frob, 1 or inf)")]
    UnsupportedNormKind(String),
}

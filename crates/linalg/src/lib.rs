// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # linalg
//!
//! Dense linear algebra on rank-2 [`tensor_core::Tensor`]s.
//!
//! - [`matmul`] / [`matmul_into`]: row-major matrix product with an
//!   `i → k → j` loop order.
//! - [`transpose`], [`eye`], [`trace`].
//! - [`matrix_norm`]: Frobenius, 1- and infinity-norms, accumulated in `f64`.
//!
//! Every operation validates rank and dimensions up front and reports
//! failures as [`LinalgError`].

mod error;
mod matmul_op;
mod matrix;
mod norm;

pub use error::LinalgError;
pub use matmul_op::{matmul, matmul_into};
pub use matrix::{eye, trace, transpose};
pub use norm::{matrix_norm, matrix_norm_with, NormKind};

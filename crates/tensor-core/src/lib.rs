// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! Dense, row-major n-dimensional tensors generic over their element type.
//!
//! This crate provides:
//! - [`Tensor`]: an owned, contiguous tensor of any [`Element`] type.
//! - [`Shape`]: the extents of each axis, with row-major stride derivation.
//! - [`TensorView`] / [`TensorViewMut`]: borrowed cursors for progressive
//!   indexing (`t.view().index(1)?.index(2)?.get()?`) and sub-region writes.
//! - [`DType`]: the runtime label of the supported element types.
//! - Elementwise, scalar and reduction arithmetic, plus [`dot`].
//! - Nested-bracket text rendering through [`std::fmt::Display`].
//!
//! Large elementwise kernels fan out over the rayon pool once a buffer
//! crosses [`kernel::PARALLEL_THRESHOLD`] elements.

mod dtype;
mod error;
mod format;
pub mod kernel;
mod ops;
mod shape;
mod tensor;
mod view;

pub use dtype::{DType, Element, FloatElement};
pub use error::TensorError;
pub use format::{render, render_into};
pub use ops::dot;
pub use shape::Shape;
pub use tensor::Tensor;
pub use view::{TensorView, TensorViewMut};

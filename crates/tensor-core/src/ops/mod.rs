// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor arithmetic operations.
//!
//! Pure operations allocate and return a new tensor and leave their operands
//! untouched. In-place variants carry a trailing underscore (`add_`,
//! `mul_scalar_`) and validate every precondition before writing, so a failed
//! call never leaves a half-updated tensor behind.

mod elementwise;
mod reduce;
mod scalar;

pub use reduce::dot;

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Trigonometric and hyperbolic functions.
//!
//! Inputs are in radians. Inverse hyperbolics outside their domain
//! (`acosh(x < 1)`, `atanh(|x| > 1)`) yield NaN; `atanh(±1)` is ±∞.

use num_traits::Float;
use tensor_core::{Element, Tensor};

use crate::apply_unary_float;

pub fn sin<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::sin)
}

pub fn cos<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::cos)
}

pub fn tan<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::tan)
}

pub fn sinh<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::sinh)
}

pub fn cosh<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::cosh)
}

pub fn tanh<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::tanh)
}

pub fn asinh<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::asinh)
}

pub fn acosh<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::acosh)
}

pub fn atanh<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::atanh)
}

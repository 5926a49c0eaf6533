// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor ⊕ scalar arithmetic.
//!
//! `tensor ⊕ s` applies the operator to every element. The commuted forms are
//! explicit: `radd_scalar`/`rmul_scalar` delegate to their commutative
//! counterparts, while `rsub_scalar` computes `s - x` and `rdiv_scalar`
//! computes `s / x` per element.
//!
//! Operator sugar is implemented on `&Tensor<T>` (`&t * 2.0`), on `Tensor<T>`
//! for the compound forms (`t *= 2.0`), and for `scalar ⊕ &Tensor<scalar>`
//! on every concrete element type (`10.0 - &t`).

use crate::kernel;
use crate::{Element, Tensor};

impl<T: Element> Tensor<T> {
    /// `x + s` for every element.
    pub fn add_scalar(&self, s: T) -> Tensor<T> {
        self.map(|x| x.wrap_add(s))
    }

    /// `x - s` for every element.
    pub fn sub_scalar(&self, s: T) -> Tensor<T> {
        self.map(|x| x.wrap_sub(s))
    }

    /// `x * s` for every element.
    pub fn mul_scalar(&self, s: T) -> Tensor<T> {
        self.map(|x| x.wrap_mul(s))
    }

    /// `x / s` for every element.
    pub fn div_scalar(&self, s: T) -> Tensor<T> {
        self.map(|x| x.wrap_div(s))
    }

    /// `s + x` for every element.
    pub fn radd_scalar(&self, s: T) -> Tensor<T> {
        self.add_scalar(s)
    }

    /// `s * x` for every element.
    pub fn rmul_scalar(&self, s: T) -> Tensor<T> {
        self.mul_scalar(s)
    }

    /// `s - x` for every element.
    pub fn rsub_scalar(&self, s: T) -> Tensor<T> {
        self.map(|x| s.wrap_sub(x))
    }

    /// `s / x` for every element.
    pub fn rdiv_scalar(&self, s: T) -> Tensor<T> {
        self.map(|x| s.wrap_div(x))
    }

    /// In-place `x += s`.
    pub fn add_scalar_(&mut self, s: T) -> &mut Self {
        kernel::apply(self.as_mut_slice(), |x| *x = x.wrap_add(s));
        self
    }

    /// In-place `x -= s`.
    pub fn sub_scalar_(&mut self, s: T) -> &mut Self {
        kernel::apply(self.as_mut_slice(), |x| *x = x.wrap_sub(s));
        self
    }

    /// In-place `x *= s`.
    pub fn mul_scalar_(&mut self, s: T) -> &mut Self {
        kernel::apply(self.as_mut_slice(), |x| *x = x.wrap_mul(s));
        self
    }

    /// In-place `x /= s`.
    pub fn div_scalar_(&mut self, s: T) -> &mut Self {
        kernel::apply(self.as_mut_slice(), |x| *x = x.wrap_div(s));
        self
    }
}

macro_rules! impl_scalar_operator {
    ($trait:ident, $method:ident, $named:ident, $assign_trait:ident, $assign_method:ident, $in_place:ident) => {
        impl<T: Element> std::ops::$trait<T> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, s: T) -> Tensor<T> {
                self.$named(s)
            }
        }

        impl<T: Element> std::ops::$assign_trait<T> for Tensor<T> {
            fn $assign_method(&mut self, s: T) {
                self.$in_place(s);
            }
        }
    };
}

impl_scalar_operator!(Add, add, add_scalar, AddAssign, add_assign, add_scalar_);
impl_scalar_operator!(Sub, sub, sub_scalar, SubAssign, sub_assign, sub_scalar_);
impl_scalar_operator!(Mul, mul, mul_scalar, MulAssign, mul_assign, mul_scalar_);
impl_scalar_operator!(Div, div, div_scalar, DivAssign, div_assign, div_scalar_);

macro_rules! impl_commuted_scalar_operators {
    ($($t:ty),*) => {
        $(
            impl std::ops::Add<&Tensor<$t>> for $t {
                type Output = Tensor<$t>;

                fn add(self, t: &Tensor<$t>) -> Tensor<$t> {
                    t.radd_scalar(self)
                }
            }

            impl std::ops::Sub<&Tensor<$t>> for $t {
                type Output = Tensor<$t>;

                fn sub(self, t: &Tensor<$t>) -> Tensor<$t> {
                    t.rsub_scalar(self)
                }
            }

            impl std::ops::Mul<&Tensor<$t>> for $t {
                type Output = Tensor<$t>;

                fn mul(self, t: &Tensor<$t>) -> Tensor<$t> {
                    t.rmul_scalar(self)
                }
            }

            impl std::ops::Div<&Tensor<$t>> for $t {
                type Output = Tensor<$t>;

                fn div(self, t: &Tensor<$t>) -> Tensor<$t> {
                    t.rdiv_scalar(self)
                }
            }
        )*
    };
}

impl_commuted_scalar_operators!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

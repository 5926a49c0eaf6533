// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Supported tensor element data types.
//!
//! [`Element`] is the compile-time capability every tensor element type
//! implements; [`DType`] is its runtime label. Each element type also names
//! the float type it promotes to ([`Element::Float`]) when fed through a
//! floating-point map.

use std::fmt;

use num_traits::{Num, NumAssignOps, NumCast};

/// Enumerates the numeric types a [`crate::Tensor`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DType {
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 32-bit IEEE 754 floating point.
    F32,
    /// 64-bit IEEE 754 floating point.
    F64,
}

impl DType {
    /// Returns the size of a single element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 => 2,
            DType::I32 | DType::U32 | DType::F32 => 4,
            DType::I64 | DType::U64 | DType::F64 => 8,
        }
    }

    /// Returns a human-readable label for this data type.
    pub fn as_str(self) -> &'static str {
        match self {
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::F32 => "f32",
            DType::F64 => "f64",
        }
    }

    /// Returns `true` for the floating-point types.
    pub fn is_float(self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric type that can be stored in a [`crate::Tensor`].
///
/// Arithmetic happens in the element type itself: integer tensors add,
/// multiply and accumulate as integers, float tensors as floats. Nothing is
/// widened implicitly. Kernels go through the `wrap_*` methods, so integer
/// overflow wraps modulo 2^bits in every build profile instead of panicking.
pub trait Element:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Num
    + NumAssignOps
    + NumCast
{
    /// Runtime label of this type.
    const DTYPE: DType;

    /// The floating-point type this element promotes to.
    type Float: FloatElement;

    /// Converts the value to its float promotion target.
    fn promote(self) -> Self::Float;

    /// Converts the value to `f64`, used for extended-precision accumulation.
    fn as_f64(self) -> f64;

    /// `self + rhs`, wrapping on integer overflow.
    fn wrap_add(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping on integer overflow.
    fn wrap_sub(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping on integer overflow.
    fn wrap_mul(self, rhs: Self) -> Self;

    /// `self / rhs`. `MIN / -1` wraps to `MIN`; integer division by zero
    /// still panics.
    fn wrap_div(self, rhs: Self) -> Self;
}

/// An element type that is itself floating point.
///
/// Float types promote to themselves.
pub trait FloatElement: Element<Float = Self> + num_traits::Float {
    /// Narrows (or passes through) an `f64` parameter into this type.
    fn from_f64(value: f64) -> Self;
}

macro_rules! element_arith {
    (int) => {
        #[inline(always)]
        fn wrap_add(self, rhs: Self) -> Self {
            self.wrapping_add(rhs)
        }

        #[inline(always)]
        fn wrap_sub(self, rhs: Self) -> Self {
            self.wrapping_sub(rhs)
        }

        #[inline(always)]
        fn wrap_mul(self, rhs: Self) -> Self {
            self.wrapping_mul(rhs)
        }

        #[inline(always)]
        fn wrap_div(self, rhs: Self) -> Self {
            self.wrapping_div(rhs)
        }
    };
    (float) => {
        #[inline(always)]
        fn wrap_add(self, rhs: Self) -> Self {
            self + rhs
        }

        #[inline(always)]
        fn wrap_sub(self, rhs: Self) -> Self {
            self - rhs
        }

        #[inline(always)]
        fn wrap_mul(self, rhs: Self) -> Self {
            self * rhs
        }

        #[inline(always)]
        fn wrap_div(self, rhs: Self) -> Self {
            self / rhs
        }
    };
}

macro_rules! impl_element {
    ($($t:ty => $dtype:ident, $float:ty, $kind:ident);* $(;)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$dtype;
                type Float = $float;

                #[inline(always)]
                fn promote(self) -> $float {
                    self as $float
                }

                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                element_arith!($kind);
            }
        )*
    };
}

impl_element! {
    i8 => I8, f32, int;
    i16 => I16, f32, int;
    i32 => I32, f32, int;
    i64 => I64, f64, int;
    u8 => U8, f32, int;
    u16 => U16, f32, int;
    u32 => U32, f32, int;
    u64 => U64, f64, int;
    f32 => F32, f32, float;
    f64 => F64, f64, float;
}

impl FloatElement for f32 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl FloatElement for f64 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }
}

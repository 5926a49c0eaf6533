// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix norms.
//!
//! All three norms accumulate in `f64` whatever the element type, so integer
//! matrices cannot overflow and `f32` matrices keep extra precision.

use std::fmt;
use std::str::FromStr;

use tensor_core::{Element, Tensor};

use crate::LinalgError;

/// Which matrix norm to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormKind {
    /// `sqrt(Σ a_ij²)`.
    Frobenius,
    /// Maximum absolute column sum.
    One,
    /// Maximum absolute row sum.
    Infinity,
}

impl NormKind {
    /// Canonical selector string.
    pub fn as_str(self) -> &'static str {
        match self {
            NormKind::Frobenius => "frob",
            NormKind::One => "1",
            NormKind::Infinity => "inf",
        }
    }
}

impl fmt::Display for NormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormKind {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frob" | "fro" => Ok(NormKind::Frobenius),
            "1" => Ok(NormKind::One),
            "inf" => Ok(NormKind::Infinity),
            other => Err(LinalgError::UnsupportedNormKind(other.to_string())),
        }
    }
}

/// Computes the norm selected by `kind` (`"frob"`/`"fro"`, `"1"`, `"inf"`).
///
/// # Errors
/// Returns [`LinalgError::UnsupportedNormKind`] for any other selector, and
/// [`LinalgError::Tensor`] wrapping a rank mismatch unless `a` is rank 2.
///
/// # Examples
/// ```
/// use tensor_core::Tensor;
/// let a = Tensor::from_vec([2, 2], vec![3, 4, 0, 0]).unwrap();
/// assert_eq!(linalg::matrix_norm(&a, "frob").unwrap(), 5.0);
/// ```
pub fn matrix_norm<T: Element>(a: &Tensor<T>, kind: &str) -> Result<f64, LinalgError> {
    matrix_norm_with(a, kind.parse()?)
}

/// Typed form of [`matrix_norm`].
///
/// # Errors
/// Returns [`LinalgError::Tensor`] wrapping a rank mismatch unless `a` is
/// rank 2.
pub fn matrix_norm_with<T: Element>(a: &Tensor<T>, kind: NormKind) -> Result<f64, LinalgError> {
    a.ensure_rank("matrix_norm", 2)?;
    let cols = a.shape().dims()[1];
    let data = a.as_slice();

    let norm = match kind {
        NormKind::Frobenius => data
            .iter()
            .map(|&x| {
                let v = x.as_f64();
                v * v
            })
            .sum::<f64>()
            .sqrt(),
        NormKind::One => {
            let mut col_sums = vec![0.0f64; cols];
            for row in data.chunks_exact(cols.max(1)) {
                for (sum, &x) in col_sums.iter_mut().zip(row) {
                    *sum += x.as_f64().abs();
                }
            }
            col_sums.into_iter().fold(0.0, f64::max)
        }
        NormKind::Infinity => data
            .chunks_exact(cols.max(1))
            .map(|row| row.iter().map(|&x| x.as_f64().abs()).sum::<f64>())
            .fold(0.0, f64::max),
    };
    tracing::trace!(kind = kind.as_str(), norm, "matrix_norm");
    Ok(norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tensor<i32> {
        Tensor::from_vec([2, 2], vec![3, 4, 0, 0]).unwrap()
    }

    #[test]
    fn test_norm_values() {
        let a = sample();
        assert_eq!(matrix_norm(&a, "frob").unwrap(), 5.0);
        assert_eq!(matrix_norm(&a, "fro").unwrap(), 5.0);
        assert_eq!(matrix_norm(&a, "1").unwrap(), 4.0);
        assert_eq!(matrix_norm(&a, "inf").unwrap(), 7.0);
    }

    #[test]
    fn test_negative_entries_use_absolute_values() {
        let a = Tensor::from_vec([2, 2], vec![-1.0f32, 2.0, -3.0, -4.0]).unwrap();
        assert_eq!(matrix_norm_with(&a, NormKind::One).unwrap(), 6.0);
        assert_eq!(matrix_norm_with(&a, NormKind::Infinity).unwrap(), 7.0);
    }

    #[test]
    fn test_frobenius_does_not_overflow_narrow_ints() {
        let a = Tensor::full([2, 2], 200u8);
        assert_eq!(matrix_norm_with(&a, NormKind::Frobenius).unwrap(), 400.0);
    }

    #[test]
    fn test_unknown_kind() {
        let err = matrix_norm(&sample(), "2").unwrap_err();
        assert_eq!(err, LinalgError::UnsupportedNormKind("2".to_string()));
    }

    #[test]
    fn test_rank_check() {
        let v = Tensor::<f64>::ones([4]);
        assert!(matches!(matrix_norm(&v, "frob"), Err(LinalgError::Tensor(_))));
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!("fro".parse::<NormKind>().unwrap(), NormKind::Frobenius);
        assert_eq!(NormKind::Infinity.to_string(), "inf");
    }

    #[test]
    fn test_empty_matrix_norms_are_zero() {
        let a = Tensor::<f64>::zeros([0, 3]);
        assert_eq!(matrix_norm(&a, "1").unwrap(), 0.0);
        assert_eq!(matrix_norm(&a, "inf").unwrap(), 0.0);
        assert_eq!(matrix_norm(&a, "frob").unwrap(), 0.0);
    }
}

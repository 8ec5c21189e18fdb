//! Dense square matrices stored in row-major order.
//!
//! This is the reference implementation every compressed kernel is checked
//! against, and the full-form boundary through which compressed matrices are
//! generated and expanded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, ensure_same_dim, SymtrxError};
use crate::rng::RandomSource;

/// Dense `n×n` matrix of doubles, row-major.
///
/// Deserialization goes through [`DenseMatrix::from_vec`], so a decoded
/// matrix always has a positive dimension and `n²` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDense")]
pub struct DenseMatrix {
    dim: usize,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawDense {
    dim: usize,
    data: Vec<f64>,
}

impl TryFrom<RawDense> for DenseMatrix {
    type Error = SymtrxError;

    fn try_from(raw: RawDense) -> Result<Self, Self::Error> {
        DenseMatrix::from_vec(raw.dim, raw.data)
    }
}

/// Row-major offset of `(i, j)` in an `n×n` buffer.
#[inline]
pub fn dense_index(i: usize, j: usize, n: usize) -> usize {
    i * n + j
}

impl DenseMatrix {
    /// Allocates a zero-filled `n×n` matrix.
    pub fn zeros(dim: usize) -> Result<Self, SymtrxError> {
        ensure_positive(dim)?;
        Ok(Self {
            dim,
            data: vec![0.0; dim * dim],
        })
    }

    /// Wraps an existing row-major buffer of length `n²`.
    pub fn from_vec(dim: usize, data: Vec<f64>) -> Result<Self, SymtrxError> {
        ensure_positive(dim)?;
        if data.len() != dim * dim {
            return Err(SymtrxError::length_mismatch(
                "dense buffer",
                dim * dim,
                data.len(),
            ));
        }
        Ok(Self { dim, data })
    }

    /// Fills every cell with an independent draw from `rng`.
    pub fn random<R: RandomSource + ?Sized>(dim: usize, rng: &mut R) -> Result<Self, SymtrxError> {
        let mut matrix = Self::zeros(dim)?;
        for value in matrix.data.iter_mut() {
            *value = rng.next_f64();
        }
        Ok(matrix)
    }

    /// Returns the dimension `n`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the row-major backing buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row-major offset of `(i, j)` in this matrix.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        dense_index(i, j, self.dim)
    }

    /// Reads the entry at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.index(i, j)]
    }

    /// Writes the entry at `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        self.data[idx] = value;
    }

    /// Mirrors the upper triangle onto the lower one.
    pub fn symmetrize(&mut self) {
        let n = self.dim;
        for i in 0..n {
            for j in i + 1..n {
                self.data[dense_index(j, i, n)] = self.data[dense_index(i, j, n)];
            }
        }
    }

    /// Computes `self · other` with the textbook triple loop.
    pub fn product(&self, other: &DenseMatrix) -> Result<DenseMatrix, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let n = self.dim;
        let mut out = DenseMatrix::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                let mut acc = 0.0;
                for k in 0..n {
                    acc += self.data[dense_index(i, k, n)] * other.data[dense_index(k, j, n)];
                }
                out.data[dense_index(i, j, n)] = acc;
            }
        }
        Ok(out)
    }

    /// Computes `self · x` for a column vector `x`.
    pub fn mat_vec(&self, x: &[f64]) -> Result<Vec<f64>, SymtrxError> {
        if x.len() != self.dim {
            return Err(SymtrxError::length_mismatch("vector", self.dim, x.len()));
        }
        Ok(self
            .data
            .chunks_exact(self.dim)
            .map(|row| row.iter().zip(x).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> f64 {
        let mut res = 0.0;
        for i in 0..self.dim {
            res += self.get(i, i);
        }
        res
    }

    /// Computes `trace(self · other)` without forming the product.
    pub fn trace_product(&self, other: &DenseMatrix) -> Result<f64, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let n = self.dim;
        let mut res = 0.0;
        for i in 0..n {
            for j in 0..n {
                res += self.data[dense_index(i, j, n)] * other.data[dense_index(j, i, n)];
            }
        }
        Ok(res)
    }

    /// Computes the quadratic form `xᵀ · self · y`.
    pub fn quad_form(&self, x: &[f64], y: &[f64]) -> Result<f64, SymtrxError> {
        check_vectors(self.dim, x, y)?;
        let n = self.dim;
        let mut res = 0.0;
        for i in 0..n {
            for j in 0..n {
                res += x[i] * y[j] * self.data[dense_index(i, j, n)];
            }
        }
        Ok(res)
    }
}

/// Checks that both vectors of a quadratic form have length `dim`.
pub fn check_vectors(dim: usize, x: &[f64], y: &[f64]) -> Result<(), SymtrxError> {
    if x.len() != dim {
        return Err(SymtrxError::length_mismatch("x", dim, x.len()));
    }
    if y.len() != dim {
        return Err(SymtrxError::length_mismatch("y", dim, y.len()));
    }
    Ok(())
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.dim) {
            for value in row {
                write!(f, " {value:.3e} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

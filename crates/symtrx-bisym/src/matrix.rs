use std::fmt;

use symtrx_core::errors::{ensure_positive, ensure_same_dim, SymtrxError};
use symtrx_core::tolerance::{within, STRUCTURAL_TOLERANCE};
use symtrx_core::{DenseMatrix, RandomSource};

use crate::layout::{bisym_offset, bisym_size, canonical, row_bound};

/// Bisymmetric matrix kept as the left wedge `j <= min(i, n-1-i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BisymmetricMatrix {
    pub(crate) dim: usize,
    pub(crate) data: Vec<f64>,
}

impl BisymmetricMatrix {
    /// Allocates a zero-filled compressed matrix of dimension `n`.
    pub fn zeros(dim: usize) -> Result<Self, SymtrxError> {
        ensure_positive(dim)?;
        Ok(Self {
            dim,
            data: vec![0.0; bisym_size(dim)],
        })
    }

    /// Wraps a compressed buffer in row order.
    pub fn from_compressed(dim: usize, data: Vec<f64>) -> Result<Self, SymtrxError> {
        ensure_positive(dim)?;
        if data.len() != bisym_size(dim) {
            return Err(SymtrxError::length_mismatch(
                "bisymmetric buffer",
                bisym_size(dim),
                data.len(),
            ));
        }
        Ok(Self { dim, data })
    }

    /// Copies the stored wedge out of a full matrix.
    pub fn from_full(full: &DenseMatrix) -> Self {
        let n = full.dim();
        let mut data = vec![0.0; bisym_size(n)];
        for i in 0..n {
            for j in 0..=row_bound(i, n) {
                data[bisym_offset(i, j, n)] = full.get(i, j);
            }
        }
        Self { dim: n, data }
    }

    /// Dimension `n` of the represented matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Compressed buffer in row order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Reads a stored cell. Requires `j <= min(i, n-1-i)`.
    #[inline]
    pub fn stored(&self, i: usize, j: usize) -> f64 {
        self.data[bisym_offset(i, j, self.dim)]
    }

    /// Writes a stored cell, which stands for its whole orbit.
    #[inline]
    pub fn set_stored(&mut self, i: usize, j: usize, value: f64) {
        let offset = bisym_offset(i, j, self.dim);
        self.data[offset] = value;
    }

    /// Reads any cell through its stored representative.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let (r, c) = canonical(i, j, self.dim);
        self.stored(r, c)
    }

    /// Expands back to the full `n×n` form.
    pub fn to_full(&self) -> Result<DenseMatrix, SymtrxError> {
        let n = self.dim;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(self.get(i, j));
            }
        }
        DenseMatrix::from_vec(n, data)
    }

    /// Counts stored cells differing by more than the structural tolerance.
    pub fn mismatches(&self, other: &Self) -> Result<usize, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .filter(|(a, b)| !within(**a, **b, STRUCTURAL_TOLERANCE))
            .count())
    }

    /// Whether both matrices agree on every stored cell.
    pub fn approx_eq(&self, other: &Self) -> bool {
        matches!(self.mismatches(other), Ok(0))
    }

    /// Full-to-compressed storage ratio.
    pub fn storage_gain(&self) -> f64 {
        storage_gain(self.dim)
    }
}

/// Full-to-compressed storage ratio for dimension `n`, close to 4.
pub fn storage_gain(n: usize) -> f64 {
    (n * n) as f64 / bisym_size(n) as f64
}

/// Draws a random bisymmetric matrix in full form.
///
/// One value per stored cell, written to all four images of the cell.
pub fn random_full<R: RandomSource + ?Sized>(
    dim: usize,
    rng: &mut R,
) -> Result<DenseMatrix, SymtrxError> {
    let mut full = DenseMatrix::zeros(dim)?;
    let n = dim;
    for i in 0..n {
        for j in 0..=row_bound(i, n) {
            let value = rng.next_f64();
            full.set(i, j, value);
            full.set(n - 1 - i, n - 1 - j, value);
            full.set(j, i, value);
            full.set(n - 1 - j, n - 1 - i, value);
        }
    }
    Ok(full)
}

/// Whether a full matrix is symmetric, centrosymmetric and persymmetric.
pub fn is_valid(full: &DenseMatrix) -> bool {
    let n = full.dim();
    for i in 0..n {
        for j in 0..n {
            let value = full.get(i, j);
            if !within(value, full.get(n - 1 - i, n - 1 - j), STRUCTURAL_TOLERANCE)
                || !within(value, full.get(j, i), STRUCTURAL_TOLERANCE)
                || !within(value, full.get(n - 1 - j, n - 1 - i), STRUCTURAL_TOLERANCE)
            {
                return false;
            }
        }
    }
    true
}

impl fmt::Display for BisymmetricMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dim {
            for j in 0..=row_bound(i, self.dim) {
                write!(f, " {:.3e} ", self.stored(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

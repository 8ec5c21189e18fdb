use std::fmt;
use std::marker::PhantomData;

use symtrx_core::errors::{ensure_positive, ensure_same_dim, SymtrxError};
use symtrx_core::tolerance::{within, STRUCTURAL_TOLERANCE};
use symtrx_core::{DenseMatrix, RandomSource};

use crate::scheme::{storage_len, IndexScheme, RowMajor};

/// Centrosymmetric matrix kept as its lower triangle.
///
/// Cell `(i, j)` with `j > i` is never stored: it equals the stored cell
/// `(n-1-i, n-1-j)`, whose column never exceeds its row.
#[derive(Debug, Clone, PartialEq)]
pub struct CentrosymmetricMatrix<S: IndexScheme = RowMajor> {
    pub(crate) dim: usize,
    pub(crate) data: Vec<f64>,
    _scheme: PhantomData<S>,
}

impl<S: IndexScheme> CentrosymmetricMatrix<S> {
    /// Allocates a zero-filled compressed matrix of dimension `n`.
    pub fn zeros(dim: usize) -> Result<Self, SymtrxError> {
        ensure_positive(dim)?;
        Ok(Self {
            dim,
            data: vec![0.0; storage_len(dim)],
            _scheme: PhantomData,
        })
    }

    /// Wraps a compressed buffer laid out according to `S`.
    pub fn from_compressed(dim: usize, data: Vec<f64>) -> Result<Self, SymtrxError> {
        ensure_positive(dim)?;
        if data.len() != storage_len(dim) {
            return Err(SymtrxError::length_mismatch(
                "centrosymmetric buffer",
                storage_len(dim),
                data.len(),
            ));
        }
        Ok(Self {
            dim,
            data,
            _scheme: PhantomData,
        })
    }

    /// Copies the stored triangle out of a full matrix.
    ///
    /// Only `j <= i` is read; the full matrix is assumed centrosymmetric.
    pub fn from_full(full: &DenseMatrix) -> Self {
        let n = full.dim();
        let mut data = vec![0.0; storage_len(n)];
        for i in 0..n {
            for j in 0..=i {
                data[S::offset(i, j, n)] = full.get(i, j);
            }
        }
        Self {
            dim: n,
            data,
            _scheme: PhantomData,
        }
    }

    /// Dimension `n` of the represented matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Compressed buffer in `S` order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Reads a stored cell. Requires `j <= i`.
    #[inline]
    pub fn stored(&self, i: usize, j: usize) -> f64 {
        self.data[S::offset(i, j, self.dim)]
    }

    /// Writes a stored cell. Requires `j <= i`.
    ///
    /// Diagonal cells `(i, i)` and `(n-1-i, n-1-i)` are both stored; callers
    /// keeping the matrix centrosymmetric must write both.
    #[inline]
    pub fn set_stored(&mut self, i: usize, j: usize, value: f64) {
        let offset = S::offset(i, j, self.dim);
        self.data[offset] = value;
    }

    /// Reads any cell of the represented matrix.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let n = self.dim;
        if j <= i {
            self.data[S::offset(i, j, n)]
        } else {
            self.data[S::offset(n - 1 - i, n - 1 - j, n)]
        }
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

    /// Re-lays the same matrix out under another index scheme.
    pub fn convert<T: IndexScheme>(&self) -> CentrosymmetricMatrix<T> {
        let n = self.dim;
        let mut data = vec![0.0; storage_len(n)];
        for i in 0..n {
            for j in 0..=i {
                data[T::offset(i, j, n)] = self.stored(i, j);
            }
        }
        CentrosymmetricMatrix {
            dim: n,
            data,
            _scheme: PhantomData,
        }
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

    /// Full-to-compressed storage ratio, `n² / (n(n+1)/2)`.
    pub fn storage_gain(&self) -> f64 {
        storage_gain(self.dim)
    }
}

/// Full-to-compressed storage ratio for dimension `n`.
pub fn storage_gain(n: usize) -> f64 {
    (n * n) as f64 / storage_len(n) as f64
}

/// Draws a random centrosymmetric matrix in full form.
///
/// One value per stored cell, written to the cell and to its 180° image.
pub fn random_full<R: RandomSource + ?Sized>(
    dim: usize,
    rng: &mut R,
) -> Result<DenseMatrix, SymtrxError> {
    let mut full = DenseMatrix::zeros(dim)?;
    let n = dim;
    for i in 0..n {
        for j in 0..=i {
            let value = rng.next_f64();
            full.set(i, j, value);
            full.set(n - 1 - i, n - 1 - j, value);
        }
    }
    Ok(full)
}

/// Whether a full matrix satisfies `M[i][j] == M[n-1-i][n-1-j]` everywhere.
pub fn is_valid(full: &DenseMatrix) -> bool {
    let n = full.dim();
    for i in 0..n {
        for j in 0..n {
            if !within(full.get(i, j), full.get(n - 1 - i, n - 1 - j), STRUCTURAL_TOLERANCE) {
                return false;
            }
        }
    }
    true
}

impl<S: IndexScheme> fmt::Display for CentrosymmetricMatrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dim {
            for j in 0..=i {
                write!(f, " {:.3e} ", self.stored(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Arithmetic on compressed bisymmetric matrices.
//!
//! The product fills only the stored wedge of the result, each entry a full
//! sum over `k`. Operand cells outside the stored wedge are read through
//! [`canonical`](crate::layout::canonical). The product, trace,
//! trace-of-product and quadratic form visit cells in the same order as the
//! dense loops, so they agree with the dense oracle to the last bit at any
//! dimension.

use symtrx_centro::{CentrosymmetricMatrix, IndexScheme, RowMajor};
use symtrx_core::dense::check_vectors;
use symtrx_core::errors::{ensure_same_dim, SymtrxError};

use crate::layout::{orbit_size, row_bound};
use crate::matrix::BisymmetricMatrix;

impl BisymmetricMatrix {
    /// Computes the stored wedge of `self · other`.
    ///
    /// Only cells `j <= min(i, n-1-i)` of the result are produced, but each
    /// one is the complete sum `Σ_k A[i][k]·B[k][j]` over all `n` values of
    /// `k`; summing over the wedge alone would drop most terms. The output
    /// equals extraction of the dense product on every stored cell.
    ///
    /// The product of two bisymmetric matrices is centrosymmetric but is
    /// symmetric only when the operands commute. When they do not, the
    /// returned wedge does not describe the full product; use
    /// [`product_centrosymmetric`](Self::product_centrosymmetric) for that.
    pub fn product(&self, other: &Self) -> Result<Self, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let n = self.dim;
        let widest = (n - 1) / 2 + 1;

        // Columns of B touched by the wedge, expanded once: column j lives at
        // columns[j * n..(j + 1) * n].
        let mut columns = Vec::with_capacity(widest * n);
        for j in 0..widest {
            columns.extend((0..n).map(|k| other.get(k, j)));
        }

        let mut out = Self::zeros(n)?;
        let mut row = vec![0.0; n];
        for i in 0..n {
            for (k, slot) in row.iter_mut().enumerate() {
                *slot = self.get(i, k);
            }
            for j in 0..=row_bound(i, n) {
                let column = &columns[j * n..(j + 1) * n];
                let acc = row
                    .iter()
                    .zip(column)
                    .fold(0.0, |acc, (a, b)| acc + a * b);
                out.set_stored(i, j, acc);
            }
        }
        Ok(out)
    }

    /// Re-stores the matrix as a centrosymmetric triangle.
    pub fn to_centrosymmetric<S: IndexScheme>(
        &self,
    ) -> Result<CentrosymmetricMatrix<S>, SymtrxError> {
        let n = self.dim;
        let mut out = CentrosymmetricMatrix::<S>::zeros(n)?;
        for i in 0..n {
            for j in 0..=i {
                out.set_stored(i, j, self.get(i, j));
            }
        }
        Ok(out)
    }

    /// Computes the full product `self · other` as a centrosymmetric matrix.
    pub fn product_centrosymmetric(
        &self,
        other: &Self,
    ) -> Result<CentrosymmetricMatrix<RowMajor>, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let a = self.to_centrosymmetric::<RowMajor>()?;
        let b = other.to_centrosymmetric::<RowMajor>()?;
        a.product(&b)
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
    ///
    /// Accumulates `Σ_i Σ_j A[i][j]·B[j][i]` in dense order through reflected
    /// reads.
    pub fn trace_product(&self, other: &Self) -> Result<f64, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let n = self.dim;
        let mut res = 0.0;
        for i in 0..n {
            for j in 0..n {
                res += self.get(i, j) * other.get(j, i);
            }
        }
        Ok(res)
    }

    /// Orbit-weighted `trace(self · other)` over the stored wedges only.
    ///
    /// With `B` symmetric, `trace(AB) = Σ A[i][j]·B[i][j]`; both factors are
    /// constant on each orbit, so every stored pair is weighted by its orbit
    /// size. About four times fewer terms than
    /// [`trace_product`](Self::trace_product), but summed in a different
    /// order, so rounding drifts from the dense value as `n` grows.
    pub fn trace_product_weighted(&self, other: &Self) -> Result<f64, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let n = self.dim;
        let mut res = 0.0;
        for i in 0..n {
            for j in 0..=row_bound(i, n) {
                res += orbit_size(i, j, n) as f64 * self.stored(i, j) * other.stored(i, j);
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
                res += x[i] * y[j] * self.get(i, j);
            }
        }
        Ok(res)
    }
}

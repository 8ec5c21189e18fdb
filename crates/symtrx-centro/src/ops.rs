//! Arithmetic on compressed centrosymmetric matrices.
//!
//! Every routine reads only stored cells. Whenever a term needs a cell above
//! the diagonal, `(r, c)` with `c > r`, it reads the stored cell
//! `(n-1-r, n-1-c)` instead. Terms are accumulated in the same order as the
//! dense triple loop, so results agree with the dense oracle to the last bit
//! for the product, trace and trace-of-product.

use symtrx_core::dense::check_vectors;
use symtrx_core::errors::{ensure_same_dim, SymtrxError};

use crate::matrix::CentrosymmetricMatrix;
use crate::scheme::IndexScheme;

impl<S: IndexScheme> CentrosymmetricMatrix<S> {
    /// Computes `self · other` in compressed form.
    ///
    /// For output row `i` the sum over `k` splits at the diagonal of `self`:
    /// for `k <= i` the factor `A(i,k)` is stored, for `k > i` it is read
    /// through `A(n-1-i, n-1-k)`. Within the first half, `B(k,j)` is stored
    /// when `j <= k` and is read through `B(n-1-k, n-1-j)` otherwise; in the
    /// second half `j <= i < k`, so `B(k,j)` is always stored.
    pub fn product(&self, other: &Self) -> Result<Self, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let n = self.dim;
        let a = &self.data;
        let b = &other.data;
        let mut out = Self::zeros(n)?;
        let c = &mut out.data;

        for i in 0..n {
            for k in 0..=i {
                let a_ik = a[S::offset(i, k, n)];
                for j in 0..=k {
                    c[S::offset(i, j, n)] += a_ik * b[S::offset(k, j, n)];
                }
                for j in k + 1..=i {
                    c[S::offset(i, j, n)] += a_ik * b[S::offset(n - 1 - k, n - 1 - j, n)];
                }
            }
            for k in i + 1..n {
                let a_ik = a[S::offset(n - 1 - i, n - 1 - k, n)];
                for j in 0..=i {
                    c[S::offset(i, j, n)] += a_ik * b[S::offset(k, j, n)];
                }
            }
        }
        Ok(out)
    }

    /// Computes `self · other` cell by cell through reflected reads.
    ///
    /// Same result as [`product`](Self::product) with a branch per operand
    /// read; kept as the baseline the fast loop is benchmarked against.
    pub fn product_naive(&self, other: &Self) -> Result<Self, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let n = self.dim;
        let mut out = Self::zeros(n)?;
        for i in 0..n {
            for j in 0..=i {
                let mut acc = 0.0;
                for k in 0..n {
                    acc += self.get(i, k) * other.get(k, j);
                }
                out.set_stored(i, j, acc);
            }
        }
        Ok(out)
    }

    /// Sum of the diagonal, which is always stored.
    pub fn trace(&self) -> f64 {
        let mut res = 0.0;
        for i in 0..self.dim {
            res += self.stored(i, i);
        }
        res
    }

    /// Computes `trace(self · other)` without forming the product.
    ///
    /// Uses `trace(AB) = Σ A[i][j]·B[j][i]`. For `j <= i` the factor
    /// `B[j][i]` sits above the diagonal and is read as `B(n-1-j, n-1-i)`;
    /// for `j > i` the roles swap.
    pub fn trace_product(&self, other: &Self) -> Result<f64, SymtrxError> {
        ensure_same_dim(self.dim, other.dim)?;
        let n = self.dim;
        let a = &self.data;
        let b = &other.data;
        let mut res = 0.0;
        for i in 0..n {
            for j in 0..=i {
                res += a[S::offset(i, j, n)] * b[S::offset(n - 1 - j, n - 1 - i, n)];
            }
            for j in i + 1..n {
                res += a[S::offset(n - 1 - i, n - 1 - j, n)] * b[S::offset(j, i, n)];
            }
        }
        Ok(res)
    }

    /// Trace of the compressed product; the slow path for comparison.
    pub fn trace_product_naive(&self, other: &Self) -> Result<f64, SymtrxError> {
        Ok(self.product(other)?.trace())
    }

    /// Computes the quadratic form `xᵀ · self · y`.
    pub fn quad_form(&self, x: &[f64], y: &[f64]) -> Result<f64, SymtrxError> {
        check_vectors(self.dim, x, y)?;
        let n = self.dim;
        let a = &self.data;
        let mut res = 0.0;
        for i in 0..n {
            for j in 0..=i {
                res += x[i] * y[j] * a[S::offset(i, j, n)];
            }
            for j in i + 1..n {
                res += x[i] * y[j] * a[S::offset(n - 1 - i, n - 1 - j, n)];
            }
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use symtrx_core::{DenseMatrix, RngHandle};

    use crate::matrix::random_full;
    use crate::scheme::{DiagonalMajor, RowMajor};

    use super::*;

    fn pair<S: IndexScheme>(
        n: usize,
        seed: u64,
    ) -> (DenseMatrix, DenseMatrix, CentrosymmetricMatrix<S>, CentrosymmetricMatrix<S>) {
        let mut rng = RngHandle::from_seed(seed);
        let a = random_full(n, &mut rng).unwrap();
        let b = random_full(n, &mut rng).unwrap();
        let ca = CentrosymmetricMatrix::from_full(&a);
        let cb = CentrosymmetricMatrix::from_full(&b);
        (a, b, ca, cb)
    }

    #[test]
    fn product_is_bit_identical_to_dense() {
        for n in [1, 2, 3, 8, 17] {
            let (a, b, ca, cb) = pair::<RowMajor>(n, n as u64);
            let expected = CentrosymmetricMatrix::<RowMajor>::from_full(&a.product(&b).unwrap());
            assert_eq!(ca.product(&cb).unwrap(), expected, "n={n}");
        }
    }

    #[test]
    fn naive_product_agrees_with_fast_product() {
        let (_, _, ca, cb) = pair::<DiagonalMajor>(9, 3);
        let fast = ca.product(&cb).unwrap();
        let naive = ca.product_naive(&cb).unwrap();
        assert!(fast.approx_eq(&naive));
    }

    #[test]
    fn trace_product_paths_agree() {
        let (a, b, ca, cb) = pair::<RowMajor>(12, 5);
        let dense = a.trace_product(&b).unwrap();
        assert_eq!(ca.trace_product(&cb).unwrap(), dense);
        assert!((ca.trace_product_naive(&cb).unwrap() - dense).abs() < 1e-10);
    }

    #[test]
    fn identity_is_neutral() {
        let n = 6;
        let mut eye = CentrosymmetricMatrix::<RowMajor>::zeros(n).unwrap();
        for i in 0..n {
            eye.set_stored(i, i, 1.0);
        }
        let (_, _, ca, _) = pair::<RowMajor>(n, 11);
        assert_eq!(eye.product(&ca).unwrap(), ca);
        assert_eq!(ca.product(&eye).unwrap(), ca);
        assert_eq!(eye.trace(), n as f64);
    }

    #[test]
    fn shape_errors_are_reported() {
        let a = CentrosymmetricMatrix::<RowMajor>::zeros(3).unwrap();
        let b = CentrosymmetricMatrix::<RowMajor>::zeros(4).unwrap();
        assert!(a.product(&b).is_err());
        assert!(a.trace_product(&b).is_err());
        assert!(a.quad_form(&[0.0; 3], &[0.0; 2]).is_err());
        assert!(!a.approx_eq(&b));
    }
}

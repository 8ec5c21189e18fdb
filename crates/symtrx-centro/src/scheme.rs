//! Index schemes for the compressed triangle.
//!
//! A centrosymmetric matrix is stored through its lower triangle (`j <= i`),
//! `n(n+1)/2` entries. The scheme decides where cell `(i, j)` lands in the
//! flat buffer:
//!
//! - [`RowMajor`]: row by row, `offset = i(i+1)/2 + j`
//! - [`DiagonalMajor`]: diagonal by diagonal, main diagonal first, then the
//!   first sub-diagonal, and so on
//!
//! The scheme is a type parameter of
//! [`CentrosymmetricMatrix`](crate::CentrosymmetricMatrix), so the choice is
//! resolved at compile time and every kernel is monomorphized per scheme.

mod sealed {
    pub trait Sealed {}
}

/// Mapping from a stored cell `(i, j)`, `j <= i`, to its buffer offset.
pub trait IndexScheme: sealed::Sealed + Copy + Default + std::fmt::Debug + 'static {
    /// Stable label used in reports and configuration.
    const NAME: &'static str;

    /// Offset of cell `(i, j)` for dimension `n`. Requires `j <= i < n`.
    fn offset(i: usize, j: usize, n: usize) -> usize;
}

/// Row-by-row triangular layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

/// Diagonal-by-diagonal layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagonalMajor;

impl sealed::Sealed for RowMajor {}
impl sealed::Sealed for DiagonalMajor {}

impl IndexScheme for RowMajor {
    const NAME: &'static str = "row-major";

    #[inline]
    fn offset(i: usize, j: usize, _n: usize) -> usize {
        debug_assert!(j <= i, "row-major offset requires j <= i (got {i}, {j})");
        i * (i + 1) / 2 + j
    }
}

impl IndexScheme for DiagonalMajor {
    const NAME: &'static str = "diagonal-major";

    #[inline]
    fn offset(i: usize, j: usize, n: usize) -> usize {
        debug_assert!(j <= i, "diagonal-major offset requires j <= i (got {i}, {j})");
        // Diagonal k = i - j holds n - k cells and starts after the
        // n + (n - 1) + ... + (n - k + 1) cells of the diagonals before it.
        let k = i - j;
        k * n - k * k.saturating_sub(1) / 2 + j
    }
}

/// Number of stored entries for dimension `n`.
#[inline]
pub const fn storage_len(n: usize) -> usize {
    n * (n + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covers_storage<S: IndexScheme>(n: usize) {
        let mut seen = vec![false; storage_len(n)];
        for i in 0..n {
            for j in 0..=i {
                let offset = S::offset(i, j, n);
                assert!(offset < seen.len(), "{} offset {offset} out of range", S::NAME);
                assert!(!seen[offset], "{} offset {offset} reused", S::NAME);
                seen[offset] = true;
            }
        }
        assert!(seen.into_iter().all(|hit| hit));
    }

    #[test]
    fn both_schemes_are_bijections() {
        for n in 1..=24 {
            covers_storage::<RowMajor>(n);
            covers_storage::<DiagonalMajor>(n);
        }
    }

    #[test]
    fn diagonal_major_matches_closed_form() {
        // 2i - j + (n-2)k - k(k+1)/2 + k, evaluated in signed arithmetic.
        for n in 2..=12i64 {
            for i in 0..n {
                for j in 0..=i {
                    let k = i - j;
                    let expected = 2 * i - j + (n - 2) * k - k * (k + 1) / 2 + k;
                    let got = DiagonalMajor::offset(i as usize, j as usize, n as usize);
                    assert_eq!(got as i64, expected, "n={n} i={i} j={j}");
                }
            }
        }
    }

    #[test]
    fn diagonal_major_puts_main_diagonal_first() {
        let n = 5;
        for i in 0..n {
            assert_eq!(DiagonalMajor::offset(i, i, n), i);
        }
        assert_eq!(DiagonalMajor::offset(1, 0, n), n);
        assert_eq!(DiagonalMajor::offset(n - 1, 0, n), storage_len(n) - 1);
    }
}

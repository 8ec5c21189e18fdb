//! Quarter layout of a bisymmetric matrix.
//!
//! The diagonal and the anti-diagonal cut the square into four wedges that
//! the symmetry group (transpose, 180° rotation, anti-transpose) permutes.
//! The left wedge, `j <= min(i, n-1-i)`, holds exactly one cell of every
//! orbit and is what gets stored, row by row.
//!
//! Rows in the upper half store `i + 1` cells, like a plain triangle. Past
//! the middle the rows shrink again, so the triangular offset `i(i+1)/2 + j`
//! overshoots by the cells those shorter rows no longer hold. With
//! `half = ceil(n/2)` and `d = i - half`, the overshoot is `d·(d + n mod 2)`.

/// Number of stored entries for dimension `n`.
///
/// Even `n`: `n(n+2)/4`. Odd `n`, `m = n/2`: `m(m+1) + m + 1`.
pub const fn bisym_size(n: usize) -> usize {
    if n % 2 == 0 {
        n * (n + 2) / 4
    } else {
        let m = n / 2;
        m * (m + 1) + m + 1
    }
}

/// Largest stored column of row `i`: `min(i, n-1-i)`.
#[inline]
pub fn row_bound(i: usize, n: usize) -> usize {
    i.min(n - 1 - i)
}

/// Offset of stored cell `(i, j)`. Requires `j <= min(i, n-1-i)`.
#[inline]
pub fn bisym_offset(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(
        j <= row_bound(i, n),
        "bisymmetric offset requires j <= min(i, n-1-i) (got {i}, {j}, n={n})"
    );
    let half = n / 2 + n % 2;
    let triangular = i * (i + 1) / 2 + j;
    if i > half {
        let d = i - half;
        triangular - d * (d + n % 2)
    } else {
        triangular
    }
}

/// Maps any cell to the stored cell of its orbit.
///
/// Transposes into the lower triangle first, then applies the
/// anti-transpose `(r, c) -> (n-1-c, n-1-r)` when the cell sits right of the
/// anti-diagonal.
#[inline]
pub fn canonical(i: usize, j: usize, n: usize) -> (usize, usize) {
    let (r, c) = if j <= i { (i, j) } else { (j, i) };
    if c + r <= n - 1 {
        (r, c)
    } else {
        (n - 1 - c, n - 1 - r)
    }
}

/// Number of distinct cells in the orbit of stored cell `(i, j)`.
pub fn orbit_size(i: usize, j: usize, n: usize) -> usize {
    let mut images = [
        (i, j),
        (n - 1 - i, n - 1 - j),
        (j, i),
        (n - 1 - j, n - 1 - i),
    ];
    images.sort_unstable();
    1 + images.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

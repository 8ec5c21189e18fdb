//! Compressed storage and arithmetic for centrosymmetric matrices.
//!
//! A centrosymmetric matrix satisfies `A[i][j] = A[n-1-i][n-1-j]`. Only the
//! lower triangle is kept, and products, traces and quadratic forms run on
//! that triangle directly.

mod matrix;
mod ops;
pub mod scheme;

pub use matrix::{is_valid, random_full, storage_gain, CentrosymmetricMatrix};
pub use scheme::{storage_len, DiagonalMajor, IndexScheme, RowMajor};

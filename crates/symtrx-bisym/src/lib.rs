//! Quarter-storage representation and arithmetic for bisymmetric matrices.
//!
//! A bisymmetric matrix is symmetric and centrosymmetric at once, so every
//! entry is shared by up to four cells. Only one representative per orbit is
//! stored, about a quarter of the square.

pub mod layout;
mod matrix;
mod ops;

pub use layout::{bisym_offset, bisym_size, canonical, orbit_size, row_bound};
pub use matrix::{is_valid, random_full, storage_gain, BisymmetricMatrix};

#![deny(missing_docs)]
#![doc = "Shared building blocks for symtrx: errors, tolerance policy, random sources and the dense reference matrix."]

pub mod dense;
pub mod errors;
pub mod rng;
pub mod tolerance;

pub use dense::{dense_index, DenseMatrix};
pub use errors::{ErrorInfo, SymtrxError};
pub use rng::{derive_substream_seed, random_vector, Ran2, RandomSource, RngHandle};
pub use tolerance::{within, QUADFORM_TOLERANCE, STRUCTURAL_TOLERANCE, TRACE_TOLERANCE};

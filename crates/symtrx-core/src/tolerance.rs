//! Fixed comparison tolerances.
//!
//! These are policy constants. They are deliberately not exposed through any
//! configuration surface.

/// Structural symmetry checks and elementwise product comparisons.
pub const STRUCTURAL_TOLERANCE: f64 = 1e-12;

/// Trace and trace-of-product cross-validation.
pub const TRACE_TOLERANCE: f64 = 1e-10;

/// Quadratic form cross-validation; `n²` terms accumulate rounding.
pub const QUADFORM_TOLERANCE: f64 = 1e-6;

/// Absolute-difference comparison used by every check in the workspace.
#[inline]
pub fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

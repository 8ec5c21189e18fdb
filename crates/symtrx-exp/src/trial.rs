//! Single cross-validation trials.
//!
//! A trial draws two random full-form matrices of the requested symmetry,
//! pushes them through the dense oracle and through the compressed kernels,
//! and compares the two paths. Failed comparisons are collected by name and
//! logged; they never abort the run.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use symtrx_bisym::BisymmetricMatrix;
use symtrx_centro::{CentrosymmetricMatrix, IndexScheme};
use symtrx_core::errors::SymtrxError;
use symtrx_core::rng::{random_vector, RandomSource};
use symtrx_core::tolerance::{within, QUADFORM_TOLERANCE, TRACE_TOLERANCE};
use tracing::{debug, warn};

use crate::config::SymmetryKind;

/// Wall-clock seconds spent in each timed phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTimings {
    /// Dense matrix product.
    pub product_dense: f64,
    /// Compressed matrix product.
    pub product_compressed: f64,
    /// Dense trace of a product.
    pub trace_product_dense: f64,
    /// Compressed trace of a product.
    pub trace_product_compressed: f64,
    /// Dense quadratic form.
    pub quad_form_dense: f64,
    /// Compressed quadratic form.
    pub quad_form_compressed: f64,
}

impl PhaseTimings {
    pub(crate) fn accumulate(&mut self, other: &PhaseTimings) {
        self.product_dense += other.product_dense;
        self.product_compressed += other.product_compressed;
        self.trace_product_dense += other.trace_product_dense;
        self.trace_product_compressed += other.trace_product_compressed;
        self.quad_form_dense += other.quad_form_dense;
        self.quad_form_compressed += other.quad_form_compressed;
    }

    pub(crate) fn scaled(&self, factor: f64) -> PhaseTimings {
        PhaseTimings {
            product_dense: self.product_dense * factor,
            product_compressed: self.product_compressed * factor,
            trace_product_dense: self.trace_product_dense * factor,
            trace_product_compressed: self.trace_product_compressed * factor,
            quad_form_dense: self.quad_form_dense * factor,
            quad_form_compressed: self.quad_form_compressed * factor,
        }
    }
}

/// Result of one trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    /// Names of the checks that failed, in evaluation order.
    pub failed_checks: Vec<&'static str>,
    /// Phase timings of this trial.
    pub timings: PhaseTimings,
    /// Sum of the compressed reductions; deterministic for a fixed seed.
    pub checksum: f64,
    /// Whether the dense product was itself bisymmetric (bisymmetric trials only).
    pub product_bisymmetric: Option<bool>,
}

struct Checks {
    kind: SymmetryKind,
    dim: usize,
    trial: usize,
    failed: Vec<&'static str>,
}

impl Checks {
    fn new(kind: SymmetryKind, dim: usize, trial: usize) -> Self {
        Self {
            kind,
            dim,
            trial,
            failed: Vec::new(),
        }
    }

    fn record(&mut self, check: &'static str, passed: bool) {
        if !passed {
            warn!(
                kind = self.kind.label(),
                dim = self.dim,
                trial = self.trial,
                check,
                "cross-validation check failed"
            );
            self.failed.push(check);
        }
    }
}

fn timed<T>(slot: &mut f64, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    *slot += start.elapsed().as_secs_f64();
    out
}

/// Runs one centrosymmetric trial with storage scheme `S`.
pub fn centro_trial<S: IndexScheme, R: RandomSource + ?Sized>(
    dim: usize,
    trial: usize,
    rng: &mut R,
) -> Result<TrialOutcome, SymtrxError> {
    let mut checks = Checks::new(SymmetryKind::Centrosymmetric, dim, trial);
    let mut timings = PhaseTimings::default();

    let full_a = symtrx_centro::random_full(dim, rng)?;
    checks.record("a-centrosymmetric", symtrx_centro::is_valid(&full_a));
    let full_b = symtrx_centro::random_full(dim, rng)?;
    checks.record("b-centrosymmetric", symtrx_centro::is_valid(&full_b));

    let a = CentrosymmetricMatrix::<S>::from_full(&full_a);
    let b = CentrosymmetricMatrix::<S>::from_full(&full_b);

    let full_c = timed(&mut timings.product_dense, || full_a.product(&full_b))?;
    let expected = CentrosymmetricMatrix::<S>::from_full(&full_c);
    checks.record(
        "dense-product-centrosymmetric",
        symtrx_centro::is_valid(&full_c),
    );
    let c = timed(&mut timings.product_compressed, || a.product(&b))?;
    checks.record("product", c.approx_eq(&expected));

    let trace_dense = timed(&mut timings.trace_product_dense, || {
        full_a.trace_product(&full_b)
    })?;
    let trace_compressed = timed(&mut timings.trace_product_compressed, || a.trace_product(&b))?;
    checks.record(
        "trace-product",
        within(trace_dense, trace_compressed, TRACE_TOLERANCE),
    );
    checks.record(
        "trace-of-product",
        within(full_c.trace(), c.trace(), TRACE_TOLERANCE),
    );

    let x = random_vector(dim, rng);
    let y = random_vector(dim, rng);
    let quad_dense = timed(&mut timings.quad_form_dense, || full_c.quad_form(&x, &y))?;
    let quad_compressed = timed(&mut timings.quad_form_compressed, || c.quad_form(&x, &y))?;
    checks.record(
        "quad-form",
        within(quad_dense, quad_compressed, QUADFORM_TOLERANCE),
    );

    debug!(dim, trial, scheme = S::NAME, "centrosymmetric trial done");
    Ok(TrialOutcome {
        failed_checks: checks.failed,
        timings,
        checksum: trace_compressed + c.trace() + quad_compressed,
        product_bisymmetric: None,
    })
}

/// Runs one bisymmetric trial.
pub fn bisym_trial<R: RandomSource + ?Sized>(
    dim: usize,
    trial: usize,
    rng: &mut R,
) -> Result<TrialOutcome, SymtrxError> {
    let mut checks = Checks::new(SymmetryKind::Bisymmetric, dim, trial);
    let mut timings = PhaseTimings::default();

    let full_a = symtrx_bisym::random_full(dim, rng)?;
    checks.record("a-bisymmetric", symtrx_bisym::is_valid(&full_a));
    let full_b = symtrx_bisym::random_full(dim, rng)?;
    checks.record("b-bisymmetric", symtrx_bisym::is_valid(&full_b));

    let a = BisymmetricMatrix::from_full(&full_a);
    let b = BisymmetricMatrix::from_full(&full_b);

    let full_c = timed(&mut timings.product_dense, || full_a.product(&full_b))?;
    let expected = BisymmetricMatrix::from_full(&full_c);
    // Only commuting operands give a bisymmetric product.
    let product_bisymmetric = symtrx_bisym::is_valid(&full_c);
    checks.record(
        "dense-product-centrosymmetric",
        symtrx_centro::is_valid(&full_c),
    );
    let c = timed(&mut timings.product_compressed, || a.product(&b))?;
    checks.record("product", c.approx_eq(&expected));

    let trace_dense = timed(&mut timings.trace_product_dense, || {
        full_a.trace_product(&full_b)
    })?;
    let trace_compressed = timed(&mut timings.trace_product_compressed, || a.trace_product(&b))?;
    checks.record(
        "trace-product",
        within(trace_dense, trace_compressed, TRACE_TOLERANCE),
    );

    let x = random_vector(dim, rng);
    let y = random_vector(dim, rng);
    let quad_dense = timed(&mut timings.quad_form_dense, || full_a.quad_form(&x, &y))?;
    let quad_compressed = timed(&mut timings.quad_form_compressed, || a.quad_form(&x, &y))?;
    checks.record(
        "quad-form",
        within(quad_dense, quad_compressed, QUADFORM_TOLERANCE),
    );

    debug!(dim, trial, product_bisymmetric, "bisymmetric trial done");
    Ok(TrialOutcome {
        failed_checks: checks.failed,
        timings,
        checksum: trace_compressed + c.trace() + quad_compressed,
        product_bisymmetric: Some(product_bisymmetric),
    })
}

//! Cross-validation harness for the compressed symmetric-matrix kernels.
//!
//! Every trial compares a compressed kernel against the dense oracle on
//! freshly drawn matrices and records timings for both paths.

mod config;
mod hash;
mod report;
mod serde;
mod trial;

use symtrx_centro::{DiagonalMajor, RowMajor};
use symtrx_core::errors::SymtrxError;
use symtrx_core::rng::{derive_substream_seed, Ran2, RandomSource, RngHandle};
use tracing::info;

pub use config::{GeneratorKind, HarnessConfig, SchemeKind, SymmetryKind};
pub use hash::stable_hash_string;
pub use report::{Acceleration, KindSummary, RunReport};
pub use crate::serde::{from_json_slice, to_canonical_json_bytes};
pub use trial::{bisym_trial, centro_trial, PhaseTimings, TrialOutcome};

/// Builds the random source for one substream of the run.
pub fn make_source(kind: GeneratorKind, seed: u64, stream: u64) -> Box<dyn RandomSource> {
    match kind {
        GeneratorKind::Std => Box::new(RngHandle::substream(seed, stream)),
        GeneratorKind::Ran2 => Box::new(Ran2::new(derive_substream_seed(seed, stream))),
    }
}

fn run_trial(
    config: &HarnessConfig,
    kind: SymmetryKind,
    dim: usize,
    trial: usize,
    rng: &mut dyn RandomSource,
) -> Result<TrialOutcome, SymtrxError> {
    match (kind, config.scheme) {
        (SymmetryKind::Centrosymmetric, SchemeKind::RowMajor) => {
            centro_trial::<RowMajor, _>(dim, trial, rng)
        }
        (SymmetryKind::Centrosymmetric, SchemeKind::DiagonalMajor) => {
            centro_trial::<DiagonalMajor, _>(dim, trial, rng)
        }
        (SymmetryKind::Bisymmetric, _) => bisym_trial(dim, trial, rng),
    }
}

/// Runs every configured (dimension, kind) cell and summarizes the trials.
///
/// Check failures are logged and counted; only invalid configuration or
/// internal errors abort the run.
pub fn run(config: &HarnessConfig) -> Result<RunReport, SymtrxError> {
    config.validate()?;
    info!(
        dims = ?config.dims,
        repeats = config.repeats,
        seed = config.seed,
        generator = ?config.generator,
        scheme = ?config.scheme,
        "starting cross-validation run"
    );

    let mut summaries = Vec::with_capacity(config.dims.len() * config.kinds.len());
    let mut stream = 0u64;
    for &dim in &config.dims {
        for &kind in &config.kinds {
            let mut rng = make_source(config.generator, config.seed, stream);
            stream += 1;
            let mut outcomes = Vec::with_capacity(config.repeats);
            for trial in 0..config.repeats {
                outcomes.push(run_trial(config, kind, dim, trial, rng.as_mut())?);
            }
            let scheme = (kind == SymmetryKind::Centrosymmetric).then_some(config.scheme);
            let summary = KindSummary::from_outcomes(kind, dim, scheme, &outcomes);
            info!(
                kind = kind.label(),
                dim,
                failures = summary.failures,
                storage_gain = summary.storage_gain,
                product_speedup = ?summary.acceleration.product,
                "cell finished"
            );
            summaries.push(summary);
        }
    }

    let report = RunReport::new(config.clone(), summaries)?;
    info!(
        total_failures = report.total_failures,
        report_hash = %report.report_hash,
        "run finished"
    );
    Ok(report)
}

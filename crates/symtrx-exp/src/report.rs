use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use symtrx_core::errors::SymtrxError;

use crate::config::{HarnessConfig, SchemeKind, SymmetryKind};
use crate::hash::stable_hash_string;
use crate::trial::{PhaseTimings, TrialOutcome};

/// Dense-over-compressed time ratios. `None` when the compressed phase was
/// too fast to measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acceleration {
    /// Matrix product.
    pub product: Option<f64>,
    /// Trace of a product.
    pub trace_product: Option<f64>,
    /// Quadratic form.
    pub quad_form: Option<f64>,
}

fn ratio(dense: f64, compressed: f64) -> Option<f64> {
    (compressed > 0.0).then_some(dense / compressed)
}

impl Acceleration {
    fn from_timings(timings: &PhaseTimings) -> Self {
        Self {
            product: ratio(timings.product_dense, timings.product_compressed),
            trace_product: ratio(
                timings.trace_product_dense,
                timings.trace_product_compressed,
            ),
            quad_form: ratio(timings.quad_form_dense, timings.quad_form_compressed),
        }
    }
}

/// Aggregate over all trials of one (kind, dimension) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindSummary {
    /// Symmetry kind under test.
    pub kind: SymmetryKind,
    /// Matrix dimension.
    pub dim: usize,
    /// Index scheme, for centrosymmetric cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<SchemeKind>,
    /// Number of trials run.
    pub trials: usize,
    /// Number of failed checks over all trials.
    pub failures: usize,
    /// Failure count per check name.
    #[serde(default)]
    pub failed_checks: BTreeMap<String, usize>,
    /// Trials whose dense product was bisymmetric, for bisymmetric cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bisymmetric_products: Option<usize>,
    /// Sum of the per-trial checksums.
    pub checksum: f64,
    /// Full-to-compressed storage ratio.
    pub storage_gain: f64,
    /// Mean per-trial timings in seconds.
    pub mean_timings: PhaseTimings,
    /// Dense-over-compressed speedups.
    pub acceleration: Acceleration,
}

impl KindSummary {
    pub(crate) fn from_outcomes(
        kind: SymmetryKind,
        dim: usize,
        scheme: Option<SchemeKind>,
        outcomes: &[TrialOutcome],
    ) -> Self {
        let mut failed_checks = BTreeMap::new();
        let mut totals = PhaseTimings::default();
        let mut checksum = 0.0;
        let mut bisymmetric = 0;
        for outcome in outcomes {
            for check in &outcome.failed_checks {
                *failed_checks.entry((*check).to_string()).or_insert(0) += 1;
            }
            totals.accumulate(&outcome.timings);
            checksum += outcome.checksum;
            if outcome.product_bisymmetric == Some(true) {
                bisymmetric += 1;
            }
        }
        let storage_gain = match kind {
            SymmetryKind::Centrosymmetric => symtrx_centro::storage_gain(dim),
            SymmetryKind::Bisymmetric => symtrx_bisym::storage_gain(dim),
        };
        let mean_timings = if outcomes.is_empty() {
            totals
        } else {
            totals.scaled(1.0 / outcomes.len() as f64)
        };
        Self {
            kind,
            dim,
            scheme,
            trials: outcomes.len(),
            failures: failed_checks.values().sum(),
            failed_checks,
            bisymmetric_products: (kind == SymmetryKind::Bisymmetric).then_some(bisymmetric),
            checksum,
            storage_gain,
            acceleration: Acceleration::from_timings(&mean_timings),
            mean_timings,
        }
    }
}

/// Timing-free view of a summary; the report hash covers only this.
#[derive(Serialize)]
struct SummaryDigest<'a> {
    kind: SymmetryKind,
    dim: usize,
    scheme: Option<SchemeKind>,
    trials: usize,
    failed_checks: &'a BTreeMap<String, usize>,
    bisymmetric_products: Option<usize>,
    checksum: f64,
}

impl<'a> From<&'a KindSummary> for SummaryDigest<'a> {
    fn from(summary: &'a KindSummary) -> Self {
        Self {
            kind: summary.kind,
            dim: summary.dim,
            scheme: summary.scheme,
            trials: summary.trials,
            failed_checks: &summary.failed_checks,
            bisymmetric_products: summary.bisymmetric_products,
            checksum: summary.checksum,
        }
    }
}

/// Outcome of a full harness run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Configuration the run used.
    pub config: HarnessConfig,
    /// One entry per (dimension, kind), in run order.
    pub summaries: Vec<KindSummary>,
    /// Failed checks across every summary.
    pub total_failures: usize,
    /// Hash of the configuration and the deterministic summary fields.
    pub report_hash: String,
}

impl RunReport {
    pub(crate) fn new(
        config: HarnessConfig,
        summaries: Vec<KindSummary>,
    ) -> Result<Self, SymtrxError> {
        let digests: Vec<SummaryDigest<'_>> = summaries.iter().map(SummaryDigest::from).collect();
        let report_hash = stable_hash_string(&(&config, &digests))?;
        let total_failures = summaries.iter().map(|summary| summary.failures).sum();
        Ok(Self {
            config,
            summaries,
            total_failures,
            report_hash,
        })
    }

    /// Whether every check in every trial passed.
    pub fn is_clean(&self) -> bool {
        self.total_failures == 0
    }
}

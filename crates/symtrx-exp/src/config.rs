use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use symtrx_core::errors::{ErrorInfo, SymtrxError};

/// YAML-configurable parameters of a cross-validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Matrix dimensions to exercise, in order.
    #[serde(default = "default_dims")]
    pub dims: Vec<usize>,
    /// Trials per dimension and symmetry kind.
    #[serde(default = "default_repeats")]
    pub repeats: usize,
    /// Master seed; every (kind, dim) cell draws from its own substream.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Random source used to fill the matrices.
    #[serde(default)]
    pub generator: GeneratorKind,
    /// Index scheme for the centrosymmetric triangle.
    #[serde(default)]
    pub scheme: SchemeKind,
    /// Symmetry kinds to validate.
    #[serde(default = "default_kinds")]
    pub kinds: Vec<SymmetryKind>,
}

fn default_dims() -> Vec<usize> {
    vec![100]
}

fn default_repeats() -> usize {
    5
}

fn default_seed() -> u64 {
    2012
}

fn default_kinds() -> Vec<SymmetryKind> {
    vec![SymmetryKind::Centrosymmetric, SymmetryKind::Bisymmetric]
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            dims: default_dims(),
            repeats: default_repeats(),
            seed: default_seed(),
            generator: GeneratorKind::default(),
            scheme: SchemeKind::default(),
            kinds: default_kinds(),
        }
    }
}

/// Random sources available to the harness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    /// `StdRng` behind an [`RngHandle`](symtrx_core::RngHandle).
    #[default]
    Std,
    /// L'Ecuyer generator with Bays–Durham shuffle.
    Ran2,
}

/// Centrosymmetric index schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeKind {
    /// Row-by-row lower triangle.
    #[default]
    RowMajor,
    /// Diagonal-by-diagonal lower triangle.
    DiagonalMajor,
}

/// Matrix symmetry classes covered by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymmetryKind {
    /// `A[i][j] = A[n-1-i][n-1-j]`.
    Centrosymmetric,
    /// Symmetric and centrosymmetric.
    Bisymmetric,
}

impl SymmetryKind {
    /// Stable label used in reports and logs.
    pub fn label(self) -> &'static str {
        match self {
            SymmetryKind::Centrosymmetric => "centrosymmetric",
            SymmetryKind::Bisymmetric => "bisymmetric",
        }
    }
}

fn config_error(code: &str, message: impl Into<String>) -> SymtrxError {
    SymtrxError::Config(ErrorInfo::new(code, message))
}

impl HarnessConfig {
    /// Parses a YAML document; missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SymtrxError> {
        serde_yaml::from_str(yaml)
            .map_err(|err| SymtrxError::Serde(ErrorInfo::new("yaml_deserialize", err.to_string())))
    }

    /// Reads and parses a YAML file without validating it.
    pub fn load(path: &Path) -> Result<Self, SymtrxError> {
        let text = fs::read_to_string(path).map_err(|err| {
            SymtrxError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Rejects configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<(), SymtrxError> {
        if self.dims.is_empty() {
            return Err(config_error("empty-dims", "at least one dimension is required"));
        }
        if let Some(position) = self.dims.iter().position(|&dim| dim == 0) {
            return Err(SymtrxError::Config(
                ErrorInfo::new("zero-dimension", "dimensions must be positive")
                    .with_context("position", position),
            ));
        }
        if self.repeats == 0 {
            return Err(SymtrxError::Config(
                ErrorInfo::new("zero-repeats", "repeats must be at least 1")
                    .with_hint("set repeats to 1 or more"),
            ));
        }
        if self.kinds.is_empty() {
            return Err(config_error("empty-kinds", "at least one symmetry kind is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_takes_defaults() {
        let config = HarnessConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.dims, vec![100]);
        assert_eq!(config.repeats, 5);
        assert_eq!(config.seed, 2012);
        config.validate().unwrap();
    }

    #[test]
    fn zero_repeats_carry_a_hint() {
        let config = HarnessConfig {
            repeats: 0,
            ..HarnessConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.info().code, "zero-repeats");
        assert!(err.info().hint.is_some());
    }
}

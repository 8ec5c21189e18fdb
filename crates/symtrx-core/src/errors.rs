//! Structured error types shared across symtrx crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SymtrxError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (dimensions, lengths, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for symtrx.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SymtrxError {
    /// Zero dimensions and operand shape mismatches.
    #[error("dimension error: {0}")]
    Dimension(ErrorInfo),
    /// Invalid harness configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors while loading inputs or writing reports.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SymtrxError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SymtrxError::Dimension(info)
            | SymtrxError::Config(info)
            | SymtrxError::Serde(info)
            | SymtrxError::Io(info) => info,
        }
    }

    /// Error returned when a matrix is requested with `n == 0`.
    pub fn zero_dimension() -> Self {
        SymtrxError::Dimension(
            ErrorInfo::new("zero-dimension", "matrix dimension must be positive")
                .with_hint("use n >= 1"),
        )
    }

    /// Error returned when two operands disagree on their dimension.
    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        SymtrxError::Dimension(
            ErrorInfo::new("dimension-mismatch", "operands have different dimensions")
                .with_context("left", left)
                .with_context("right", right),
        )
    }

    /// Error returned when a vector or buffer has the wrong length.
    pub fn length_mismatch(what: &str, expected: usize, actual: usize) -> Self {
        SymtrxError::Dimension(
            ErrorInfo::new("length-mismatch", format!("{what} has the wrong length"))
                .with_context("expected", expected)
                .with_context("actual", actual),
        )
    }
}

/// Checks that two operand dimensions agree.
pub fn ensure_same_dim(left: usize, right: usize) -> Result<(), SymtrxError> {
    if left == right {
        Ok(())
    } else {
        Err(SymtrxError::dimension_mismatch(left, right))
    }
}

/// Checks that a dimension is usable for a matrix.
pub fn ensure_positive(dim: usize) -> Result<(), SymtrxError> {
    if dim == 0 {
        Err(SymtrxError::zero_dimension())
    } else {
        Ok(())
    }
}

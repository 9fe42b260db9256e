//! errors.rs - Custom error types for the reelscore-core library.
//!
//! Scoring fails in exactly two ways: the input is bad (`ValidationError`) or a
//! formula broke one of its own invariants (`FormulaError`). Configuration and
//! parse failures sit alongside them so the CLI can report every failure with a
//! stable `type` name.
//!
//! License: MIT OR APACHE 2.0

use std::backtrace::Backtrace;
use thiserror::Error;

use crate::output::Dimension;

/// Input failed a schema or range constraint. Recoverable by fixing the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field `{path}`: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `measures.hook.duration_sec`.
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A formula produced a value it should never produce. This is a defect, not bad input.
#[derive(Error, Debug, Clone)]
#[error("formula `{dimension}` produced {value}, outside [0, 100]")]
pub struct FormulaError {
    pub dimension: String,
    pub value: f64,
    /// Captured backtrace text at the point the violation was detected.
    pub stack: String,
}

impl FormulaError {
    pub fn out_of_range(dimension: Dimension, value: f64) -> Self {
        Self::for_stage(dimension.as_str(), value)
    }

    /// Reports a violation in a stage that is not one of the nine dimensions
    /// (e.g. `penalties`, `composite`).
    pub fn for_stage(stage: &str, value: f64) -> Self {
        Self {
            dimension: stage.to_string(),
            value,
            stack: Backtrace::force_capture().to_string(),
        }
    }
}

/// Invalid scoring configuration.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("weights must sum to 1.0 (got {0})")]
    WeightSum(f64),

    #[error("weight for `{0}` must be a finite, non-negative number (got {1})")]
    InvalidWeight(String, f64),

    #[error("normalization source_std must be positive (got {0})")]
    NonPositiveSpread(f64),

    #[error("normalization parameter `{0}` must be finite")]
    NonFiniteNormalization(String),

    #[error("low_confidence threshold must lie in [0, 1] (got {0})")]
    ConfidenceThreshold(f64),
}

/// This enum represents all possible failures of a scoring call.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScoringError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ScoringError {
    /// Stable name of the error kind, used as the `type` of error records.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoringError::Validation(_) => "ValidationError",
            ScoringError::Formula(_) => "FormulaError",
            ScoringError::Config(_) => "ConfigError",
            ScoringError::Parse(_) => "ParseError",
        }
    }

    /// Offending field path, for validation failures.
    pub fn path(&self) -> Option<&str> {
        match self {
            ScoringError::Validation(e) => Some(&e.path),
            _ => None,
        }
    }

    /// Full detail for defects. Only formula failures carry a stack.
    pub fn stack(&self) -> Option<&str> {
        match self {
            ScoringError::Formula(e) => Some(&e.stack),
            _ => None,
        }
    }
}

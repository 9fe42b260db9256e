// reelscore/src/errors.rs
//! Error type for the reelscore binary and the JSON error record written to stderr.

use serde::Serialize;
use thiserror::Error;

use reelscore_core::ScoringError;

/// Everything that can make a run fail.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read stdin: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// Configuration file unreadable, unparsable or invalid.
    #[error("{0:#}")]
    Config(anyhow::Error),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl CliError {
    /// The `type` field of the error record.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Input(_) | CliError::Output(_) => "IoError",
            CliError::Config(_) => "ConfigError",
            CliError::Scoring(e) => e.kind(),
        }
    }
}

/// Machine-readable failure report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorRecord {
    pub error: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl From<&CliError> for ErrorRecord {
    fn from(err: &CliError) -> Self {
        let (path, stack) = match err {
            CliError::Scoring(e) => (e.path().map(str::to_string), e.stack().map(str::to_string)),
            _ => (None, None),
        };
        Self {
            error: err.to_string(),
            kind: err.kind().to_string(),
            path,
            stack,
        }
    }
}

// reelscore-core/src/headless.rs
//! One-shot convenience wrapper around [`ScoringEngine`].
//!
//! Builds a throwaway engine from optional overrides and scores a single JSON
//! document. Callers scoring many videos with the same settings should construct
//! one `ScoringEngine` and reuse it instead.

use log::debug;
use serde_json::Value;

use crate::config::{ScoringConfig, Weights};
use crate::engine::ScoringEngine;
use crate::errors::ScoringError;
use crate::output::ScoringOutput;

/// Scores one input document.
///
/// # Arguments
///
/// * `input` - The untyped input document (`meta`, `measures`, `raw`).
/// * `weights` - Per-dimension weights; the defaults when `None`.
/// * `normalize` - Whether to apply the normalization stage; `true` when `None`.
pub fn score(
    input: &Value,
    weights: Option<&Weights>,
    normalize: Option<bool>,
) -> Result<ScoringOutput, ScoringError> {
    let mut config = ScoringConfig::default();
    if let Some(w) = weights {
        config = config.with_weights(*w);
    }
    if let Some(n) = normalize {
        config = config.with_normalization(n);
    }
    debug!("Headless scoring with {:?}", config);

    let engine = ScoringEngine::new(config)?;
    engine.score_value(input)
}

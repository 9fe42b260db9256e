// reelscore-core/src/engine.rs
//! Defines the `ScoringEngine`, the orchestrator that turns one video's evidence
//! into a `ScoringOutput`.
//!
//! The engine owns nothing but its immutable `ScoringConfig`. Each call validates
//! the input, evaluates the nine formulas independently, checks their ranges,
//! renormalizes the weights for that call, subtracts penalties, attaches coverage
//! diagnostics and finally applies the optional normalization stage. Calls share
//! no mutable state, so one engine can be used from many threads by reference.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde_json::Value;

use reelscore_curves::statistics::rescale;
use reelscore_curves::SCORE_MAX;

use crate::config::{ScoringConfig, FORMULA_VERSION};
use crate::diagnostics::{compute_diagnostics, derive_flags};
use crate::errors::{ConfigError, FormulaError, ScoringError};
use crate::formulas::hook::HookFormula;
use crate::formulas::{penalties, STANDARD_FORMULAS};
use crate::input::ScoringInput;
use crate::output::{round2, Dimension, DimensionMap, HookBreakdown, PenaltyBreakdown, ScoringOutput};
use crate::validators::validate_input;

/// Scores videos against a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

fn check_range(dimension: Dimension, value: f64) -> Result<f64, FormulaError> {
    if value.is_finite() && (0.0..=SCORE_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(FormulaError::out_of_range(dimension, value))
    }
}

impl ScoringEngine {
    /// Creates an engine after validating the configuration.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "ScoringEngine initialized (formula version {}, normalization {}).",
            FORMULA_VERSION,
            if config.normalization.enabled { "on" } else { "off" }
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Parses JSON text and scores it.
    pub fn score_str(&self, text: &str) -> Result<ScoringOutput, ScoringError> {
        let value: Value = serde_json::from_str(text)?;
        self.score_value(&value)
    }

    /// Validates an untyped JSON document and scores it.
    pub fn score_value(&self, value: &Value) -> Result<ScoringOutput, ScoringError> {
        let input = validate_input(value)?;
        self.score_input(&input)
    }

    /// Scores already-validated input.
    pub fn score_input(&self, input: &ScoringInput) -> Result<ScoringOutput, ScoringError> {
        let subscores = self.evaluate_formulas(input)?;

        let weights = self
            .config
            .weights
            .renormalize(|d| subscores.get(&d).copied().flatten().is_some());

        let penalty_breakdown = penalties::assess(input);
        let penalty_total = penalties::total(&penalty_breakdown);

        let composite: f64 = Dimension::ALL
            .iter()
            .filter_map(|d| subscores[d].map(|s| s * weights[d]))
            .sum();
        if !composite.is_finite() {
            return Err(FormulaError::for_stage("composite", composite).into());
        }
        let raw_overall = (composite - penalty_total).clamp(0.0, SCORE_MAX);

        let diagnostics = compute_diagnostics(input);
        let flags = derive_flags(&diagnostics, &self.config.thresholds);

        let any_scored = subscores.values().any(Option::is_some);
        let normalized = self.config.normalization.enabled && any_scored;
        let overall = if normalized {
            self.normalize(raw_overall)?
        } else {
            raw_overall
        };

        debug!(
            "Composite {:.3} - penalties {:.3} = raw {:.3}, overall {:.3}",
            composite, penalty_total, raw_overall, overall
        );

        let hook_breakdown = HookFormula::breakdown(input);

        Ok(ScoringOutput {
            video_id: input.meta.video_id.clone(),
            subscores: subscores
                .into_iter()
                .map(|(d, s)| (d, s.map(round2)))
                .collect(),
            hook_breakdown: HookBreakdown {
                pace: hook_breakdown.pace.map(round2),
                content: hook_breakdown.content.map(round2),
            },
            penalties: round2(penalty_total),
            penalty_breakdown: PenaltyBreakdown {
                spam: round2(penalty_breakdown.spam),
                low_quality: round2(penalty_breakdown.low_quality),
                excessive_length: round2(penalty_breakdown.excessive_length),
                formatting: round2(penalty_breakdown.formatting),
            },
            raw_overall: round2(raw_overall),
            overall: round2(overall),
            normalized,
            weights,
            diagnostics,
            flags,
            version: FORMULA_VERSION.to_string(),
        })
    }

    /// Runs every formula and rejects any result outside `[0, 100]`.
    fn evaluate_formulas(&self, input: &ScoringInput) -> Result<DimensionMap<Option<f64>>, FormulaError> {
        STANDARD_FORMULAS
            .iter()
            .map(|formula| {
                let dimension = formula.dimension();
                let score = formula
                    .evaluate(input)
                    .map(|s| check_range(dimension, s))
                    .transpose()?;
                debug!("Subscore {}: {:?}", dimension, score);
                Ok::<_, FormulaError>((dimension, score))
            })
            .collect()
    }

    /// Linear reshaping from the assumed raw distribution to the target one.
    fn normalize(&self, raw: f64) -> Result<f64, ScoringError> {
        let n = &self.config.normalization;
        let reshaped = rescale(raw, &n.source(), &n.target())
            .ok_or(ConfigError::NonPositiveSpread(n.source_std))?;
        if !reshaped.is_finite() {
            return Err(FormulaError::for_stage("normalization", reshaped).into());
        }
        Ok(reshaped.clamp(0.0, SCORE_MAX))
    }
}

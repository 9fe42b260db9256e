//! Configuration management for `reelscore-core`.
//!
//! This module defines the static scoring configuration: per-dimension weights,
//! the post-processing normalization stage, and the confidence thresholds that
//! drive the output flags. Weights are static configuration, never learned.
//! A configuration is an immutable value passed into the engine; nothing here is
//! global state.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use reelscore_curves::statistics::Distribution;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::output::{Dimension, DimensionMap};

/// Version of the formula set. Bump whenever any formula or default changes.
pub const FORMULA_VERSION: &str = "1.0.0";

/// Allowed deviation of the configured weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

pub const DEFAULT_SOURCE_MEAN: f64 = 60.0;
pub const DEFAULT_SOURCE_STD: f64 = 15.0;
pub const DEFAULT_TARGET_MEAN: f64 = 70.0;
pub const DEFAULT_TARGET_STD: f64 = 10.0;

/// Overall confidence below this fraction raises `low_confidence`.
pub const DEFAULT_LOW_CONFIDENCE: f64 = 0.6;

/// More missing tracked fields than this raises `incomplete`.
pub const DEFAULT_MAX_MISSING_FIELDS: usize = 8;

/// Per-dimension weights. The defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Weights {
    pub hook: f64,
    pub story: f64,
    pub relatability: f64,
    pub visuals: f64,
    pub audio: f64,
    pub watchtime: f64,
    pub engagement: f64,
    pub shareability: f64,
    pub algo: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            hook: 0.18,
            story: 0.10,
            relatability: 0.06,
            visuals: 0.08,
            audio: 0.06,
            watchtime: 0.25,
            engagement: 0.15,
            shareability: 0.07,
            algo: 0.05,
        }
    }
}

impl Weights {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Hook => self.hook,
            Dimension::Story => self.story,
            Dimension::Relatability => self.relatability,
            Dimension::Visuals => self.visuals,
            Dimension::Audio => self.audio,
            Dimension::Watchtime => self.watchtime,
            Dimension::Engagement => self.engagement,
            Dimension::Shareability => self.shareability,
            Dimension::Algo => self.algo,
        }
    }

    pub fn sum(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }

    /// Checks every weight is finite and non-negative and that they sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for dimension in Dimension::ALL {
            let w = self.get(dimension);
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::InvalidWeight(dimension.to_string(), w));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }
        Ok(())
    }

    /// Produces the effective weights for one input.
    ///
    /// Dimensions for which `present` is false get weight 0; the rest are rescaled
    /// proportionally to sum to 1.0. When every present dimension has a configured
    /// weight of 0, the present dimensions share the weight equally. When nothing is
    /// present, all weights are 0. `self` is left untouched.
    pub fn renormalize(&self, present: impl Fn(Dimension) -> bool) -> DimensionMap<f64> {
        let present_dims: Vec<Dimension> = Dimension::ALL.into_iter().filter(|d| present(*d)).collect();
        let present_sum: f64 = present_dims.iter().map(|d| self.get(*d)).sum();

        Dimension::ALL
            .into_iter()
            .map(|d| {
                let effective = if !present_dims.contains(&d) {
                    0.0
                } else if present_sum > 0.0 {
                    self.get(d) / present_sum
                } else {
                    1.0 / present_dims.len() as f64
                };
                (d, effective)
            })
            .collect()
    }
}

/// Settings for the optional linear reshaping of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NormalizationConfig {
    pub enabled: bool,
    /// Where the raw formulas are assumed to be centered.
    pub source_mean: f64,
    pub source_std: f64,
    /// The desired score distribution.
    pub target_mean: f64,
    pub target_std: f64,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source_mean: DEFAULT_SOURCE_MEAN,
            source_std: DEFAULT_SOURCE_STD,
            target_mean: DEFAULT_TARGET_MEAN,
            target_std: DEFAULT_TARGET_STD,
        }
    }
}

impl NormalizationConfig {
    pub fn source(&self) -> Distribution {
        Distribution::new(self.source_mean, self.source_std)
    }

    pub fn target(&self) -> Distribution {
        Distribution::new(self.target_mean, self.target_std)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = [
            ("source_mean", self.source_mean),
            ("source_std", self.source_std),
            ("target_mean", self.target_mean),
            ("target_std", self.target_std),
        ];
        if let Some((name, _)) = params.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFiniteNormalization(name.to_string()));
        }
        if self.source_std <= 0.0 {
            return Err(ConfigError::NonPositiveSpread(self.source_std));
        }
        Ok(())
    }
}

/// Thresholds for the `incomplete` and `low_confidence` flags.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    pub low_confidence: f64,
    pub max_missing_fields: usize,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            low_confidence: DEFAULT_LOW_CONFIDENCE,
            max_missing_fields: DEFAULT_MAX_MISSING_FIELDS,
        }
    }
}

/// Represents the top-level configuration structure for reelscore.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub normalization: NormalizationConfig,
    pub thresholds: ConfidenceThresholds,
}

impl ScoringConfig {
    /// Loads a configuration from a YAML file and validates it.
    ///
    /// Sections missing from the file keep their defaults. A partial `weights`
    /// section is filled from the defaults field by field, so it usually has to be
    /// given in full to still sum to 1.0.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scoring configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    /// Parses and validates a YAML configuration document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: ScoringConfig =
            serde_yml::from_str(text).context("Failed to parse scoring configuration")?;
        config.validate()?;
        debug!("Loaded scoring configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.normalization.validate()?;
        let t = self.thresholds.low_confidence;
        if !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::ConfidenceThreshold(t));
        }
        if !self.normalization.enabled {
            warn!("Normalization disabled; reporting raw composite scores.");
        }
        Ok(())
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_normalization(mut self, enabled: bool) -> Self {
        self.normalization.enabled = enabled;
        self
    }
}

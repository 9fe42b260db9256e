//! Data structures for reporting a scoring result.
//!
//! All maps are `BTreeMap`s keyed by enums, so serialized output has a fixed key
//! order and identical input produces byte-identical JSON.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the nine independently scored dimensions, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Hook,
    Story,
    Relatability,
    Visuals,
    Audio,
    Watchtime,
    Engagement,
    Shareability,
    Algo,
}

impl Dimension {
    pub const ALL: [Dimension; 9] = [
        Dimension::Hook,
        Dimension::Story,
        Dimension::Relatability,
        Dimension::Visuals,
        Dimension::Audio,
        Dimension::Watchtime,
        Dimension::Engagement,
        Dimension::Shareability,
        Dimension::Algo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Hook => "hook",
            Dimension::Story => "story",
            Dimension::Relatability => "relatability",
            Dimension::Visuals => "visuals",
            Dimension::Audio => "audio",
            Dimension::Watchtime => "watchtime",
            Dimension::Engagement => "engagement",
            Dimension::Shareability => "shareability",
            Dimension::Algo => "algo",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type DimensionMap<T> = BTreeMap<Dimension, T>;

/// A measurement group tracked by the coverage diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureGroup {
    Meta,
    Hook,
    HookContent,
    Story,
    Visuals,
    Audio,
    Watchtime,
    Engagement,
    Shareability,
    Algo,
}

/// Populated vs. tracked optional fields for one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coverage {
    pub present: usize,
    pub tracked: usize,
}

impl Coverage {
    pub fn new(present: usize, tracked: usize) -> Self {
        Self { present, tracked }
    }

    pub fn missing(&self) -> usize {
        self.tracked.saturating_sub(self.present)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub coverage: BTreeMap<MeasureGroup, Coverage>,
    pub present_fields: usize,
    pub tracked_fields: usize,
    pub missing_fields: usize,
    /// `present_fields / tracked_fields`, 0 when nothing is tracked.
    pub overall_confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub incomplete: bool,
    pub low_confidence: bool,
}

/// The two hook formulations before blending.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HookBreakdown {
    pub pace: Option<f64>,
    pub content: Option<f64>,
}

/// Individual penalty factors. Each is bounded and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PenaltyBreakdown {
    pub spam: f64,
    pub low_quality: f64,
    pub excessive_length: f64,
    pub formatting: f64,
}

impl PenaltyBreakdown {
    pub fn sum(&self) -> f64 {
        self.spam + self.low_quality + self.excessive_length + self.formatting
    }
}

/// The complete, serializable result of scoring one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOutput {
    pub video_id: Option<String>,
    /// `None` (JSON `null`) means the dimension was not observed, which is not the same as 0.
    pub subscores: DimensionMap<Option<f64>>,
    pub hook_breakdown: HookBreakdown,
    pub penalties: f64,
    pub penalty_breakdown: PenaltyBreakdown,
    /// Composite after penalties and clamping, before normalization.
    pub raw_overall: f64,
    pub overall: f64,
    pub normalized: bool,
    /// Effective weights after renormalization over non-null dimensions.
    pub weights: DimensionMap<f64>,
    pub diagnostics: Diagnostics,
    pub flags: Flags,
    pub version: String,
}

impl ScoringOutput {
    pub fn subscore(&self, dimension: Dimension) -> Option<f64> {
        self.subscores.get(&dimension).copied().flatten()
    }

    pub fn weight(&self, dimension: Dimension) -> f64 {
        self.weights.get(&dimension).copied().unwrap_or(0.0)
    }
}

/// Rounds a reported score to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

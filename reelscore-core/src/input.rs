//! Typed representation of one video's worth of scoring evidence.
//!
//! Values of these types are produced by [`crate::validators::validate_input`], which
//! guarantees every range constraint holds. Dual-schema groups (hook, audio) are stored
//! as a [`Generation`] so formulas can match on which field generation is present.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Which generation(s) of a dual-schema measurement group are populated.
///
/// A `Legacy` or `Continuous` payload is only constructed when at least one of its
/// fields is set, so `Neither` is the one and only "empty" state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Generation<L, C> {
    #[default]
    Neither,
    Legacy(L),
    Continuous(C),
    Both(L, C),
}

impl<L, C> Generation<L, C> {
    pub fn from_parts(legacy: Option<L>, continuous: Option<C>) -> Self {
        match (legacy, continuous) {
            (Some(l), Some(c)) => Generation::Both(l, c),
            (Some(l), None) => Generation::Legacy(l),
            (None, Some(c)) => Generation::Continuous(c),
            (None, None) => Generation::Neither,
        }
    }

    pub fn legacy(&self) -> Option<&L> {
        match self {
            Generation::Legacy(l) | Generation::Both(l, _) => Some(l),
            _ => None,
        }
    }

    pub fn continuous(&self) -> Option<&C> {
        match self {
            Generation::Continuous(c) | Generation::Both(_, c) => Some(c),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Generation::Neither)
    }
}

/// Identity and context for the video.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta {
    pub video_id: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub followers: Option<f64>,
    pub length_sec: Option<f64>,
}

/// Discrete hook fields from the first schema generation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegacyHook {
    pub duration_sec: Option<f64>,
    pub text: Option<String>,
    pub hook_type: Option<String>,
    /// Externally provided rating on a 0-10 scale.
    pub effectiveness_score: Option<f64>,
}

/// Continuous hook signals from the newer schema generation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContinuousHook {
    pub time_to_value_sec: Option<f64>,
    /// Percentage (0-100) of first frames with a face on screen.
    pub first_frame_face_present_pct: Option<f64>,
    /// Motion intensity over the first two seconds, 0-1.
    pub first_2s_motion_intensity: Option<f64>,
}

pub type HookMeasures = Generation<LegacyHook, ContinuousHook>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StoryMeasures {
    pub beats_count: Option<u64>,
    pub arc_detected: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualMeasures {
    pub overlay_present: Option<bool>,
    pub edit_rate_per_10s: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LegacyAudio {
    pub trending_sound: Option<bool>,
    /// Execution quality of an original sound, 0-1.
    pub original_sound_quality: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContinuousAudio {
    /// 0 = voice only, 1 = music only.
    pub music_voice_balance: Option<f64>,
    pub beat_sync_score: Option<f64>,
    pub speech_intelligibility: Option<f64>,
}

pub type AudioMeasures = Generation<LegacyAudio, ContinuousAudio>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchtimeMeasures {
    pub avg_watch_pct: Option<f64>,
    pub completion_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngagementMeasures {
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
    pub shares: Option<u64>,
}

impl EngagementMeasures {
    /// Sum of the interaction counts that are present, or `None` if none are.
    pub fn interactions(&self) -> Option<u64> {
        let counts = [self.likes, self.comments, self.shares];
        if counts.iter().all(Option::is_none) {
            return None;
        }
        Some(counts.iter().flatten().fold(0u64, |acc, c| acc.saturating_add(*c)))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareabilityMeasures {
    pub caption: Option<String>,
    pub cta_present: Option<bool>,
    pub save_signal_strength: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlgoMeasures {
    pub caption: Option<String>,
    pub hashtag_count: Option<u64>,
    pub niche_mix_ok: Option<bool>,
    pub posted_optimal_time: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModalityAttribution {
    pub audio: Option<f64>,
    pub visual: Option<f64>,
    pub overlay: Option<f64>,
}

/// Richer hook classification produced by the upstream content classifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HookContent {
    pub hook_type_probs: Option<BTreeMap<String, f64>>,
    pub modality_attribution: Option<ModalityAttribution>,
    pub visual_evidence_present: Option<bool>,
    pub spoken_question_present: Option<bool>,
    pub overlay_words_first_2s: Option<u64>,
    pub hook_risk_flags: Option<BTreeMap<String, bool>>,
}

/// All measurement groups. Groups missing from the input are empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measures {
    pub hook: HookMeasures,
    pub story: StoryMeasures,
    pub visuals: VisualMeasures,
    pub audio: AudioMeasures,
    pub watchtime: WatchtimeMeasures,
    pub engagement: EngagementMeasures,
    pub shareability: ShareabilityMeasures,
    pub algo: AlgoMeasures,
    /// `None` when the input carries no `hook_content` object at all.
    pub hook_content: Option<HookContent>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HookSpan {
    pub start_sec: f64,
    pub end_sec: f64,
}

impl HookSpan {
    pub fn length(&self) -> f64 {
        self.end_sec - self.start_sec
    }
}

/// Verbatim supporting artifacts, kept for traceability.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawArtifacts {
    pub transcript: Option<String>,
    pub storyboard: Option<Vec<Value>>,
    pub overlays: Option<Vec<Value>>,
    pub hook_span: Option<HookSpan>,
}

/// One video's worth of validated evidence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoringInput {
    pub meta: Meta,
    pub measures: Measures,
    pub raw: Option<RawArtifacts>,
}

impl ScoringInput {
    pub fn storyboard(&self) -> Option<&[Value]> {
        self.raw.as_ref()?.storyboard.as_deref()
    }

    pub fn overlays(&self) -> Option<&[Value]> {
        self.raw.as_ref()?.overlays.as_deref()
    }

    pub fn hook_span(&self) -> Option<HookSpan> {
        self.raw.as_ref()?.hook_span
    }

    /// Every caption present in the input, shareability first.
    pub fn captions(&self) -> impl Iterator<Item = &str> {
        self.measures
            .shareability
            .caption
            .as_deref()
            .into_iter()
            .chain(self.measures.algo.caption.as_deref())
    }
}

// reelscore-core/src/formulas/hook.rs
//! Hook scoring: a pace formulation blended with a content formulation.
//!
//! Pace measures how quickly the opening delivers value and is closest to ground
//! truth, so it dominates the blend. Content scores the optional classifier output
//! describing which attention pattern the hook uses.

use log::debug;
use reelscore_curves::curves::Piecewise;
use reelscore_curves::entropy::{dominance, normalized_entropy};
use reelscore_curves::scoring::blend;

use super::Formula;
use crate::input::{ContinuousHook, Generation, HookContent, HookMeasures, HookSpan, LegacyHook, ScoringInput};
use crate::output::{Dimension, HookBreakdown};

/// Share of the pace formulation when both formulations are available.
pub const PACE_BLEND_WEIGHT: f64 = 0.7;

/// Single-peaked response over time-to-value, optimum 3-5 seconds.
const PACE_CURVE: Piecewise<'static> = Piecewise::new(&[
    (0.0, 40.0),
    (1.0, 70.0),
    (3.0, 100.0),
    (5.0, 100.0),
    (8.0, 70.0),
    (12.0, 30.0),
    (20.0, 20.0),
]);

const NEUTRAL_PACE_BASE: f64 = 60.0;

const ATTENTION_PATTERNS: [&str; 7] = [
    "shock",
    "curiosity",
    "question",
    "controversy",
    "surprise",
    "challenge",
    "secret",
];

const ATTENTION_TYPE_BONUS: f64 = 25.0;
const OTHER_TYPE_BONUS: f64 = 5.0;
const UNKNOWN_TYPE_BONUS: f64 = 10.0;

const EFFECTIVENESS_SHARE: f64 = 0.4;

const CONFIDENCE_MAX: f64 = 40.0;
const MODALITY_MAX: f64 = 25.0;
const VISUAL_EVIDENCE_BONUS: f64 = 12.0;
const SPOKEN_QUESTION_BONUS: f64 = 12.0;
const OVERLAY_WORDS_BONUS: f64 = 11.0;
const MIN_OVERLAY_WORDS: u64 = 3;
const RISK_MULTIPLIER: f64 = 0.75;

pub struct HookFormula;

impl HookFormula {
    /// Both hook formulations, before blending.
    pub fn breakdown(input: &ScoringInput) -> HookBreakdown {
        HookBreakdown {
            pace: pace_score(&input.measures.hook, input.hook_span()),
            content: input.measures.hook_content.as_ref().and_then(content_score),
        }
    }
}

impl Formula for HookFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Hook
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        let HookBreakdown { pace, content } = Self::breakdown(input);
        debug!("Hook pace: {:?}, content: {:?}", pace, content);
        blend(pace, content, PACE_BLEND_WEIGHT)
    }
}

/// Bonus for the discrete hook `type` tag.
fn type_component(hook_type: Option<&str>) -> f64 {
    match hook_type.map(str::trim) {
        None => UNKNOWN_TYPE_BONUS,
        Some("") => 0.0,
        Some(t) => {
            let t = t.to_lowercase();
            if ATTENTION_PATTERNS.iter().any(|p| t.contains(p)) {
                ATTENTION_TYPE_BONUS
            } else {
                OTHER_TYPE_BONUS
            }
        }
    }
}

/// Mean modulation factor of the continuous opening signals, each in `0.8..=1.2`.
fn modulation(signals: &ContinuousHook) -> Option<f64> {
    let factors: Vec<f64> = [
        signals.first_frame_face_present_pct.map(|pct| pct / 100.0),
        signals.first_2s_motion_intensity,
    ]
    .into_iter()
    .flatten()
    .map(|s| 0.8 + 0.4 * s)
    .collect();

    if factors.is_empty() {
        None
    } else {
        Some(factors.iter().sum::<f64>() / factors.len() as f64)
    }
}

/// Pace formulation. `None` when no pace signal of either generation is present.
pub fn pace_score(hook: &HookMeasures, span: Option<HookSpan>) -> Option<f64> {
    let (legacy, continuous): (Option<&LegacyHook>, Option<&ContinuousHook>) = match hook {
        Generation::Neither if span.is_none() => return None,
        Generation::Neither => (None, None),
        Generation::Legacy(l) => (Some(l), None),
        Generation::Continuous(c) => (None, Some(c)),
        Generation::Both(l, c) => (Some(l), Some(c)),
    };

    let time_to_value = continuous
        .and_then(|c| c.time_to_value_sec)
        .or_else(|| legacy.and_then(|l| l.duration_sec))
        .or_else(|| span.map(|s| s.length()));

    let mut base = time_to_value.map_or(NEUTRAL_PACE_BASE, |t| PACE_CURVE.eval(t));
    if let Some(factor) = continuous.and_then(modulation) {
        base = (base * factor).min(100.0);
    }

    let mut pace = 0.75 * base + type_component(legacy.and_then(|l| l.hook_type.as_deref()));

    if let Some(effectiveness) = legacy.and_then(|l| l.effectiveness_score) {
        pace = (1.0 - EFFECTIVENESS_SHARE) * pace + EFFECTIVENESS_SHARE * (effectiveness * 10.0);
    }

    Some(pace)
}

/// Content formulation. `None` when the classification carries no fields.
pub fn content_score(content: &HookContent) -> Option<f64> {
    if *content == HookContent::default() {
        return None;
    }

    let confidence = match &content.hook_type_probs {
        Some(probs) if !probs.is_empty() => {
            CONFIDENCE_MAX * probs.values().fold(0.0_f64, |acc, p| acc.max(*p))
        }
        _ => CONFIDENCE_MAX / 2.0,
    };

    let modality = match content.modality_attribution {
        Some(m) if m.audio.is_some() || m.visual.is_some() || m.overlay.is_some() => {
            let shares = [
                m.audio.unwrap_or(0.0),
                m.visual.unwrap_or(0.0),
                m.overlay.unwrap_or(0.0),
            ];
            MODALITY_MAX * normalized_entropy(&shares).max(dominance(&shares))
        }
        _ => MODALITY_MAX / 2.0,
    };

    let mut catalysts = 0.0;
    if content.visual_evidence_present == Some(true) {
        catalysts += VISUAL_EVIDENCE_BONUS;
    }
    if content.spoken_question_present == Some(true) {
        catalysts += SPOKEN_QUESTION_BONUS;
    }
    if content.overlay_words_first_2s.is_some_and(|w| w >= MIN_OVERLAY_WORDS) {
        catalysts += OVERLAY_WORDS_BONUS;
    }

    let mut score = confidence + modality + catalysts;

    let risky = content
        .hook_risk_flags
        .as_ref()
        .is_some_and(|flags| flags.values().any(|f| *f));
    if risky {
        score *= RISK_MULTIPLIER;
    }

    Some(score)
}

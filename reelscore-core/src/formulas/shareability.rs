// reelscore-core/src/formulas/shareability.rs
//! Shareability: readable caption, explicit call-to-action, save-worthiness.

use reelscore_curves::scoring::weighted_mean;

use super::{bool_score, caption_length_score, Formula};
use crate::input::ScoringInput;
use crate::output::Dimension;

const CAPTION_WEIGHT: f64 = 0.5;
const CTA_WEIGHT: f64 = 0.3;
const SAVE_WEIGHT: f64 = 0.2;

pub struct ShareabilityFormula;

impl Formula for ShareabilityFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Shareability
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        let s = &input.measures.shareability;
        weighted_mean(&[
            (s.caption.as_deref().map(caption_length_score), CAPTION_WEIGHT),
            (bool_score(s.cta_present, 100.0, 0.0), CTA_WEIGHT),
            (s.save_signal_strength.map(|v| 100.0 * v), SAVE_WEIGHT),
        ])
    }
}

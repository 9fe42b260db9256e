// reelscore-core/src/formulas/visuals.rs
//! Visuals: text overlays and edit pacing.

use reelscore_curves::curves::Piecewise;

use super::{bool_score, Formula};
use crate::input::ScoringInput;
use crate::output::Dimension;

const OVERLAY_PRESENT: f64 = 30.0;
const OVERLAY_UNKNOWN: f64 = 15.0;
const EDIT_UNKNOWN: f64 = 35.0;

/// Cuts per 10 seconds. More cuts help up to a point, then returns diminish.
const EDIT_RATE_CURVE: Piecewise<'static> =
    Piecewise::new(&[(0.0, 10.0), (3.0, 70.0), (6.0, 70.0), (12.0, 40.0)]);

pub struct VisualsFormula;

impl Formula for VisualsFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Visuals
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        let visuals = &input.measures.visuals;
        let overlay = visuals
            .overlay_present
            .or_else(|| input.overlays().map(|o| !o.is_empty()));

        // No overlay signal and no edit rate is unobserved, not bad.
        if overlay.is_none() && visuals.edit_rate_per_10s.is_none() {
            return None;
        }

        let overlay_component = bool_score(overlay, OVERLAY_PRESENT, 0.0).unwrap_or(OVERLAY_UNKNOWN);
        let edit_component = visuals
            .edit_rate_per_10s
            .map_or(EDIT_UNKNOWN, |r| EDIT_RATE_CURVE.eval(r));

        Some(overlay_component + edit_component)
    }
}

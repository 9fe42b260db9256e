// reelscore-core/src/formulas/relatability.rs
//! Relatability: interaction relative to audience size.
//!
//! Smaller accounts with proportionally higher interaction rates score higher than
//! raw engagement volume alone would suggest.

use reelscore_curves::curves::saturate_score;

use super::Formula;
use crate::input::ScoringInput;
use crate::output::Dimension;

/// Interaction rate at which ~63% of the ceiling is reached.
const RATE_SCALE: f64 = 0.06;
const NEUTRAL_BASE: f64 = 50.0;
/// Follower count (as a power of ten) beyond which no small-account boost applies.
const LARGE_ACCOUNT_LOG10: f64 = 7.0;
const MAX_SIZE_BOOST: f64 = 0.5;
const SAVE_SIGNAL_BONUS: f64 = 10.0;

pub struct RelatabilityFormula;

/// Boost factor in `1.0..=1.5`, larger for smaller audiences.
fn audience_factor(followers: f64) -> f64 {
    let size = ((followers + 1.0).log10() / LARGE_ACCOUNT_LOG10).min(1.0);
    1.0 + MAX_SIZE_BOOST * (1.0 - size)
}

impl Formula for RelatabilityFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Relatability
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        let engagement = &input.measures.engagement;
        let save_signal = input.measures.shareability.save_signal_strength;
        let interactions = engagement.interactions();

        if interactions.is_none() && save_signal.is_none() {
            return None;
        }

        let followers = input.meta.followers;
        let denominator = engagement
            .views
            .filter(|v| *v > 0)
            .map(|v| v as f64)
            .or_else(|| followers.filter(|f| *f > 0.0));

        let base = match (interactions, denominator) {
            (Some(i), Some(d)) => saturate_score((i as f64 / d).min(1.0), RATE_SCALE),
            _ => NEUTRAL_BASE,
        };

        let boosted = base * followers.map_or(1.0, audience_factor);
        let bonus = save_signal.map_or(0.0, |s| SAVE_SIGNAL_BONUS * s);

        Some((boosted + bonus).min(100.0))
    }
}

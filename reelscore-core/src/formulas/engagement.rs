// reelscore-core/src/formulas/engagement.rs
//! Engagement: like, comment and share rates, each on its own saturation curve.
//!
//! The best available rate dominates, so a strong like-rate alone is enough to
//! land above the midpoint.

use log::warn;
use reelscore_curves::curves::saturate_score;
use reelscore_curves::scoring::mean_present;

use super::Formula;
use crate::input::ScoringInput;
use crate::output::Dimension;

const LIKE_RATE_SCALE: f64 = 0.05;
const COMMENT_RATE_SCALE: f64 = 0.005;
const SHARE_RATE_SCALE: f64 = 0.01;
const BEST_WEIGHT: f64 = 0.8;
const NEUTRAL_SCORE: f64 = 50.0;

pub struct EngagementFormula;

impl Formula for EngagementFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Engagement
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        let e = &input.measures.engagement;
        if e.views.is_none() && e.interactions().is_none() {
            return None;
        }

        let Some(views) = e.views.filter(|v| *v > 0).map(|v| v as f64) else {
            return Some(NEUTRAL_SCORE);
        };

        if e.likes.is_some_and(|l| l as f64 > views) {
            warn!("Engagement reports more likes than views; rates are capped at 100%.");
        }

        let rate = |count: Option<u64>, scale: f64| {
            count.map(|c| saturate_score((c as f64 / views).min(1.0), scale))
        };
        let rates = [
            rate(e.likes, LIKE_RATE_SCALE),
            rate(e.comments, COMMENT_RATE_SCALE),
            rate(e.shares, SHARE_RATE_SCALE),
        ];

        let best = rates.iter().flatten().fold(None, |acc: Option<f64>, r| {
            Some(acc.map_or(*r, |a| a.max(*r)))
        });

        match (best, mean_present(&rates)) {
            (Some(best), Some(mean)) => Some(BEST_WEIGHT * best + (1.0 - BEST_WEIGHT) * mean),
            _ => Some(NEUTRAL_SCORE),
        }
    }
}

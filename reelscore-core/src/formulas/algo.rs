// reelscore-core/src/formulas/algo.rs
//! Algorithm fit: caption length, hashtag discipline, niche mix and post timing.

use reelscore_curves::curves::Piecewise;
use reelscore_curves::scoring::weighted_mean;

use super::{bool_score, caption_length_score, count_hashtags, Formula};
use crate::input::{AlgoMeasures, ScoringInput};
use crate::output::Dimension;

/// A handful of hashtags is ideal; a double-digit count reads as spam.
const HASHTAG_CURVE: Piecewise<'static> =
    Piecewise::new(&[(0.0, 40.0), (1.0, 100.0), (5.0, 100.0), (9.0, 40.0), (10.0, 10.0)]);

const CAPTION_WEIGHT: f64 = 0.3;
const HASHTAG_WEIGHT: f64 = 0.3;
const NICHE_WEIGHT: f64 = 0.2;
const TIMING_WEIGHT: f64 = 0.2;

pub struct AlgoFormula;

/// Explicit hashtag count, else the number of `#tags` in the algo caption.
pub(crate) fn hashtag_count(algo: &AlgoMeasures) -> Option<u64> {
    algo.hashtag_count
        .or_else(|| algo.caption.as_deref().map(|c| count_hashtags(c) as u64))
}

impl Formula for AlgoFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Algo
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        let algo = &input.measures.algo;
        weighted_mean(&[
            (algo.caption.as_deref().map(caption_length_score), CAPTION_WEIGHT),
            (hashtag_count(algo).map(|n| HASHTAG_CURVE.eval(n as f64)), HASHTAG_WEIGHT),
            (bool_score(algo.niche_mix_ok, 100.0, 20.0), NICHE_WEIGHT),
            (bool_score(algo.posted_optimal_time, 100.0, 30.0), TIMING_WEIGHT),
        ])
    }
}

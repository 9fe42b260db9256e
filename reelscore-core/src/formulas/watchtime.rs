// reelscore-core/src/formulas/watchtime.rs
//! Watchtime: single-peaked length curve boosted by observed retention.

use reelscore_curves::curves::Piecewise;
use reelscore_curves::scoring::{mean_present, weighted_mean};

use super::Formula;
use crate::input::ScoringInput;
use crate::output::Dimension;

/// Optimum band 15-45 seconds; both very short and very long videos lose.
pub(crate) const LENGTH_CURVE: Piecewise<'static> = Piecewise::new(&[
    (0.0, 50.0),
    (15.0, 100.0),
    (45.0, 100.0),
    (60.0, 80.0),
    (120.0, 50.0),
    (180.0, 20.0),
]);

const LENGTH_WEIGHT: f64 = 0.4;
const RETENTION_WEIGHT: f64 = 0.6;

pub struct WatchtimeFormula;

impl Formula for WatchtimeFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Watchtime
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        let watch = &input.measures.watchtime;
        let length = input.meta.length_sec.map(|l| LENGTH_CURVE.eval(l));
        let retention = mean_present(&[watch.avg_watch_pct, watch.completion_rate]);

        weighted_mean(&[(length, LENGTH_WEIGHT), (retention, RETENTION_WEIGHT)])
    }
}

// reelscore-core/src/formulas/audio.rs
//! Audio: trending or well-executed original sound, plus continuous mix signals.

use reelscore_curves::scoring::mean_present;

use super::Formula;
use crate::input::{ContinuousAudio, Generation, LegacyAudio, ScoringInput};
use crate::output::Dimension;

const TRENDING_SCORE: f64 = 85.0;
const ORIGINAL_FLOOR: f64 = 40.0;
const ORIGINAL_RANGE: f64 = 45.0;
const NOT_TRENDING_SCORE: f64 = 45.0;
/// Music share of the mix that keeps the voice on top.
const IDEAL_MUSIC_BALANCE: f64 = 0.3;

pub struct AudioFormula;

fn legacy_score(audio: &LegacyAudio) -> f64 {
    match (audio.trending_sound, audio.original_sound_quality) {
        (Some(true), _) => TRENDING_SCORE,
        (_, Some(q)) => ORIGINAL_FLOOR + ORIGINAL_RANGE * q,
        _ => NOT_TRENDING_SCORE,
    }
}

/// Mean of whichever continuous signals are known.
fn continuous_score(audio: &ContinuousAudio) -> Option<f64> {
    let balance = audio.music_voice_balance.map(|b| {
        let distance = (b - IDEAL_MUSIC_BALANCE).abs() / (1.0 - IDEAL_MUSIC_BALANCE);
        100.0 * (1.0 - distance.min(1.0))
    });
    mean_present(&[
        balance,
        audio.beat_sync_score.map(|s| 100.0 * s),
        audio.speech_intelligibility.map(|s| 100.0 * s),
    ])
}

impl Formula for AudioFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Audio
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        match &input.measures.audio {
            Generation::Neither => None,
            Generation::Legacy(l) => Some(legacy_score(l)),
            Generation::Continuous(c) => continuous_score(c),
            Generation::Both(l, c) => {
                let legacy = legacy_score(l);
                Some(continuous_score(c).map_or(legacy, |c| (legacy + c) / 2.0))
            }
        }
    }
}

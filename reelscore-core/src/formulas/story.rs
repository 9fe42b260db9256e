// reelscore-core/src/formulas/story.rs
//! Narrative structure: saturating reward for observed beats plus an arc bonus.

use reelscore_curves::curves::saturate;

use super::Formula;
use crate::input::ScoringInput;
use crate::output::Dimension;

const BEATS_MAX: f64 = 70.0;
/// Beats at which ~63% of the beat component is reached.
const BEATS_SCALE: f64 = 2.5;
const NEUTRAL_BEATS: f64 = BEATS_MAX / 2.0;
const ARC_BONUS: f64 = 25.0;
/// Storyboard entries that imply an arc when none was explicitly reported.
const MIN_STORYBOARD_ARC: usize = 2;

pub struct StoryFormula;

impl Formula for StoryFormula {
    fn dimension(&self) -> Dimension {
        Dimension::Story
    }

    fn evaluate(&self, input: &ScoringInput) -> Option<f64> {
        let story = &input.measures.story;
        let storyboard = input.storyboard();

        if story.beats_count.is_none() && story.arc_detected.is_none() && storyboard.is_none() {
            return None;
        }

        let beats = story
            .beats_count
            .map(|b| b as f64)
            .or_else(|| storyboard.map(|s| s.len() as f64));

        let beat_component = beats.map_or(NEUTRAL_BEATS, |b| BEATS_MAX * saturate(b, BEATS_SCALE));

        let arc = match story.arc_detected {
            Some(detected) => detected,
            None => storyboard.is_some_and(|s| s.len() >= MIN_STORYBOARD_ARC),
        };

        let score = beat_component + if arc { ARC_BONUS } else { 0.0 };
        Some(score.min(100.0))
    }
}

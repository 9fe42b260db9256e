// reelscore-core/src/formulas/mod.rs
//! Per-dimension scoring formulas.
//!
//! Each dimension is a separate file within this directory and implements the
//! [`Formula`] trait. A formula is a pure function of the validated input: it
//! returns `None` when its inputs are entirely empty and otherwise a score in
//! `[0, 100]`, substituting neutral defaults for absent sub-signals.
//!
//! Formulas never clamp a result into range to hide a mistake; the engine checks
//! every value and reports violations as a `FormulaError`.
//!
//! # License
//! MIT OR Apache-2.0

pub mod algo;
pub mod audio;
pub mod engagement;
pub mod hook;
pub mod penalties;
pub mod relatability;
pub mod shareability;
pub mod story;
pub mod visuals;
pub mod watchtime;

use once_cell::sync::Lazy;
use regex::Regex;
use reelscore_curves::curves::Piecewise;

use crate::input::ScoringInput;
use crate::output::Dimension;

/// A single dimension's scoring function.
pub trait Formula: Send + Sync {
    /// The dimension this formula scores.
    fn dimension(&self) -> Dimension;

    /// Scores the dimension, or `None` if none of its inputs are present.
    fn evaluate(&self, input: &ScoringInput) -> Option<f64>;
}

/// The nine standard formulas, in output order.
pub static STANDARD_FORMULAS: [&dyn Formula; 9] = [
    &hook::HookFormula,
    &story::StoryFormula,
    &relatability::RelatabilityFormula,
    &visuals::VisualsFormula,
    &audio::AudioFormula,
    &watchtime::WatchtimeFormula,
    &engagement::EngagementFormula,
    &shareability::ShareabilityFormula,
    &algo::AlgoFormula,
];

/// Readable caption band, shared by shareability and algo fit.
pub(crate) const CAPTION_LENGTH_CURVE: Piecewise<'static> = Piecewise::new(&[
    (0.0, 0.0),
    (40.0, 100.0),
    (150.0, 100.0),
    (300.0, 40.0),
    (600.0, 10.0),
]);

static HASHTAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[\p{L}\p{N}_]+").expect("hashtag pattern is valid"));

/// Number of `#tag` tokens in a caption.
pub(crate) fn count_hashtags(caption: &str) -> usize {
    HASHTAG_REGEX.find_iter(caption).count()
}

/// Total characters taken up by `#tag` tokens in a caption.
pub(crate) fn hashtag_chars(caption: &str) -> usize {
    HASHTAG_REGEX
        .find_iter(caption)
        .map(|m| m.as_str().chars().count())
        .sum()
}

/// Caption length in characters (not bytes).
pub(crate) fn caption_length_score(caption: &str) -> f64 {
    CAPTION_LENGTH_CURVE.eval(caption.trim().chars().count() as f64)
}

pub(crate) fn bool_score(flag: Option<bool>, yes: f64, no: f64) -> Option<f64> {
    flag.map(|f| if f { yes } else { no })
}

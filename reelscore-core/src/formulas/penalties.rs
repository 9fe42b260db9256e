// reelscore-core/src/formulas/penalties.rs
//! Bounded, non-negative deductions for negative signals.
//!
//! Each factor is capped on its own and the total is capped again, so penalties
//! reduce a score without being able to zero out a strong video on their own.

use log::debug;

use super::algo::hashtag_count;
use super::{count_hashtags, hashtag_chars};
use crate::input::ScoringInput;
use crate::output::PenaltyBreakdown;

pub const MAX_TOTAL_PENALTY: f64 = 25.0;

const SPAM_HASHTAG_THRESHOLD: u64 = 10;
const SPAM_HASHTAG_BASE: f64 = 5.0;
const SPAM_HASHTAG_MAX: f64 = 10.0;
const DEAD_ENGAGEMENT_MIN_VIEWS: u64 = 1_000;
const DEAD_ENGAGEMENT_RATE: f64 = 0.002;
const DEAD_ENGAGEMENT_PENALTY: f64 = 8.0;
const SPAM_MAX: f64 = 15.0;

const EMPTY_CAPTION_PENALTY: f64 = 4.0;
const EMPTY_HOOK_PENALTY: f64 = 4.0;

const LENGTH_LIMIT_SEC: f64 = 90.0;
const LENGTH_SECONDS_PER_POINT: f64 = 5.0;
const LENGTH_MAX: f64 = 10.0;

const MIN_SHOUTING_LETTERS: usize = 10;
const SHOUTING_PENALTY: f64 = 3.0;
const HASHTAG_WALL_PENALTY: f64 = 2.0;

fn spam(input: &ScoringInput) -> f64 {
    let mut penalty = 0.0;

    let hashtags = hashtag_count(&input.measures.algo).or_else(|| {
        input
            .measures
            .shareability
            .caption
            .as_deref()
            .map(|c| count_hashtags(c) as u64)
    });
    if let Some(n) = hashtags.filter(|n| *n >= SPAM_HASHTAG_THRESHOLD) {
        penalty += (SPAM_HASHTAG_BASE + (n - SPAM_HASHTAG_THRESHOLD) as f64).min(SPAM_HASHTAG_MAX);
    }

    let e = &input.measures.engagement;
    if let (Some(views), Some(interactions)) = (e.views, e.interactions()) {
        if views >= DEAD_ENGAGEMENT_MIN_VIEWS
            && (interactions as f64 / views as f64) < DEAD_ENGAGEMENT_RATE
        {
            penalty += DEAD_ENGAGEMENT_PENALTY;
        }
    }

    penalty.min(SPAM_MAX)
}

fn low_quality(input: &ScoringInput) -> f64 {
    let mut penalty = 0.0;

    if input.captions().any(|c| c.trim().is_empty()) {
        penalty += EMPTY_CAPTION_PENALTY;
    }

    if let Some(hook) = input.measures.hook.legacy() {
        let blank = |s: &Option<String>| s.as_deref().is_some_and(|v| v.trim().is_empty());
        if blank(&hook.text) && blank(&hook.hook_type) {
            penalty += EMPTY_HOOK_PENALTY;
        }
    }

    penalty
}

fn excessive_length(input: &ScoringInput) -> f64 {
    match input.meta.length_sec {
        Some(len) if len > LENGTH_LIMIT_SEC => {
            ((len - LENGTH_LIMIT_SEC) / LENGTH_SECONDS_PER_POINT).min(LENGTH_MAX)
        }
        _ => 0.0,
    }
}

fn is_shouting(caption: &str) -> bool {
    let letters: Vec<char> = caption.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= MIN_SHOUTING_LETTERS && letters.iter().all(|c| c.is_uppercase())
}

fn is_hashtag_wall(caption: &str) -> bool {
    let visible = caption.chars().filter(|c| !c.is_whitespace()).count();
    visible > 0 && hashtag_chars(caption) * 2 > visible
}

fn formatting(input: &ScoringInput) -> f64 {
    let mut penalty = 0.0;
    if input.captions().any(is_shouting) {
        penalty += SHOUTING_PENALTY;
    }
    if input.captions().any(is_hashtag_wall) {
        penalty += HASHTAG_WALL_PENALTY;
    }
    penalty
}

/// Evaluates every penalty factor independently.
pub fn assess(input: &ScoringInput) -> PenaltyBreakdown {
    let breakdown = PenaltyBreakdown {
        spam: spam(input),
        low_quality: low_quality(input),
        excessive_length: excessive_length(input),
        formatting: formatting(input),
    };
    debug!("Penalty breakdown: {:?}", breakdown);
    breakdown
}

/// Total deduction applied to the weighted composite.
pub fn total(breakdown: &PenaltyBreakdown) -> f64 {
    breakdown.sum().min(MAX_TOTAL_PENALTY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{EngagementMeasures, Generation, LegacyHook};

    #[test]
    fn test_clean_input_has_no_penalties() {
        let mut input = ScoringInput::default();
        input.meta.length_sec = Some(30.0);
        input.measures.algo.caption = Some("Quick pasta for busy weeknights #dinner".into());
        input.measures.algo.hashtag_count = Some(1);
        let breakdown = assess(&input);
        assert_eq!(breakdown, PenaltyBreakdown::default());
        assert_eq!(total(&breakdown), 0.0);
    }

    #[test]
    fn test_hashtag_spam() {
        let mut input = ScoringInput::default();
        input.measures.algo.hashtag_count = Some(15);
        assert_eq!(assess(&input).spam, 10.0);

        input.measures.algo.hashtag_count = Some(11);
        assert_eq!(assess(&input).spam, 6.0);
    }

    #[test]
    fn test_dead_engagement() {
        let mut input = ScoringInput::default();
        input.measures.engagement = EngagementMeasures {
            views: Some(50_000),
            likes: Some(20),
            comments: Some(1),
            shares: Some(0),
        };
        assert_eq!(assess(&input).spam, DEAD_ENGAGEMENT_PENALTY);

        input.measures.engagement.views = Some(500);
        assert_eq!(assess(&input).spam, 0.0);
    }

    #[test]
    fn test_empty_caption_and_hook() {
        let mut input = ScoringInput::default();
        input.measures.shareability.caption = Some("   ".into());
        input.measures.hook = Generation::Legacy(LegacyHook {
            duration_sec: Some(8.0),
            text: Some(String::new()),
            hook_type: Some(String::new()),
            effectiveness_score: None,
        });
        assert_eq!(assess(&input).low_quality, 8.0);
    }

    #[test]
    fn test_absent_hook_text_is_not_penalized() {
        let mut input = ScoringInput::default();
        input.measures.hook = Generation::Legacy(LegacyHook {
            duration_sec: Some(3.0),
            ..Default::default()
        });
        assert_eq!(assess(&input).low_quality, 0.0);
    }

    #[test]
    fn test_excessive_length_bounded() {
        let mut input = ScoringInput::default();
        input.meta.length_sec = Some(120.0);
        assert_eq!(assess(&input).excessive_length, 6.0);

        input.meta.length_sec = Some(900.0);
        assert_eq!(assess(&input).excessive_length, LENGTH_MAX);
    }

    #[test]
    fn test_formatting() {
        let mut input = ScoringInput::default();
        input.measures.shareability.caption = Some("WATCH THIS BEFORE IT IS GONE".into());
        input.measures.algo.caption = Some("#a #b #c #d #e ok".into());
        assert_eq!(assess(&input).formatting, SHOUTING_PENALTY + HASHTAG_WALL_PENALTY);
    }

    #[test]
    fn test_total_is_capped() {
        let worst = PenaltyBreakdown {
            spam: 15.0,
            low_quality: 8.0,
            excessive_length: 10.0,
            formatting: 5.0,
        };
        assert_eq!(total(&worst), MAX_TOTAL_PENALTY);
    }
}

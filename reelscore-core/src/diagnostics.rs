//! Coverage accounting for the optional input fields.
//!
//! Every measurement group reports how many of its tracked fields are populated.
//! The same per-group counts feed both the reported `diagnostics` block and the
//! `incomplete`/`low_confidence` flags, so the two can never disagree.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;

use log::debug;

use crate::config::ConfidenceThresholds;
use crate::input::{
    AlgoMeasures, AudioMeasures, ContinuousAudio, ContinuousHook, EngagementMeasures, Generation,
    HookContent, HookMeasures, LegacyAudio, LegacyHook, Meta, ScoringInput, ShareabilityMeasures,
    StoryMeasures, VisualMeasures, WatchtimeMeasures,
};
use crate::output::{Coverage, Diagnostics, Flags, MeasureGroup};

/// A group of optional fields whose population can be counted.
pub trait Tracked {
    /// `is_some()` for each tracked field, in declaration order.
    fn field_presence(&self) -> Vec<bool>;

    fn coverage(&self) -> Coverage {
        let presence = self.field_presence();
        Coverage::new(presence.iter().filter(|p| **p).count(), presence.len())
    }
}

impl Tracked for Meta {
    fn field_presence(&self) -> Vec<bool> {
        vec![
            self.followers.is_some(),
            self.length_sec.is_some(),
            self.published_at.is_some(),
        ]
    }
}

impl Tracked for LegacyHook {
    fn field_presence(&self) -> Vec<bool> {
        vec![
            self.duration_sec.is_some(),
            self.text.is_some(),
            self.hook_type.is_some(),
            self.effectiveness_score.is_some(),
        ]
    }
}

impl Tracked for ContinuousHook {
    fn field_presence(&self) -> Vec<bool> {
        vec![
            self.time_to_value_sec.is_some(),
            self.first_frame_face_present_pct.is_some(),
            self.first_2s_motion_intensity.is_some(),
        ]
    }
}

impl Tracked for StoryMeasures {
    fn field_presence(&self) -> Vec<bool> {
        vec![self.beats_count.is_some(), self.arc_detected.is_some()]
    }
}

impl Tracked for VisualMeasures {
    fn field_presence(&self) -> Vec<bool> {
        vec![self.overlay_present.is_some(), self.edit_rate_per_10s.is_some()]
    }
}

impl Tracked for LegacyAudio {
    fn field_presence(&self) -> Vec<bool> {
        vec![self.trending_sound.is_some(), self.original_sound_quality.is_some()]
    }
}

impl Tracked for ContinuousAudio {
    fn field_presence(&self) -> Vec<bool> {
        vec![
            self.music_voice_balance.is_some(),
            self.beat_sync_score.is_some(),
            self.speech_intelligibility.is_some(),
        ]
    }
}

impl Tracked for WatchtimeMeasures {
    fn field_presence(&self) -> Vec<bool> {
        vec![self.avg_watch_pct.is_some(), self.completion_rate.is_some()]
    }
}

impl Tracked for EngagementMeasures {
    fn field_presence(&self) -> Vec<bool> {
        vec![
            self.views.is_some(),
            self.likes.is_some(),
            self.comments.is_some(),
            self.shares.is_some(),
        ]
    }
}

impl Tracked for ShareabilityMeasures {
    fn field_presence(&self) -> Vec<bool> {
        vec![
            self.caption.is_some(),
            self.cta_present.is_some(),
            self.save_signal_strength.is_some(),
        ]
    }
}

impl Tracked for AlgoMeasures {
    fn field_presence(&self) -> Vec<bool> {
        vec![
            self.caption.is_some(),
            self.hashtag_count.is_some(),
            self.niche_mix_ok.is_some(),
            self.posted_optimal_time.is_some(),
        ]
    }
}

impl Tracked for HookContent {
    fn field_presence(&self) -> Vec<bool> {
        vec![
            self.hook_type_probs.is_some(),
            self.modality_attribution.is_some(),
            self.visual_evidence_present.is_some(),
            self.spoken_question_present.is_some(),
            self.overlay_words_first_2s.is_some(),
            self.hook_risk_flags.is_some(),
        ]
    }
}

/// A dual-schema group tracks whichever generation(s) it actually uses.
/// With neither present it falls back to the legacy (baseline) field set.
impl<L, C> Tracked for Generation<L, C>
where
    L: Tracked + Default,
    C: Tracked,
{
    fn field_presence(&self) -> Vec<bool> {
        match self {
            Generation::Neither => L::default().field_presence(),
            Generation::Legacy(l) => l.field_presence(),
            Generation::Continuous(c) => c.field_presence(),
            Generation::Both(l, c) => {
                let mut presence = l.field_presence();
                presence.extend(c.field_presence());
                presence
            }
        }
    }
}

fn group_coverage(input: &ScoringInput) -> BTreeMap<MeasureGroup, Coverage> {
    let m = &input.measures;
    let hook: &HookMeasures = &m.hook;
    let audio: &AudioMeasures = &m.audio;

    let mut coverage = BTreeMap::new();
    coverage.insert(MeasureGroup::Meta, input.meta.coverage());
    coverage.insert(MeasureGroup::Hook, hook.coverage());
    if let Some(content) = &m.hook_content {
        coverage.insert(MeasureGroup::HookContent, content.coverage());
    }
    coverage.insert(MeasureGroup::Story, m.story.coverage());
    coverage.insert(MeasureGroup::Visuals, m.visuals.coverage());
    coverage.insert(MeasureGroup::Audio, audio.coverage());
    coverage.insert(MeasureGroup::Watchtime, m.watchtime.coverage());
    coverage.insert(MeasureGroup::Engagement, m.engagement.coverage());
    coverage.insert(MeasureGroup::Shareability, m.shareability.coverage());
    coverage.insert(MeasureGroup::Algo, m.algo.coverage());
    coverage
}

/// Counts populated tracked fields across every group.
pub fn compute_diagnostics(input: &ScoringInput) -> Diagnostics {
    let coverage = group_coverage(input);
    let present_fields: usize = coverage.values().map(|c| c.present).sum();
    let tracked_fields: usize = coverage.values().map(|c| c.tracked).sum();
    let overall_confidence = if tracked_fields == 0 {
        0.0
    } else {
        present_fields as f64 / tracked_fields as f64
    };

    debug!(
        "Coverage: {}/{} tracked fields present (confidence {:.3})",
        present_fields, tracked_fields, overall_confidence
    );

    Diagnostics {
        coverage,
        present_fields,
        tracked_fields,
        missing_fields: tracked_fields - present_fields,
        overall_confidence,
    }
}

/// Derives the output flags from the diagnostics block.
pub fn derive_flags(diagnostics: &Diagnostics, thresholds: &ConfidenceThresholds) -> Flags {
    Flags {
        incomplete: diagnostics.missing_fields > thresholds.max_missing_fields,
        low_confidence: diagnostics.overall_confidence < thresholds.low_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_tracks_baseline_schema() {
        let d = compute_diagnostics(&ScoringInput::default());
        // meta 3 + hook 4 + story 2 + visuals 2 + audio 2 + watchtime 2
        // + engagement 4 + shareability 3 + algo 4
        assert_eq!(d.tracked_fields, 26);
        assert_eq!(d.present_fields, 0);
        assert_eq!(d.missing_fields, 26);
        assert_eq!(d.overall_confidence, 0.0);
        assert!(!d.coverage.contains_key(&MeasureGroup::HookContent));

        let flags = derive_flags(&d, &ConfidenceThresholds::default());
        assert!(flags.incomplete);
        assert!(flags.low_confidence);
    }

    #[test]
    fn test_continuous_hook_tracks_continuous_set() {
        let mut input = ScoringInput::default();
        input.measures.hook = Generation::Continuous(ContinuousHook {
            time_to_value_sec: Some(1.2),
            ..Default::default()
        });
        let d = compute_diagnostics(&input);
        assert_eq!(d.coverage[&MeasureGroup::Hook], Coverage::new(1, 3));
    }

    #[test]
    fn test_both_generations_track_union() {
        let mut input = ScoringInput::default();
        input.measures.audio = Generation::Both(
            LegacyAudio { trending_sound: Some(true), original_sound_quality: None },
            ContinuousAudio { beat_sync_score: Some(0.5), ..Default::default() },
        );
        let d = compute_diagnostics(&input);
        assert_eq!(d.coverage[&MeasureGroup::Audio], Coverage::new(2, 5));
    }

    #[test]
    fn test_hook_content_counted_when_present() {
        let mut input = ScoringInput::default();
        input.measures.hook_content = Some(HookContent {
            visual_evidence_present: Some(true),
            ..Default::default()
        });
        let d = compute_diagnostics(&input);
        assert_eq!(d.coverage[&MeasureGroup::HookContent], Coverage::new(1, 6));
        assert_eq!(d.tracked_fields, 32);
    }

    #[test]
    fn test_flags_follow_thresholds() {
        let diagnostics = Diagnostics {
            coverage: BTreeMap::new(),
            present_fields: 20,
            tracked_fields: 26,
            missing_fields: 6,
            overall_confidence: 20.0 / 26.0,
        };
        let flags = derive_flags(&diagnostics, &ConfidenceThresholds::default());
        assert!(!flags.incomplete);
        assert!(!flags.low_confidence);

        let strict = ConfidenceThresholds { low_confidence: 0.9, max_missing_fields: 5 };
        let flags = derive_flags(&diagnostics, &strict);
        assert!(flags.incomplete);
        assert!(flags.low_confidence);
    }
}

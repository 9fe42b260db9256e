// File: reelscore-core/src/validators.rs
//! Validation of untyped JSON into a [`ScoringInput`].
//!
//! Every measurement field is optional: absence (or JSON `null`) is valid, a wrong
//! type or an out-of-range value is not. The first violation found is reported with
//! the dotted path of the offending field; nothing is scored from partially valid
//! input.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;

use chrono::DateTime;
use log::debug;
use serde_json::{Map, Value};

use crate::errors::ValidationError;
use crate::input::{
    AlgoMeasures, ContinuousAudio, ContinuousHook, EngagementMeasures, Generation, HookContent,
    HookSpan, LegacyAudio, LegacyHook, Measures, Meta, ModalityAttribution, RawArtifacts,
    ScoringInput, ShareabilityMeasures, StoryMeasures, VisualMeasures, WatchtimeMeasures,
};

type Result<T> = std::result::Result<T, ValidationError>;

/// Borrowed view of a JSON object that knows its own path for error reporting.
struct ObjectReader<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    fn new(path: impl Into<String>, value: &'a Value) -> Result<Self> {
        let path = path.into();
        match value {
            Value::Object(map) => Ok(Self { path, map }),
            other => Err(ValidationError::new(
                display_path(&path),
                format!("expected an object, found {}", type_name(other)),
            )),
        }
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Value for `key`, treating JSON `null` as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn child(&self, key: &str) -> Result<Option<ObjectReader<'a>>> {
        self.get(key)
            .map(|v| ObjectReader::new(self.field_path(key), v))
            .transpose()
    }

    fn number(&self, key: &str) -> Result<Option<f64>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let n = value.as_f64().ok_or_else(|| {
            ValidationError::new(
                self.field_path(key),
                format!("expected a number, found {}", type_name(value)),
            )
        })?;
        if !n.is_finite() {
            return Err(ValidationError::new(self.field_path(key), "must be finite"));
        }
        Ok(Some(n))
    }

    fn bounded(&self, key: &str, min: f64, max: f64) -> Result<Option<f64>> {
        let n = self.number(key)?;
        match n {
            Some(v) if v < min || v > max => Err(ValidationError::new(
                self.field_path(key),
                format!("must lie in [{}, {}], got {}", min, max, v),
            )),
            _ => Ok(n),
        }
    }

    fn non_negative(&self, key: &str) -> Result<Option<f64>> {
        self.bounded(key, 0.0, f64::MAX)
    }

    fn percentage(&self, key: &str) -> Result<Option<f64>> {
        self.bounded(key, 0.0, 100.0)
    }

    fn probability(&self, key: &str) -> Result<Option<f64>> {
        self.bounded(key, 0.0, 1.0)
    }

    /// Non-negative integer. Integral floats (e.g. `1e6`) are accepted.
    fn count(&self, key: &str) -> Result<Option<u64>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        if let Some(n) = value.as_u64() {
            return Ok(Some(n));
        }
        match value.as_f64() {
            Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                Ok(Some(f as u64))
            }
            _ => Err(ValidationError::new(
                self.field_path(key),
                format!("expected a non-negative integer, found {}", describe(value)),
            )),
        }
    }

    fn string(&self, key: &str) -> Result<Option<String>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value.as_str().map(|s| Some(s.to_string())).ok_or_else(|| {
            ValidationError::new(
                self.field_path(key),
                format!("expected a string, found {}", type_name(value)),
            )
        })
    }

    fn boolean(&self, key: &str) -> Result<Option<bool>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value.as_bool().map(Some).ok_or_else(|| {
            ValidationError::new(
                self.field_path(key),
                format!("expected a boolean, found {}", type_name(value)),
            )
        })
    }

    fn array(&self, key: &str) -> Result<Option<Vec<Value>>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value.as_array().map(|a| Some(a.clone())).ok_or_else(|| {
            ValidationError::new(
                self.field_path(key),
                format!("expected an array, found {}", type_name(value)),
            )
        })
    }

    /// Map of string keys to probabilities.
    fn probability_map(&self, key: &str) -> Result<Option<BTreeMap<String, f64>>> {
        let Some(obj) = self.child(key)? else {
            return Ok(None);
        };
        obj.map
            .keys()
            .filter_map(|k| obj.probability(k).transpose().map(|p| p.map(|p| (k.clone(), p))))
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Some)
    }

    /// Map of string keys to booleans.
    fn flag_map(&self, key: &str) -> Result<Option<BTreeMap<String, bool>>> {
        let Some(obj) = self.child(key)? else {
            return Ok(None);
        };
        obj.map
            .keys()
            .filter_map(|k| obj.boolean(k).transpose().map(|b| b.map(|b| (k.clone(), b))))
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Some)
    }

    /// Logs keys this reader does not understand. Unknown keys are not an error.
    fn note_unknown(&self, known: &[&str]) {
        for key in self.map.keys().filter(|k| !known.contains(&k.as_str())) {
            debug!("Ignoring unknown field '{}'.", self.field_path(key));
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "$"
    } else {
        path
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        other => type_name(other).to_string(),
    }
}

/// Validates an untyped JSON document and converts it into a [`ScoringInput`].
pub fn validate_input(value: &Value) -> Result<ScoringInput> {
    let root = ObjectReader::new("", value)?;
    root.note_unknown(&["meta", "measures", "raw"]);

    let meta = match root.child("meta")? {
        Some(obj) => read_meta(&obj)?,
        None => Meta::default(),
    };
    let measures = match root.child("measures")? {
        Some(obj) => read_measures(&obj)?,
        None => Measures::default(),
    };
    let raw = root.child("raw")?.map(|obj| read_raw(&obj)).transpose()?;

    Ok(ScoringInput { meta, measures, raw })
}

fn read_meta(obj: &ObjectReader) -> Result<Meta> {
    obj.note_unknown(&["video_id", "published_at", "followers", "length_sec"]);

    let published_at = obj
        .string("published_at")?
        .map(|s| {
            DateTime::parse_from_rfc3339(&s).map_err(|e| {
                ValidationError::new(
                    obj.field_path("published_at"),
                    format!("expected an RFC 3339 timestamp: {}", e),
                )
            })
        })
        .transpose()?;

    Ok(Meta {
        video_id: obj.string("video_id")?,
        published_at,
        followers: obj.non_negative("followers")?,
        length_sec: obj.non_negative("length_sec")?,
    })
}

fn read_measures(obj: &ObjectReader) -> Result<Measures> {
    obj.note_unknown(&[
        "hook",
        "story",
        "visuals",
        "audio",
        "watchtime",
        "engagement",
        "shareability",
        "algo",
        "hook_content",
    ]);

    Ok(Measures {
        hook: read_group(obj, "hook", read_hook)?.unwrap_or_default(),
        story: read_group(obj, "story", read_story)?.unwrap_or_default(),
        visuals: read_group(obj, "visuals", read_visuals)?.unwrap_or_default(),
        audio: read_group(obj, "audio", read_audio)?.unwrap_or_default(),
        watchtime: read_group(obj, "watchtime", read_watchtime)?.unwrap_or_default(),
        engagement: read_group(obj, "engagement", read_engagement)?.unwrap_or_default(),
        shareability: read_group(obj, "shareability", read_shareability)?.unwrap_or_default(),
        algo: read_group(obj, "algo", read_algo)?.unwrap_or_default(),
        hook_content: read_group(obj, "hook_content", read_hook_content)?,
    })
}

fn read_group<T>(
    parent: &ObjectReader,
    key: &str,
    reader: impl Fn(&ObjectReader) -> Result<T>,
) -> Result<Option<T>> {
    parent.child(key)?.map(|obj| reader(&obj)).transpose()
}

fn read_hook(obj: &ObjectReader) -> Result<Generation<LegacyHook, ContinuousHook>> {
    obj.note_unknown(&[
        "duration_sec",
        "text",
        "type",
        "effectiveness_score",
        "time_to_value_sec",
        "first_frame_face_present_pct",
        "first_2s_motion_intensity",
    ]);

    let legacy = LegacyHook {
        duration_sec: obj.non_negative("duration_sec")?,
        text: obj.string("text")?,
        hook_type: obj.string("type")?,
        effectiveness_score: obj.bounded("effectiveness_score", 0.0, 10.0)?,
    };
    let continuous = ContinuousHook {
        time_to_value_sec: obj.non_negative("time_to_value_sec")?,
        first_frame_face_present_pct: obj.percentage("first_frame_face_present_pct")?,
        first_2s_motion_intensity: obj.probability("first_2s_motion_intensity")?,
    };

    Ok(Generation::from_parts(
        (legacy != LegacyHook::default()).then_some(legacy),
        (continuous != ContinuousHook::default()).then_some(continuous),
    ))
}

fn read_story(obj: &ObjectReader) -> Result<StoryMeasures> {
    obj.note_unknown(&["beats_count", "arc_detected"]);
    Ok(StoryMeasures {
        beats_count: obj.count("beats_count")?,
        arc_detected: obj.boolean("arc_detected")?,
    })
}

fn read_visuals(obj: &ObjectReader) -> Result<VisualMeasures> {
    obj.note_unknown(&["overlay_present", "edit_rate_per_10s"]);
    Ok(VisualMeasures {
        overlay_present: obj.boolean("overlay_present")?,
        edit_rate_per_10s: obj.non_negative("edit_rate_per_10s")?,
    })
}

fn read_audio(obj: &ObjectReader) -> Result<Generation<LegacyAudio, ContinuousAudio>> {
    obj.note_unknown(&[
        "trending_sound",
        "original_sound_quality",
        "music_voice_balance",
        "beat_sync_score",
        "speech_intelligibility",
    ]);

    let legacy = LegacyAudio {
        trending_sound: obj.boolean("trending_sound")?,
        original_sound_quality: obj.probability("original_sound_quality")?,
    };
    let continuous = ContinuousAudio {
        music_voice_balance: obj.probability("music_voice_balance")?,
        beat_sync_score: obj.probability("beat_sync_score")?,
        speech_intelligibility: obj.probability("speech_intelligibility")?,
    };

    Ok(Generation::from_parts(
        (legacy != LegacyAudio::default()).then_some(legacy),
        (continuous != ContinuousAudio::default()).then_some(continuous),
    ))
}

fn read_watchtime(obj: &ObjectReader) -> Result<WatchtimeMeasures> {
    obj.note_unknown(&["avg_watch_pct", "completion_rate"]);
    Ok(WatchtimeMeasures {
        avg_watch_pct: obj.percentage("avg_watch_pct")?,
        completion_rate: obj.percentage("completion_rate")?,
    })
}

fn read_engagement(obj: &ObjectReader) -> Result<EngagementMeasures> {
    obj.note_unknown(&["views", "likes", "comments", "shares"]);
    Ok(EngagementMeasures {
        views: obj.count("views")?,
        likes: obj.count("likes")?,
        comments: obj.count("comments")?,
        shares: obj.count("shares")?,
    })
}

fn read_shareability(obj: &ObjectReader) -> Result<ShareabilityMeasures> {
    obj.note_unknown(&["caption", "cta_present", "save_signal_strength"]);
    Ok(ShareabilityMeasures {
        caption: obj.string("caption")?,
        cta_present: obj.boolean("cta_present")?,
        save_signal_strength: obj.probability("save_signal_strength")?,
    })
}

fn read_algo(obj: &ObjectReader) -> Result<AlgoMeasures> {
    obj.note_unknown(&["caption", "hashtag_count", "niche_mix_ok", "posted_optimal_time"]);
    Ok(AlgoMeasures {
        caption: obj.string("caption")?,
        hashtag_count: obj.count("hashtag_count")?,
        niche_mix_ok: obj.boolean("niche_mix_ok")?,
        posted_optimal_time: obj.boolean("posted_optimal_time")?,
    })
}

fn read_hook_content(obj: &ObjectReader) -> Result<HookContent> {
    obj.note_unknown(&[
        "hook_type_probs",
        "modality_attribution",
        "visual_evidence_present",
        "spoken_question_present",
        "overlay_words_first_2s",
        "hook_risk_flags",
    ]);

    let modality_attribution = obj
        .child("modality_attribution")?
        .map(|m| -> Result<ModalityAttribution> {
            m.note_unknown(&["audio", "visual", "overlay"]);
            Ok(ModalityAttribution {
                audio: m.probability("audio")?,
                visual: m.probability("visual")?,
                overlay: m.probability("overlay")?,
            })
        })
        .transpose()?;

    Ok(HookContent {
        hook_type_probs: obj.probability_map("hook_type_probs")?,
        modality_attribution,
        visual_evidence_present: obj.boolean("visual_evidence_present")?,
        spoken_question_present: obj.boolean("spoken_question_present")?,
        overlay_words_first_2s: obj.count("overlay_words_first_2s")?,
        hook_risk_flags: obj.flag_map("hook_risk_flags")?,
    })
}

fn read_raw(obj: &ObjectReader) -> Result<RawArtifacts> {
    obj.note_unknown(&["transcript", "storyboard", "overlays", "hook_span"]);

    let hook_span = obj
        .child("hook_span")?
        .map(|span| -> Result<HookSpan> {
            let start_sec = span.non_negative("start_sec")?.ok_or_else(|| {
                ValidationError::new(span.field_path("start_sec"), "is required")
            })?;
            let end_sec = span.non_negative("end_sec")?.ok_or_else(|| {
                ValidationError::new(span.field_path("end_sec"), "is required")
            })?;
            if end_sec < start_sec {
                return Err(ValidationError::new(
                    span.field_path("end_sec"),
                    format!("must not precede start_sec ({} < {})", end_sec, start_sec),
                ));
            }
            Ok(HookSpan { start_sec, end_sec })
        })
        .transpose()?;

    Ok(RawArtifacts {
        transcript: obj.string("transcript")?,
        storyboard: obj.array("storyboard")?,
        overlays: obj.array("overlays")?,
        hook_span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn err_path(value: Value) -> String {
        validate_input(&value).unwrap_err().path
    }

    #[test]
    fn test_minimal_document_is_valid() {
        let input = validate_input(&json!({ "meta": {}, "measures": {} })).unwrap();
        assert!(input.measures.hook.is_empty());
        assert!(input.measures.hook_content.is_none());
        assert!(input.raw.is_none());
    }

    #[test]
    fn test_nulls_are_absent() {
        let input = validate_input(&json!({
            "meta": { "followers": null },
            "measures": { "hook": { "duration_sec": null }, "story": null }
        }))
        .unwrap();
        assert!(input.meta.followers.is_none());
        assert!(input.measures.hook.is_empty());
    }

    #[test]
    fn test_rejects_non_object_root() {
        assert_eq!(err_path(json!([1, 2])), "$");
        assert_eq!(err_path(json!({ "meta": 3 })), "meta");
    }

    #[test]
    fn test_rejects_negative_followers() {
        assert_eq!(err_path(json!({ "meta": { "followers": -1 } })), "meta.followers");
    }

    #[test]
    fn test_rejects_percentage_out_of_range() {
        let path = err_path(json!({ "measures": { "watchtime": { "avg_watch_pct": 120 } } }));
        assert_eq!(path, "measures.watchtime.avg_watch_pct");
    }

    #[test]
    fn test_rejects_probability_map_entry() {
        let path = err_path(json!({
            "measures": { "hook_content": { "hook_type_probs": { "shock": 1.4 } } }
        }));
        assert_eq!(path, "measures.hook_content.hook_type_probs.shock");
    }

    #[test]
    fn test_rejects_wrong_type() {
        let err = validate_input(&json!({ "measures": { "hook": { "type": 4 } } })).unwrap_err();
        assert_eq!(err.path, "measures.hook.type");
        assert!(err.message.contains("expected a string"));
    }

    #[test]
    fn test_rejects_fractional_count() {
        assert_eq!(
            err_path(json!({ "measures": { "story": { "beats_count": 2.5 } } })),
            "measures.story.beats_count"
        );
    }

    #[test]
    fn test_accepts_integral_float_count() {
        let input = validate_input(&json!({ "measures": { "engagement": { "views": 1e6 } } })).unwrap();
        assert_eq!(input.measures.engagement.views, Some(1_000_000));
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        assert_eq!(
            err_path(json!({ "meta": { "published_at": "yesterday" } })),
            "meta.published_at"
        );
    }

    #[test]
    fn test_hook_generations() {
        let input = validate_input(&json!({
            "measures": { "hook": { "duration_sec": 3.0, "first_2s_motion_intensity": 0.4 } }
        }))
        .unwrap();
        assert!(matches!(input.measures.hook, Generation::Both(_, _)));

        let input = validate_input(&json!({ "measures": { "hook": { "time_to_value_sec": 2 } } })).unwrap();
        assert!(matches!(input.measures.hook, Generation::Continuous(_)));
    }

    #[test]
    fn test_hook_span_ordering() {
        let path = err_path(json!({ "raw": { "hook_span": { "start_sec": 4, "end_sec": 1 } } }));
        assert_eq!(path, "raw.hook_span.end_sec");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let input = validate_input(&json!({
            "meta": { "region": "EU" },
            "measures": { "hook": { "mood": "calm", "duration_sec": 2 } },
            "extra": true
        }))
        .unwrap();
        assert_eq!(input.measures.hook.legacy().and_then(|l| l.duration_sec), Some(2.0));
    }
}

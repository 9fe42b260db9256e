// reelscore-core/tests/validation_tests.rs
//! Input validation through the public scoring entry points.

use serde_json::{json, Value};

use reelscore_core::{score, validate_input, Dimension, Generation, ScoringError};

fn rejected_path(input: Value) -> String {
    match score(&input, None, None) {
        Err(ScoringError::Validation(e)) => e.path,
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_root_must_be_object() {
    assert_eq!(rejected_path(json!([1, 2, 3])), "$");
    assert_eq!(rejected_path(json!("hello")), "$");
}

#[test]
fn test_group_must_be_object() {
    assert_eq!(rejected_path(json!({"measures": {"hook": 4}})), "measures.hook");
    assert_eq!(rejected_path(json!({"meta": "abc"})), "meta");
}

#[test]
fn test_out_of_range_values_name_their_field() {
    let cases = [
        (json!({"measures": {"watchtime": {"avg_watch_pct": 101}}}), "measures.watchtime.avg_watch_pct"),
        (json!({"measures": {"hook": {"effectiveness_score": 11}}}), "measures.hook.effectiveness_score"),
        (json!({"measures": {"hook": {"duration_sec": -1}}}), "measures.hook.duration_sec"),
        (json!({"measures": {"audio": {"beat_sync_score": 1.5}}}), "measures.audio.beat_sync_score"),
        (json!({"measures": {"shareability": {"save_signal_strength": -0.1}}}), "measures.shareability.save_signal_strength"),
        (json!({"meta": {"followers": -5}}), "meta.followers"),
        (
            json!({"measures": {"hook_content": {"hook_type_probs": {"shock": 1.2}}}}),
            "measures.hook_content.hook_type_probs.shock",
        ),
    ];
    for (input, path) in cases {
        assert_eq!(rejected_path(input), path);
    }
}

#[test]
fn test_wrong_types_are_rejected() {
    assert_eq!(rejected_path(json!({"measures": {"engagement": {"views": "lots"}}})), "measures.engagement.views");
    assert_eq!(rejected_path(json!({"measures": {"engagement": {"likes": 2.5}}})), "measures.engagement.likes");
    assert_eq!(rejected_path(json!({"measures": {"story": {"arc_detected": "yes"}}})), "measures.story.arc_detected");
    assert_eq!(rejected_path(json!({"raw": {"storyboard": "scene 1"}})), "raw.storyboard");
}

#[test]
fn test_bad_timestamp_is_rejected() {
    assert_eq!(rejected_path(json!({"meta": {"published_at": "last tuesday"}})), "meta.published_at");
}

#[test]
fn test_inverted_hook_span_is_rejected() {
    let path = rejected_path(json!({"raw": {"hook_span": {"start_sec": 3, "end_sec": 1}}}));
    assert!(path.starts_with("raw.hook_span"), "path was {}", path);
}

#[test]
fn test_nulls_are_absent() {
    let input = json!({
        "meta": {"followers": null},
        "measures": {"hook": {"duration_sec": null}, "story": null}
    });
    let out = score(&input, None, None).unwrap();
    assert!(out.subscore(Dimension::Hook).is_none());
    assert!(out.subscore(Dimension::Story).is_none());
}

#[test]
fn test_integral_floats_count_as_integers() {
    let parsed = validate_input(&json!({"measures": {"engagement": {"views": 1e6}}})).unwrap();
    assert_eq!(parsed.measures.engagement.views, Some(1_000_000));
}

#[test]
fn test_dual_schema_generations() {
    let legacy = validate_input(&json!({"measures": {"hook": {"duration_sec": 3}}})).unwrap();
    assert!(matches!(legacy.measures.hook, Generation::Legacy(_)));

    let both = validate_input(&json!({
        "measures": {"audio": {"trending_sound": true, "speech_intelligibility": 0.9}}
    }))
    .unwrap();
    assert!(matches!(both.measures.audio, Generation::Both(_, _)));

    let empty = validate_input(&json!({"measures": {"audio": {}}})).unwrap();
    assert!(empty.measures.audio.is_empty());
}

#[test]
fn test_error_record_fields() {
    let err = score(&json!({"measures": {"watchtime": {"completion_rate": 250}}}), None, None).unwrap_err();
    assert_eq!(err.kind(), "ValidationError");
    assert_eq!(err.path(), Some("measures.watchtime.completion_rate"));
    assert!(err.to_string().contains("measures.watchtime.completion_rate"));
    assert!(err.stack().is_none());
}

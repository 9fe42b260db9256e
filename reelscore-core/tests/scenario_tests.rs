// reelscore-core/tests/scenario_tests.rs
//! End-to-end scoring of representative videos.

use anyhow::Result;
use serde_json::Value;
use test_log::test; // For integrating with `env_logger` in tests

use reelscore_core::{score, Dimension, MeasureGroup, ScoringConfig, ScoringEngine};

fn fixture(name: &str) -> Result<Value> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[test]
fn test_high_quality_video() -> Result<()> {
    let out = score(&fixture("high_quality.json")?, None, None)?;

    assert!((75.0..=100.0).contains(&out.overall), "overall was {}", out.overall);
    assert!(out.subscore(Dimension::Hook).unwrap() > 75.0);
    assert!(out.subscore(Dimension::Engagement).unwrap() > 75.0);
    assert!(Dimension::ALL.iter().all(|d| out.subscore(*d).is_some()));
    assert_eq!(out.penalties, 0.0);
    assert!(!out.flags.low_confidence);
    assert!(!out.flags.incomplete);
    assert_eq!(out.video_id.as_deref(), Some("hq-001"));
    Ok(())
}

#[test]
fn test_average_video() -> Result<()> {
    let out = score(&fixture("average.json")?, None, None)?;
    assert!((45.0..=75.0).contains(&out.overall), "overall was {}", out.overall);
    assert_eq!(out.penalty_breakdown.spam, 0.0);
    assert_eq!(out.penalty_breakdown.low_quality, 0.0);
    assert_eq!(out.penalty_breakdown.excessive_length, 0.0);
    assert_eq!(out.penalty_breakdown.formatting, 0.0);
    assert_eq!(out.penalties, 0.0);
    Ok(())
}

#[test]
fn test_low_quality_video() -> Result<()> {
    let out = score(&fixture("low_quality.json")?, None, None)?;

    assert!((0.0..=55.0).contains(&out.overall), "overall was {}", out.overall);
    assert_eq!(out.penalty_breakdown.spam, 10.0);
    assert_eq!(out.penalty_breakdown.low_quality, 4.0);
    assert_eq!(out.penalty_breakdown.excessive_length, 6.0);
    assert_eq!(out.penalty_breakdown.formatting, 0.0);
    assert_eq!(out.penalties, 20.0);
    Ok(())
}

#[test]
fn test_quality_ordering() -> Result<()> {
    let high = score(&fixture("high_quality.json")?, None, None)?;
    let average = score(&fixture("average.json")?, None, None)?;
    let low = score(&fixture("low_quality.json")?, None, None)?;
    assert!(high.overall > average.overall);
    assert!(average.overall > low.overall);
    assert!(high.raw_overall > average.raw_overall);
    assert!(average.raw_overall > low.raw_overall);
    Ok(())
}

#[test]
fn test_sparse_video_is_low_confidence() -> Result<()> {
    let out = score(&fixture("sparse.json")?, None, None)?;
    let d = &out.diagnostics;

    assert!(out.flags.low_confidence);
    assert!(out.flags.incomplete);
    assert_eq!(d.present_fields, 5);
    assert_eq!(d.tracked_fields, 26);
    assert_eq!(d.overall_confidence, d.present_fields as f64 / d.tracked_fields as f64);
    assert_eq!(d.coverage[&MeasureGroup::Engagement].present, 2);

    assert!(out.subscore(Dimension::Story).is_none());
    assert!(out.subscore(Dimension::Audio).is_none());
    assert_eq!(out.weight(Dimension::Story), 0.0);
    let total: f64 = out.weights.values().sum();
    assert!((total - 1.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<()> {
    let engine = ScoringEngine::new(ScoringConfig::default())?;
    let input = fixture("high_quality.json")?;
    let first = serde_json::to_string_pretty(&engine.score_value(&input)?)?;
    let second = serde_json::to_string_pretty(&engine.score_value(&input)?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_output_shape() -> Result<()> {
    let out = score(&fixture("average.json")?, None, None)?;
    let json = serde_json::to_value(&out)?;

    for key in [
        "video_id",
        "subscores",
        "hook_breakdown",
        "penalties",
        "penalty_breakdown",
        "raw_overall",
        "overall",
        "normalized",
        "weights",
        "diagnostics",
        "flags",
        "version",
    ] {
        assert!(json.get(key).is_some(), "missing `{}`", key);
    }
    assert_eq!(json["subscores"].as_object().map(|o| o.len()), Some(9));
    assert_eq!(json["version"], "1.0.0");
    assert!(json["diagnostics"]["coverage"]["hook"]["tracked"].is_u64());
    Ok(())
}

#[test]
fn test_unknown_keys_are_ignored() -> Result<()> {
    let mut input = fixture("average.json")?;
    input["measures"]["story"]["pacing_notes"] = Value::from("slow middle");
    input["extra"] = Value::from(1);
    let with_extra = score(&input, None, None)?;
    let plain = score(&fixture("average.json")?, None, None)?;
    assert_eq!(with_extra, plain);
    Ok(())
}

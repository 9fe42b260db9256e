// reelscore-core/src/lib.rs
//! # ReelScore Core Library
//!
//! `reelscore-core` computes a composite quality score for a single short-form
//! video from heterogeneous, partially-missing measurements. Nine independent
//! dimension formulas (hook, story, relatability, visuals, audio, watchtime,
//! engagement, shareability, algorithm fit) each produce a 0-100 subscore or
//! `null`; the engine combines them with weights renormalized over the dimensions
//! that were actually observed, subtracts bounded penalties, attaches coverage
//! diagnostics and optionally reshapes the result onto a target distribution.
//!
//! The library is pure: no I/O during scoring, no global state, and identical
//! input always produces identical output.
//!
//! ## Modules
//!
//! * `config`: Weights, normalization settings and confidence thresholds.
//! * `input`: The typed, validated input model.
//! * `validators`: Conversion of untyped JSON into `ScoringInput`, with field paths on failure.
//! * `formulas`: The nine dimension formulas and the penalty model.
//! * `diagnostics`: Coverage accounting that drives confidence and flags.
//! * `engine`: The `ScoringEngine` orchestrator.
//! * `output`: The serializable `ScoringOutput`.
//! * `headless`: One-shot convenience wrapper.
//! * `errors`: Error types.
//!
//! ## Usage Example
//!
//! ```rust
//! use reelscore_core::{score, Dimension};
//! use serde_json::json;
//!
//! let input = json!({
//!     "meta": { "video_id": "abc123", "length_sec": 28 },
//!     "measures": {
//!         "hook": { "duration_sec": 3.5, "type": "curiosity" },
//!         "watchtime": { "avg_watch_pct": 72 }
//!     }
//! });
//!
//! let output = score(&input, None, None).expect("valid input");
//! assert!(output.subscore(Dimension::Hook).is_some());
//! assert!(output.subscore(Dimension::Audio).is_none());
//! assert!((0.0..=100.0).contains(&output.overall));
//! ```
//!
//! ## Error Handling
//!
//! Every fallible call returns [`ScoringError`]. Bad input is a `ValidationError`
//! carrying the dotted path of the offending field; a formula producing a value
//! outside `[0, 100]` is a `FormulaError` carrying a captured stack. A score is
//! never returned alongside an error.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod errors;
pub mod formulas;
pub mod headless;
pub mod input;
pub mod output;
pub mod validators;

pub use config::{
    ConfidenceThresholds, NormalizationConfig, ScoringConfig, Weights, FORMULA_VERSION,
};

pub use errors::{ConfigError, FormulaError, ScoringError, ValidationError};

pub use engine::ScoringEngine;

pub use headless::score;

pub use input::{Generation, ScoringInput};

pub use output::{
    Coverage, Diagnostics, Dimension, DimensionMap, Flags, HookBreakdown, MeasureGroup,
    PenaltyBreakdown, ScoringOutput,
};

pub use validators::validate_input;

// reelscore/src/cli.rs
//! This file defines the command-line interface (CLI) for the reelscore binary.
//!
//! With no arguments the binary is a pure filter: one JSON document on stdin,
//! one JSON document on stdout (or an error record on stderr).
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug, Default)]
#[command(
    name = "reelscore",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Score a short-form video from its measurements",
    long_about = "reelscore reads one JSON document describing a short-form video (meta, measures, raw artifacts) from stdin and writes a composite 0-100 quality score with per-dimension subscores, penalties and coverage diagnostics to stdout. On failure it writes a JSON error record to stderr and exits with status 1."
)]
pub struct Cli {
    /// Path to a YAML scoring configuration (weights, normalization, thresholds).
    #[arg(long, value_name = "FILE", help = "Load weights, normalization and thresholds from a YAML file.")]
    pub config: Option<PathBuf>,

    /// Skip the normalization stage.
    #[arg(long, help = "Report the raw composite score without normalization.")]
    pub raw: bool,

    /// Single-line JSON output.
    #[arg(long, help = "Write compact single-line JSON instead of pretty-printed output.")]
    pub compact: bool,

    /// Enable debug logging on stderr.
    #[arg(long, short = 'd', help = "Enable debug logging on stderr.")]
    pub debug: bool,
}

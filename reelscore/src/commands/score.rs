//! Score command implementation: stdin JSON in, scored JSON out.

use std::io::{Read, Write};
use std::path::PathBuf;

use log::{debug, info};

use reelscore_core::{ScoringConfig, ScoringEngine, ScoringOutput};

use crate::cli::Cli;
use crate::errors::{CliError, ErrorRecord};

/// Options for the score run, decoupled from clap for testing.
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    pub config_path: Option<PathBuf>,
    pub raw: bool,
    pub compact: bool,
}

impl From<&Cli> for ScoreOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            raw: cli.raw,
            compact: cli.compact,
        }
    }
}

/// Builds the engine from defaults, an optional YAML file and the `--raw` flag.
pub fn build_engine(opts: &ScoreOptions) -> Result<ScoringEngine, CliError> {
    let mut config = match &opts.config_path {
        Some(path) => ScoringConfig::load_from_file(path).map_err(CliError::Config)?,
        None => ScoringConfig::default(),
    };
    if opts.raw {
        config = config.with_normalization(false);
    }
    ScoringEngine::new(config).map_err(|e| CliError::Config(e.into()))
}

fn render(output: &ScoringOutput, compact: bool) -> Result<String, CliError> {
    let text = if compact {
        serde_json::to_string(output)
    } else {
        serde_json::to_string_pretty(output)
    };
    text.map_err(|e| CliError::Output(e.into()))
}

/// Reads one JSON document from `input`, scores it and writes the result to `output`.
pub fn run_score<R: Read, W: Write>(opts: &ScoreOptions, mut input: R, mut output: W) -> Result<(), CliError> {
    let engine = build_engine(opts)?;

    let mut text = String::new();
    input.read_to_string(&mut text).map_err(CliError::Input)?;
    debug!("Read {} bytes of input.", text.len());

    let scored = engine.score_str(&text)?;
    info!(
        "Scored video {}: overall {} (raw {}).",
        scored.video_id.as_deref().unwrap_or("<unnamed>"),
        scored.overall,
        scored.raw_overall
    );

    let rendered = render(&scored, opts.compact)?;
    writeln!(output, "{}", rendered).map_err(CliError::Output)?;
    output.flush().map_err(CliError::Output)
}

/// Writes the JSON error record for `err`. Failures to write are ignored.
pub fn write_error_record<W: Write>(err: &CliError, mut out: W) {
    let record = ErrorRecord::from(err);
    if let Ok(json) = serde_json::to_string(&record) {
        let _ = writeln!(out, "{}", json);
    }
}

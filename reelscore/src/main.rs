// reelscore/src/main.rs
//! reelscore entry point.
//!
//! Reads one JSON document from stdin and writes the score to stdout. Any failure
//! produces a JSON error record on stderr and exit status 1.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use reelscore::cli::Cli;
use reelscore::commands::score::{run_score, write_error_record, ScoreOptions};
use reelscore::logger;

fn main() -> ExitCode {
    let args = Cli::parse();

    logger::init_logger(args.debug.then_some(LevelFilter::Debug));

    let opts = ScoreOptions::from(&args);
    match run_score(&opts, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("Run failed: {:?}", err);
            write_error_record(&err, io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

// reelscore/src/lib.rs
//! # ReelScore CLI Application
//!
//! This crate provides the command-line adapter for the `reelscore-core` scoring
//! engine: a stdin-to-stdout JSON filter with optional configuration flags.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod logger;

pub use commands::score::{run_score, ScoreOptions};
pub use errors::{CliError, ErrorRecord};

// reelscore/src/logger.rs
//! Logger setup for the reelscore binary.
//!
//! Logging is off unless explicitly requested, so the only thing a failing run
//! writes to stderr is its error record. The logger does not consult `RUST_LOG`.

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Installs an `env_logger` writing to stderr at `level` (off when `None`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let level = level.unwrap_or(LevelFilter::Off);
    let result = Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(true)
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized at level {}.", level);
    }
}

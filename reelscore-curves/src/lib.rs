// reelscore-curves/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod curves;
pub mod entropy;
pub mod scoring;
pub mod statistics;

/// Common type definitions
pub type Score = f64;

/// Upper bound of every score produced with these helpers.
pub const SCORE_MAX: Score = 100.0;

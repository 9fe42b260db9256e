// reelscore/src/commands/mod.rs
pub mod score;

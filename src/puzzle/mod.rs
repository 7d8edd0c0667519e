//! Puzzle assembly, ruleset versions and quiz sequencing

/// Retry loop turning a seed into a finished puzzle
pub mod assembly;
/// Seed streams for multi-question quizzes
pub mod quiz;
/// Per-version generation thresholds
pub mod ruleset;

pub use assembly::{Attempt, Puzzle, build_puzzle, build_puzzle_with};
pub use ruleset::Ruleset;

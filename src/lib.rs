//! Seeded regular-expression puzzles with statistically checked solvability
//!
//! A seed and ruleset version deterministically produce a hidden answer
//! pattern together with samples it matches and samples it rejects. Puzzles
//! whose samples are too lopsided, or which a fixed substring would solve, are
//! discarded and regenerated before anything reaches the caller.

#![forbid(unsafe_code)]

/// Answer pattern grammar, sample synthesis and the seeded random source
pub mod generation;
/// Command-line interface, configuration constants and error handling
pub mod io;
/// Assembly retry loop, rulesets and quizzes
pub mod puzzle;
/// Acceptance filters and candidate checking
pub mod validation;

pub use io::error::{QuizError, Result};
pub use puzzle::{Puzzle, Ruleset, build_puzzle};
pub use validation::candidate::{CandidateReport, Verdict, check_candidate};

//! Versioned generation rulesets
//!
//! A ruleset bundles every threshold the pipeline consults so that assembly
//! itself never branches on a version name. Published versions must never
//! change: a seed and version pair is expected to reproduce the same puzzle.

use crate::io::configuration::{CURRENT_RULESET, SAFE_SEED};
use crate::io::error::{QuizError, Result};
use std::ops::RangeInclusive;

/// Where perturbation insertions draw their characters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionAlphabet {
    /// Lowercase letters and digits
    Universal,
    /// Alphanumerics appearing in the pattern source
    PatternLetters,
}

/// Thresholds and policies for one ruleset version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    /// Name used to select the ruleset
    pub version: &'static str,
    /// Token count range for generated patterns
    pub pattern_length: RangeInclusive<usize>,
    /// Range of samples drawn per attempt
    pub sample_count: RangeInclusive<usize>,
    /// Cap applied to unbounded repetitions during synthesis
    pub max_repeat: u32,
    /// Upper bound on perturbations applied to one sample
    pub max_perturbations: usize,
    /// Source of inserted characters
    pub insertion_alphabet: InsertionAlphabet,
    /// Minimum distinct matching samples
    pub min_matches: usize,
    /// Minimum distinct non-matching samples
    pub min_non_matches: usize,
    /// When set, matches may not exceed the drawn sample count minus this
    pub match_headroom: Option<usize>,
    /// Whether to reject puzzles a fixed substring can solve
    pub leak_filter: bool,
    /// Attempts per seed before falling back
    pub max_attempts: usize,
    /// Seed assembly moves to after exhausting its attempts
    pub fallback_seed: u64,
}

const BASELINE: Ruleset = Ruleset {
    version: "1",
    pattern_length: 3..=9,
    sample_count: 5..=10,
    max_repeat: 3,
    max_perturbations: 2,
    insertion_alphabet: InsertionAlphabet::Universal,
    min_matches: 2,
    min_non_matches: 2,
    match_headroom: None,
    leak_filter: false,
    max_attempts: 1000,
    fallback_seed: SAFE_SEED,
};

const PATTERN_LETTERS: Ruleset = Ruleset {
    version: "2",
    insertion_alphabet: InsertionAlphabet::PatternLetters,
    match_headroom: Some(2),
    ..BASELINE
};

const LEAK_FILTERED: Ruleset = Ruleset {
    version: "12",
    insertion_alphabet: InsertionAlphabet::PatternLetters,
    leak_filter: true,
    ..BASELINE
};

static RULESETS: [Ruleset; 3] = [BASELINE, PATTERN_LETTERS, LEAK_FILTERED];

impl Ruleset {
    /// Every shipped ruleset, oldest first
    pub fn all() -> &'static [Self] {
        &RULESETS
    }

    /// Find a ruleset by version name
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::UnknownRuleset`] if no ruleset has that name
    pub fn lookup(version: &str) -> Result<&'static Self> {
        RULESETS
            .iter()
            .find(|ruleset| ruleset.version == version)
            .ok_or_else(|| QuizError::UnknownRuleset {
                version: version.to_string(),
                known: RULESETS.iter().map(|ruleset| ruleset.version).collect(),
            })
    }

    /// The ruleset new quizzes use
    pub fn current() -> &'static Self {
        RULESETS
            .iter()
            .find(|ruleset| ruleset.version == CURRENT_RULESET)
            .unwrap_or(&LEAK_FILTERED)
    }
}

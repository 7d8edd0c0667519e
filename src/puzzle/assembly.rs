use crate::generation::pattern::generate_pattern;
use crate::generation::random::Prng;
use crate::generation::samples::{Samples, generate_samples};
use crate::generation::synthesis::CompiledPattern;
use crate::io::configuration::MAX_FALLBACK_DEPTH;
use crate::io::error::{QuizError, Result};
use crate::puzzle::ruleset::Ruleset;
use crate::validation::candidate::{CandidateReport, check_candidate};
use crate::validation::solvability::{Rejection, assess};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// A finished puzzle: sample sets plus the hidden answer they were drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    seed: u64,
    resolved_seed: u64,
    version: &'static str,
    attempts: usize,
    answer: String,
    matches: BTreeSet<String>,
    non_matches: BTreeSet<String>,
}

impl Puzzle {
    /// Seed the puzzle was requested with
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed that actually produced the puzzle; differs from `seed` after a fallback
    pub const fn resolved_seed(&self) -> u64 {
        self.resolved_seed
    }

    /// Whether assembly had to leave the requested seed
    pub const fn used_fallback(&self) -> bool {
        self.seed != self.resolved_seed
    }

    /// Ruleset version the puzzle was generated under
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// Attempts spent across every seed tried
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Length of the hidden answer's source, the budget a player's answer is held to
    pub fn pattern_length(&self) -> usize {
        self.answer.chars().count()
    }

    /// Samples the answer matches
    pub const fn matches(&self) -> &BTreeSet<String> {
        &self.matches
    }

    /// Samples the answer rejects
    pub const fn non_matches(&self) -> &BTreeSet<String> {
        &self.non_matches
    }

    /// The hidden answer, for when a player gives up
    pub fn reveal_answer(&self) -> &str {
        &self.answer
    }

    /// Check a player's candidate against this puzzle's samples
    pub fn check(&self, candidate: &str) -> Attempt {
        Attempt {
            within_length: candidate.chars().count() <= self.pattern_length(),
            report: check_candidate(candidate, &self.matches, &self.non_matches),
        }
    }
}

/// A player's candidate judged against a specific puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Whether the candidate fits in the answer's length
    pub within_length: bool,
    /// Sample-by-sample outcome
    pub report: CandidateReport,
}

impl Attempt {
    /// Solved and no longer than the answer
    pub const fn is_solved(&self) -> bool {
        self.within_length && self.report.is_solved()
    }
}

/// Build the puzzle for `seed` under the named ruleset version
///
/// # Errors
///
/// Returns an error if the version is unknown or generation exhausts every
/// attempt, fallback included
pub fn build_puzzle(seed: u64, version: &str) -> Result<Puzzle> {
    build_puzzle_with(seed, Ruleset::lookup(version)?)
}

/// Build the puzzle for `seed` under an explicit ruleset
///
/// Tries the requested seed, then the ruleset's fallback seed, each for up to
/// `max_attempts` attempts. A request for the fallback seed itself gets no
/// second pass.
///
/// # Errors
///
/// Returns [`QuizError::GenerationExhausted`] if no seed tried yields a
/// puzzle, which means the ruleset is miscalibrated
pub fn build_puzzle_with(seed: u64, ruleset: &Ruleset) -> Result<Puzzle> {
    let mut current_seed = seed;
    let mut total_attempts = 0;

    for depth in 0..=MAX_FALLBACK_DEPTH {
        let mut prng = Prng::new(current_seed);

        for _ in 0..ruleset.max_attempts {
            total_attempts += 1;
            match attempt(&mut prng, ruleset) {
                Ok((answer, samples)) => {
                    info!(
                        seed,
                        resolved_seed = current_seed,
                        version = ruleset.version,
                        attempts = total_attempts,
                        "puzzle assembled"
                    );
                    return Ok(Puzzle {
                        seed,
                        resolved_seed: current_seed,
                        version: ruleset.version,
                        attempts: total_attempts,
                        answer,
                        matches: samples.matches,
                        non_matches: samples.non_matches,
                    });
                }
                Err(rejection) => {
                    debug!(
                        seed = current_seed,
                        attempt = total_attempts,
                        %rejection,
                        "attempt rejected"
                    );
                }
            }
        }

        if depth == MAX_FALLBACK_DEPTH || current_seed == ruleset.fallback_seed {
            break;
        }
        warn!(
            seed = current_seed,
            fallback_seed = ruleset.fallback_seed,
            version = ruleset.version,
            "attempts exhausted, falling back"
        );
        current_seed = ruleset.fallback_seed;
    }

    Err(QuizError::GenerationExhausted {
        seed,
        version: ruleset.version,
        attempts: total_attempts,
    })
}

/// One pass of generate, compile, sample and assess
fn attempt(
    prng: &mut Prng,
    ruleset: &Ruleset,
) -> std::result::Result<(String, Samples), Rejection> {
    let length = prng.next_int_in(
        *ruleset.pattern_length.start(),
        *ruleset.pattern_length.end() + 1,
    );
    let source = generate_pattern(prng, length);
    let compiled = CompiledPattern::compile(&source, ruleset.max_repeat)?;
    let samples = generate_samples(prng, &compiled, ruleset);
    assess(&samples, ruleset)?;
    Ok((source, samples))
}

use crate::generation::random::Prng;
use crate::io::configuration::QUIZ_LENGTH;
use crate::io::error::Result;
use crate::puzzle::assembly::{Puzzle, build_puzzle_with};
use crate::puzzle::ruleset::Ruleset;

/// A fixed-length run of puzzles whose seeds come from one quiz seed
///
/// The quiz keeps its own random stream, separate from each puzzle's
/// generation session, so question seeds do not depend on how many attempts
/// earlier questions needed.
#[derive(Debug, Clone)]
pub struct Quiz {
    seeds: Prng,
    ruleset: &'static Ruleset,
    asked: usize,
    length: usize,
}

impl Quiz {
    /// Standard-length quiz under the given ruleset
    pub fn new(quiz_seed: u64, ruleset: &'static Ruleset) -> Self {
        Self::with_length(quiz_seed, ruleset, QUIZ_LENGTH)
    }

    /// Quiz with an explicit question count
    pub fn with_length(quiz_seed: u64, ruleset: &'static Ruleset, length: usize) -> Self {
        Self {
            seeds: Prng::new(quiz_seed),
            ruleset,
            asked: 0,
            length,
        }
    }

    /// Questions not yet asked
    pub const fn remaining(&self) -> usize {
        self.length - self.asked
    }

    /// Seed for the next question without building it
    pub fn next_seed(&mut self) -> Option<u64> {
        if self.asked >= self.length {
            return None;
        }
        self.asked += 1;
        Some(self.seeds.next_seed())
    }
}

impl Iterator for Quiz {
    type Item = Result<Puzzle>;

    fn next(&mut self) -> Option<Self::Item> {
        let ruleset = self.ruleset;
        self.next_seed().map(|seed| build_puzzle_with(seed, ruleset))
    }
}

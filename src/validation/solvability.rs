use crate::generation::samples::Samples;
use crate::puzzle::ruleset::Ruleset;
use crate::validation::words::leaked_words;
use std::fmt;

/// Routine reasons a generation attempt is discarded
///
/// None of these leave the assembly loop; they only drive retries and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Pattern source failed to compile
    InvalidPattern {
        /// Compiler message
        reason: String,
    },
    /// Pattern compiled but strings cannot be synthesised from it
    UnsupportedPattern {
        /// Sampler message
        reason: String,
    },
    /// Fewer distinct matching samples than the ruleset requires
    TooFewMatches {
        /// Distinct matches found
        found: usize,
        /// Ruleset minimum
        required: usize,
    },
    /// Fewer distinct non-matching samples than the ruleset requires
    TooFewNonMatches {
        /// Distinct non-matches found
        found: usize,
        /// Ruleset minimum
        required: usize,
    },
    /// Nearly every drawn sample matched
    TooManyMatches {
        /// Distinct matches found
        found: usize,
        /// Largest count the ruleset allows for this draw
        allowed: usize,
    },
    /// A fixed substring separates matches from non-matches
    SubstringLeak {
        /// Shortest leaked word, for diagnostics
        word: String,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { reason } => write!(f, "invalid pattern: {reason}"),
            Self::UnsupportedPattern { reason } => write!(f, "unsupported pattern: {reason}"),
            Self::TooFewMatches { found, required } => {
                write!(f, "{found} matches, need at least {required}")
            }
            Self::TooFewNonMatches { found, required } => {
                write!(f, "{found} non-matches, need at least {required}")
            }
            Self::TooManyMatches { found, allowed } => {
                write!(f, "{found} matches, at most {allowed} allowed")
            }
            Self::SubstringLeak { word } => write!(f, "substring '{word}' solves the puzzle"),
        }
    }
}

/// Check classified samples against the ruleset's acceptance rules
///
/// Pure and deterministic: the same samples and ruleset always give the same
/// verdict.
///
/// # Errors
///
/// Returns the first [`Rejection`] that applies, checking counts before leaks
pub fn assess(samples: &Samples, ruleset: &Ruleset) -> Result<(), Rejection> {
    let matches = samples.matches.len();
    let non_matches = samples.non_matches.len();

    if matches < ruleset.min_matches {
        return Err(Rejection::TooFewMatches {
            found: matches,
            required: ruleset.min_matches,
        });
    }
    if non_matches < ruleset.min_non_matches {
        return Err(Rejection::TooFewNonMatches {
            found: non_matches,
            required: ruleset.min_non_matches,
        });
    }
    if let Some(headroom) = ruleset.match_headroom {
        let allowed = samples.requested.saturating_sub(headroom);
        if matches > allowed {
            return Err(Rejection::TooManyMatches {
                found: matches,
                allowed,
            });
        }
    }
    if ruleset.leak_filter {
        let leaked = leaked_words(&samples.matches, &samples.non_matches);
        if let Some(word) = leaked.iter().min_by_key(|word| word.len()) {
            return Err(Rejection::SubstringLeak { word: word.clone() });
        }
    }

    Ok(())
}

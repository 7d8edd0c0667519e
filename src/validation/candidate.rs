use regex::Regex;
use std::collections::BTreeSet;

/// Outcome of testing a candidate against one sample string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate finds a match in the sample
    Matched,
    /// The candidate finds no match in the sample
    Unmatched,
    /// The candidate did not compile, so no sample can be judged
    Invalid,
}

/// How a player's candidate pattern fares against a puzzle's samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateReport {
    /// Whether the candidate compiled
    pub compiled: bool,
    /// Whether every match-set sample is matched
    pub all_matches_match: bool,
    /// Whether every non-match-set sample is rejected
    pub all_non_matches_rejected: bool,
    /// Verdicts for the match set, in set order
    pub match_verdicts: Vec<(String, Verdict)>,
    /// Verdicts for the non-match set, in set order
    pub non_match_verdicts: Vec<(String, Verdict)>,
}

impl CandidateReport {
    /// True when the candidate reproduces the puzzle's partition
    pub const fn is_solved(&self) -> bool {
        self.compiled && self.all_matches_match && self.all_non_matches_rejected
    }
}

/// Test a candidate pattern against retained sample sets
///
/// Uses unanchored search, like classification does. A candidate that fails
/// to compile is reported through `compiled: false` rather than an error,
/// since partial input is routinely invalid.
pub fn check_candidate(
    candidate: &str,
    matches: &BTreeSet<String>,
    non_matches: &BTreeSet<String>,
) -> CandidateReport {
    let Ok(regex) = Regex::new(candidate) else {
        return CandidateReport {
            compiled: false,
            all_matches_match: false,
            all_non_matches_rejected: false,
            match_verdicts: invalid_verdicts(matches),
            non_match_verdicts: invalid_verdicts(non_matches),
        };
    };

    let match_verdicts = judge(&regex, matches);
    let non_match_verdicts = judge(&regex, non_matches);

    CandidateReport {
        compiled: true,
        all_matches_match: match_verdicts
            .iter()
            .all(|(_, verdict)| *verdict == Verdict::Matched),
        all_non_matches_rejected: non_match_verdicts
            .iter()
            .all(|(_, verdict)| *verdict == Verdict::Unmatched),
        match_verdicts,
        non_match_verdicts,
    }
}

fn judge(regex: &Regex, samples: &BTreeSet<String>) -> Vec<(String, Verdict)> {
    samples
        .iter()
        .map(|sample| {
            let verdict = if regex.is_match(sample) {
                Verdict::Matched
            } else {
                Verdict::Unmatched
            };
            (sample.clone(), verdict)
        })
        .collect()
}

fn invalid_verdicts(samples: &BTreeSet<String>) -> Vec<(String, Verdict)> {
    samples
        .iter()
        .map(|sample| (sample.clone(), Verdict::Invalid))
        .collect()
}

use crate::generation::pattern::random_char_from;
use crate::generation::random::Prng;
use crate::generation::synthesis::CompiledPattern;
use crate::io::configuration::{ALPHANUMERIC, FALLBACK_INSERTION};
use crate::puzzle::ruleset::{InsertionAlphabet, Ruleset};
use std::collections::BTreeSet;

/// Classified sample strings for one pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Samples {
    /// Number of strings drawn before duplicates were dropped
    pub requested: usize,
    /// Strings the pattern matches
    pub matches: BTreeSet<String>,
    /// Strings the pattern rejects
    pub non_matches: BTreeSet<String>,
}

impl Samples {
    /// Empty sample sets expecting `requested` draws
    pub const fn with_requested(requested: usize) -> Self {
        Self {
            requested,
            matches: BTreeSet::new(),
            non_matches: BTreeSet::new(),
        }
    }

    /// File `sample` under the set the pattern places it in
    ///
    /// Returns false when an identical string was already present.
    pub fn classify(&mut self, pattern: &CompiledPattern, sample: String) -> bool {
        if pattern.is_match(&sample) {
            self.matches.insert(sample)
        } else {
            self.non_matches.insert(sample)
        }
    }
}

/// Draw, perturb and classify the sample strings for a compiled pattern
pub fn generate_samples(prng: &mut Prng, pattern: &CompiledPattern, ruleset: &Ruleset) -> Samples {
    let requested = prng.next_int_in(
        *ruleset.sample_count.start(),
        *ruleset.sample_count.end() + 1,
    );
    let alphabet = insertion_alphabet(ruleset.insertion_alphabet, pattern.source());
    let mut samples = Samples::with_requested(requested);

    for _ in 0..requested {
        let synthesized = pattern.synthesize(prng);
        let edits = prng.next_int(ruleset.max_perturbations + 1);
        let sample = perturb(prng, &synthesized, edits, &alphabet);
        samples.classify(pattern, sample);
    }

    samples
}

/// Characters insertions may draw from under the given policy
///
/// Pattern letters are the ASCII alphanumerics of the source in order of
/// appearance, repeats included, so frequent letters are proportionally
/// likelier.
pub fn insertion_alphabet(policy: InsertionAlphabet, source: &str) -> String {
    match policy {
        InsertionAlphabet::Universal => ALPHANUMERIC.to_string(),
        InsertionAlphabet::PatternLetters => {
            let letters: String = source.chars().filter(char::is_ascii_alphanumeric).collect();
            if letters.is_empty() {
                FALLBACK_INSERTION.to_string()
            } else {
                letters
            }
        }
    }
}

/// Apply `edits` random single-character deletions or insertions
///
/// Deletion is only considered once a string has at least three characters,
/// so short and empty strings only ever grow.
pub fn perturb(prng: &mut Prng, text: &str, edits: usize, alphabet: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    for _ in 0..edits {
        if chars.len() >= 3 && prng.coin() {
            let position = prng.next_int(chars.len());
            chars.remove(position);
        } else {
            let position = prng.next_int(chars.len() + 1);
            chars.insert(position, random_char_from(prng, alphabet));
        }
    }

    chars.into_iter().collect()
}

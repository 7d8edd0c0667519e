//! Tests for sample drawing, perturbation and classification

#[cfg(test)]
mod tests {
    use regex_quiz::generation::random::Prng;
    use regex_quiz::generation::samples::{
        Samples, generate_samples, insertion_alphabet, perturb,
    };
    use regex_quiz::generation::synthesis::CompiledPattern;
    use regex_quiz::io::configuration::ALPHANUMERIC;
    use regex_quiz::puzzle::ruleset::{InsertionAlphabet, Ruleset};
    use std::collections::BTreeSet;

    fn compile(source: &str) -> CompiledPattern {
        CompiledPattern::compile(source, 3).unwrap_or_else(|rejection| {
            unreachable!("{source} should compile: {rejection}");
        })
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    // Tests classification of the documented a+ example under search semantics
    // Verified by classifying with a full-match regex
    #[test]
    fn test_classify_search_semantics() {
        let pattern = compile("a+");
        let mut samples = Samples::with_requested(4);

        for raw in ["a", "aa", "b", "ab"] {
            assert!(samples.classify(&pattern, raw.to_string()));
        }

        assert_eq!(samples.matches, set(&["a", "aa", "ab"]));
        assert_eq!(samples.non_matches, set(&["b"]));
    }

    // Tests duplicates are dropped from either set
    // Verified by storing samples in a Vec
    #[test]
    fn test_classify_drops_duplicates() {
        let pattern = compile("x");
        let mut samples = Samples::with_requested(4);

        assert!(samples.classify(&pattern, "x".to_string()));
        assert!(!samples.classify(&pattern, "x".to_string()));
        assert!(samples.classify(&pattern, "y".to_string()));
        assert!(!samples.classify(&pattern, "y".to_string()));

        assert_eq!(samples.matches.len(), 1);
        assert_eq!(samples.non_matches.len(), 1);
    }

    // Tests perturbing empty and very short strings never goes out of bounds
    // Verified by drawing deletion positions from len + 1
    #[test]
    fn test_perturb_short_strings_safe() {
        for seed in 0..300 {
            let mut prng = Prng::new(seed);
            for text in ["", "a", "ab", "abc"] {
                for edits in 0..=4 {
                    let result = perturb(&mut prng, text, edits, "xyz");
                    let length = result.chars().count();
                    assert!(length + edits >= text.len() && length <= text.len() + edits);
                }
            }
        }
    }

    // Tests strings shorter than three characters only grow
    // Verified by allowing deletion at length 2
    #[test]
    fn test_perturb_short_strings_only_insert() {
        for seed in 0..100 {
            let mut prng = Prng::new(seed);
            assert_eq!(perturb(&mut prng, "", 2, "k").chars().count(), 2);
            assert_eq!(perturb(&mut prng, "a", 1, "k").chars().count(), 2);
            assert_eq!(perturb(&mut prng, "ab", 1, "k").chars().count(), 3);
        }
    }

    // Tests zero edits leave the string untouched
    // Verified by always applying one edit
    #[test]
    fn test_perturb_without_edits() {
        let mut prng = Prng::new(4);
        assert_eq!(perturb(&mut prng, "héllo", 0, "z"), "héllo");
    }

    // Tests inserted characters come from the given alphabet
    // Verified by inserting from the universal alphabet regardless
    #[test]
    fn test_perturb_inserts_from_alphabet() {
        let mut prng = Prng::new(12);
        assert_eq!(perturb(&mut prng, "", 3, "q"), "qqq");
    }

    // Tests each insertion policy's alphabet
    // Verified by including non-alphanumeric pattern characters
    #[test]
    fn test_insertion_alphabets() {
        assert_eq!(
            insertion_alphabet(InsertionAlphabet::Universal, "[^ab]"),
            ALPHANUMERIC
        );
        assert_eq!(
            insertion_alphabet(InsertionAlphabet::PatternLetters, "[^ab]{2,3}c"),
            "ab23c"
        );
        assert_eq!(
            insertion_alphabet(InsertionAlphabet::PatternLetters, "*.+|"),
            "a"
        );
    }

    // Tests generated samples are classified correctly and within the drawn count
    // Verified by swapping the match and non-match sets
    #[test]
    fn test_generate_samples_partition() {
        let pattern = compile("[ab]+c?");
        for ruleset in Ruleset::all() {
            for seed in 0..50 {
                let mut prng = Prng::new(seed);
                let samples = generate_samples(&mut prng, &pattern, ruleset);

                assert!(ruleset.sample_count.contains(&samples.requested));
                assert!(samples.matches.len() + samples.non_matches.len() <= samples.requested);
                assert!(samples.matches.iter().all(|s| pattern.is_match(s)));
                assert!(samples.non_matches.iter().all(|s| !pattern.is_match(s)));
                assert!(samples.matches.is_disjoint(&samples.non_matches));
            }
        }
    }

    // Tests sample generation is reproducible from the seed
    // Verified by reseeding the second run
    #[test]
    fn test_generate_samples_deterministic() {
        let pattern = compile("x.y|z{2}");
        let ruleset = Ruleset::current();

        let first = generate_samples(&mut Prng::new(77), &pattern, ruleset);
        let second = generate_samples(&mut Prng::new(77), &pattern, ruleset);

        assert_eq!(first, second);
    }
}

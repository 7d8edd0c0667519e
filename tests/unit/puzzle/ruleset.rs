//! Tests for ruleset versions and lookup

#[cfg(test)]
mod tests {
    use regex_quiz::QuizError;
    use regex_quiz::io::configuration::{CURRENT_RULESET, SAFE_SEED};
    use regex_quiz::puzzle::ruleset::{InsertionAlphabet, Ruleset};
    use std::collections::HashSet;

    // Tests every shipped ruleset can be looked up by its own name
    // Verified by comparing names case-insensitively
    #[test]
    fn test_lookup_each_version() {
        for ruleset in Ruleset::all() {
            let found = Ruleset::lookup(ruleset.version).unwrap_or_else(|e| unreachable!("{e}"));
            assert_eq!(found, ruleset);
        }
    }

    // Tests unknown versions report the known ones
    // Verified by dropping the known list from the message
    #[test]
    fn test_lookup_unknown_version() {
        let Err(error) = Ruleset::lookup("99") else {
            unreachable!("version 99 should not exist");
        };

        assert!(matches!(error, QuizError::UnknownRuleset { .. }));
        let message = error.to_string();
        assert!(message.contains("99"));
        assert!(message.contains("12"));
    }

    // Tests the current ruleset is the configured one
    // Verified by returning the first ruleset
    #[test]
    fn test_current_ruleset() {
        let current = Ruleset::current();
        assert_eq!(current.version, CURRENT_RULESET);
        assert!(current.leak_filter);
        assert_eq!(current.insertion_alphabet, InsertionAlphabet::PatternLetters);
    }

    // Tests the baseline ruleset keeps the universal alphabet and no leak filter
    // Verified by enabling the filter in version 1
    #[test]
    fn test_baseline_ruleset() {
        let baseline = Ruleset::lookup("1").unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(baseline.insertion_alphabet, InsertionAlphabet::Universal);
        assert!(!baseline.leak_filter);
        assert_eq!(baseline.match_headroom, None);
    }

    // Tests every ruleset keeps thresholds that can be satisfied
    // Verified by raising a minimum above the sample range
    #[test]
    fn test_rulesets_are_satisfiable() {
        let mut versions = HashSet::new();
        for ruleset in Ruleset::all() {
            assert!(versions.insert(ruleset.version), "duplicate {}", ruleset.version);
            assert!(ruleset.min_matches >= 2 && ruleset.min_non_matches >= 2);
            assert!(
                *ruleset.sample_count.start() >= ruleset.min_matches + ruleset.min_non_matches
            );
            if let Some(headroom) = ruleset.match_headroom {
                assert!(*ruleset.sample_count.start() >= ruleset.min_matches + headroom);
            }
            assert!(!ruleset.pattern_length.is_empty());
            assert!(ruleset.max_attempts > 0);
            assert_eq!(ruleset.fallback_seed, SAFE_SEED);
        }
    }
}

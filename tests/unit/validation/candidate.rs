//! Tests for player candidate checking

#[cfg(test)]
mod tests {
    use regex_quiz::validation::candidate::{Verdict, check_candidate};
    use std::collections::BTreeSet;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    // Tests an uncompilable candidate is reported, not raised
    // Verified by propagating the regex error
    #[test]
    fn test_invalid_candidate_reported() {
        let report = check_candidate("([", &set(&["a", "b"]), &set(&["c"]));

        assert!(!report.compiled);
        assert!(!report.all_matches_match);
        assert!(!report.all_non_matches_rejected);
        assert!(!report.is_solved());
        assert!(
            report
                .match_verdicts
                .iter()
                .chain(&report.non_match_verdicts)
                .all(|(_, verdict)| *verdict == Verdict::Invalid)
        );
        assert_eq!(report.match_verdicts.len(), 2);
    }

    // Tests a candidate reproducing the partition solves it
    // Verified by requiring full-string matches
    #[test]
    fn test_solving_candidate() {
        let report = check_candidate("a", &set(&["a", "ba"]), &set(&["b", "cc"]));

        assert!(report.compiled);
        assert!(report.all_matches_match);
        assert!(report.all_non_matches_rejected);
        assert!(report.is_solved());
    }

    // Tests partial solutions report which side fails
    // Verified by swapping the two flags
    #[test]
    fn test_partial_candidates() {
        let matches = set(&["ab", "ac"]);
        let non_matches = set(&["bc", "cc"]);

        let too_narrow = check_candidate("ab", &matches, &non_matches);
        assert!(!too_narrow.all_matches_match);
        assert!(too_narrow.all_non_matches_rejected);
        assert_eq!(
            too_narrow.match_verdicts,
            vec![
                ("ab".to_string(), Verdict::Matched),
                ("ac".to_string(), Verdict::Unmatched)
            ]
        );

        let too_broad = check_candidate("c", &matches, &non_matches);
        assert!(!too_broad.all_non_matches_rejected);
        assert!(!too_broad.is_solved());
    }

    // Tests candidates use unanchored search
    // Verified by anchoring candidates
    #[test]
    fn test_candidate_search_semantics() {
        let report = check_candidate("a+", &set(&["a", "aa", "ab"]), &set(&["b"]));
        assert!(report.is_solved());
    }

    // Tests empty sample sets are vacuously satisfied
    // Verified by requiring at least one verdict
    #[test]
    fn test_empty_sets_vacuous() {
        let report = check_candidate("x", &BTreeSet::new(), &BTreeSet::new());
        assert!(report.is_solved());
        assert!(report.match_verdicts.is_empty());
    }
}

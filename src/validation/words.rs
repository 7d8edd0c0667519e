//! Word extraction for substring leak detection
//!
//! A word is any contiguous run of ASCII alphanumerics inside a sample,
//! including every shorter substring of a maximal run.

use std::collections::BTreeSet;

/// All words of `text`
pub fn words(text: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();

    for run in text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|run| !run.is_empty())
    {
        // Runs are ASCII, so every byte offset is a char boundary
        for start in 0..run.len() {
            for end in start + 1..=run.len() {
                if let Some(word) = run.get(start..end) {
                    found.insert(word.to_string());
                }
            }
        }
    }

    found
}

/// Words shared by every string, or nothing for an empty input
pub fn common_words<'a, I>(strings: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut strings = strings.into_iter();
    let Some(first) = strings.next() else {
        return BTreeSet::new();
    };

    strings.fold(words(first), |common, text| {
        if common.is_empty() {
            return common;
        }
        let candidate_words = words(text);
        common
            .into_iter()
            .filter(|word| candidate_words.contains(word))
            .collect()
    })
}

/// Words common to every match that no non-match contains
///
/// Any such word separates the two sets with a fixed-substring rule.
pub fn leaked_words(
    matches: &BTreeSet<String>,
    non_matches: &BTreeSet<String>,
) -> BTreeSet<String> {
    common_words(matches)
        .into_iter()
        .filter(|word| !non_matches.iter().any(|text| text.contains(word.as_str())))
        .collect()
}

use std::collections::HashSet;

use super::vocabulary::{is_proper_noun, is_stop_word};

pub const MAX_KEYWORDS: usize = 5;

const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}',
];

/// Words that translations of the sentence's loanwords produced.
///
/// The learner can already guess these from the katakana, so they are not
/// worth suggesting.
#[must_use]
pub fn exclusion_set(translations: &[String]) -> HashSet<String> {
    translations
        .iter()
        .flat_map(|translation| {
            let normalized: String = translation
                .to_lowercase()
                .chars()
                .filter(|c| !PUNCTUATION.contains(c))
                .collect();
            normalized
                .split_whitespace()
                .filter(|word| word.chars().count() > 1)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Up to five distinct, non-trivial words from an English translation, in
/// order of first appearance.
#[must_use]
pub fn extract_keywords(translation: &str, exclude: &HashSet<String>) -> Vec<String> {
    let normalized = translation.to_lowercase().replace(PUNCTUATION, " ");

    let mut seen = HashSet::new();
    normalized
        .split_whitespace()
        .filter(|word| is_candidate(word, exclude))
        .filter(|word| seen.insert(*word))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

fn is_candidate(word: &str, exclude: &HashSet<String>) -> bool {
    word.chars().count() > 2
        && !is_stop_word(word)
        && !is_proper_noun(word)
        && !exclude.contains(word)
        && !word.chars().all(|c| c.is_ascii_digit())
}

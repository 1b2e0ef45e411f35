use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest run worth translating; single characters are usually particles
/// or the long-vowel mark.
pub const MIN_RUN_CHARS: usize = 2;

static KATAKANA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{30A0}-\x{30FF}]+").expect("static regex compile"));

/// Maximal runs of Katakana (U+30A0..=U+30FF) at least two characters long,
/// in order of appearance. Duplicates are kept.
#[must_use]
pub fn extract_katakana_runs(text: &str) -> Vec<String> {
    KATAKANA_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|run| run.chars().count() >= MIN_RUN_CHARS)
        .map(str::to_string)
        .collect()
}

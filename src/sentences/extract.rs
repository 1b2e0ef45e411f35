use crate::core::models::{CandidateSentence, Category};

pub const SENTENCE_TERMINATOR: char = '。';
pub const MIN_SENTENCE_CHARS: usize = 10;
pub const MAX_SENTENCE_CHARS: usize = 60;

/// Markers of truncated or decorated text that never make a good prompt.
const REJECTED_MARKERS: &[char] = &['…', '[', '【'];

/// Split `text` on `。` and keep the fragments that read as complete,
/// self-contained sentences.
#[must_use]
pub fn extract_sentences(
    text: &str,
    source: &str,
    category: Category,
    published_at: &str,
) -> Vec<CandidateSentence> {
    text.split(SENTENCE_TERMINATOR)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{fragment}{SENTENCE_TERMINATOR}"))
        .filter(|sentence| is_acceptable(sentence))
        .map(|sentence| CandidateSentence {
            sentence,
            source: source.to_string(),
            category,
            published_at: published_at.to_string(),
        })
        .collect()
}

#[must_use]
pub fn is_acceptable(sentence: &str) -> bool {
    let len = sentence.chars().count();
    (MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&len)
        && !sentence.contains(REJECTED_MARKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        extract_sentences(text, "test", Category::Tech, "2024-01-01T00:00:00Z")
            .into_iter()
            .map(|s| s.sentence)
            .collect()
    }

    #[test]
    fn keeps_sentences_within_length_bounds() {
        let out = texts("これは十分な長さがある文章です。短い。");
        assert_eq!(out, vec!["これは十分な長さがある文章です。".to_string()]);
    }

    #[test]
    fn length_counts_the_appended_terminator() {
        // nine characters plus the terminator is exactly the minimum
        let nine = "あいうえおかきくけ";
        assert_eq!(texts(nine), vec![format!("{nine}。")]);

        let eight = "あいうえおかきく";
        assert!(texts(eight).is_empty());
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let fifty_nine = "あ".repeat(59);
        assert_eq!(texts(&fifty_nine).len(), 1);

        let sixty = "あ".repeat(60);
        assert!(texts(&sixty).is_empty());
    }

    #[test]
    fn length_is_counted_in_characters_not_code_units() {
        // the emoji is one char but two UTF-16 units
        let fits = format!("{}😀", "あ".repeat(58));
        assert_eq!(texts(&fits), vec![format!("{fits}。")]);
        assert!(is_acceptable(&format!("{fits}。")));

        let too_long = format!("{}😀", "あ".repeat(59));
        assert!(texts(&too_long).is_empty());
    }

    #[test]
    fn rejects_ellipsis_and_brackets() {
        let out = texts(
            "新製品が発表されました…詳細は後日。[PR]新しいサービスが始まりました。【速報】大きな地震が発生しました。",
        );
        assert!(out.is_empty(), "unexpected: {out:?}");
    }

    #[test]
    fn trims_whitespace_and_skips_empty_fragments() {
        let out = texts("  今日は良い天気になりそうです。 \n 。。明日は雨が降るかもしれません。");
        assert_eq!(
            out,
            vec![
                "今日は良い天気になりそうです。".to_string(),
                "明日は雨が降るかもしれません。".to_string(),
            ]
        );
    }

    #[test]
    fn exclamation_does_not_split_a_sentence() {
        let text = "これはテストです。それはすごいですね！今日は晴れです。";
        let out = texts(text);

        // "これはテストです。" is nine characters and falls below the minimum
        assert_eq!(out, vec!["それはすごいですね！今日は晴れです。".to_string()]);
        for sentence in &out {
            let len = sentence.chars().count();
            assert!((MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&len));
            assert!(sentence.ends_with(SENTENCE_TERMINATOR));
        }
    }

    #[test]
    fn carries_metadata_onto_every_sentence() {
        let out = extract_sentences(
            "世界中で新しい技術が広がっています。",
            "BBC Japan",
            Category::World,
            "2024-05-01T09:00:00+00:00",
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].source, "BBC Japan");
        assert_eq!(out[0].category, Category::World);
        assert_eq!(out[0].published_at, "2024-05-01T09:00:00+00:00");
    }
}

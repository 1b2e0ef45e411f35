//! Grammar-pattern detection over an English translation.
//!
//! The checks are deliberately shallow substring and regex heuristics. Rules
//! are evaluated in declaration order and the first matches win, so the
//! order below is a priority order.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_GRAMMAR_PATTERNS: usize = 2;

pub const FUTURE_WILL: &str = "will + 動詞原形（未来形）";
pub const PERFECT_PASSIVE: &str = "have/has been + 過去分詞（現在完了受動態）";
pub const PRESENT_PERFECT: &str = "have/has + 過去分詞（現在完了形）";
pub const HAVE_TO: &str = "have to + 動詞原形（〜しなければならない）";
pub const PAST_PASSIVE: &str = "was/were + 過去分詞（過去受動態）";
pub const PRESENT_PASSIVE: &str = "is/are + 過去分詞（現在受動態）";
pub const GOING_TO: &str = "be going to + 動詞原形（〜する予定）";
pub const WOULD: &str = "would + 動詞原形（〜だろう/仮定法）";
pub const COULD: &str = "could + 動詞原形（〜できた/可能性）";
pub const SHOULD: &str = "should + 動詞原形（〜すべき）";
pub const MUST: &str = "must + 動詞原形（〜しなければならない）";
pub const MAY_MIGHT: &str = "may/might + 動詞原形（〜かもしれない）";
pub const PROGRESSIVE: &str = "be + 動詞ing（進行形）";
pub const THAT_CLAUSE: &str = "that節（〜ということ）";
pub const TO_INFINITIVE: &str = "to不定詞";

// ASCII word characters only; translations are English.
static WAS_ED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"was [0-9A-Za-z_]+ed").expect("static regex compile"));
static IS_ARE_ED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:is|are) [0-9A-Za-z_]+ed").expect("static regex compile"));
static IS_ARE_BEING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:is|are) being").expect("static regex compile"));
static ING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9A-Za-z_]+ing").expect("static regex compile"));
static REPORTING_THAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:said|reported|announced|believed|thought|known) that")
        .expect("static regex compile")
});
static WORD_TO_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9A-Za-z_]+ to [0-9A-Za-z_]+").expect("static regex compile")
});

/// A single detection rule: a predicate over the lowercased translation and
/// the label shown when it fires.
pub struct GrammarRule {
    pub label: &'static str,
    pub matches: fn(&str) -> bool,
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

pub static GRAMMAR_RULES: &[GrammarRule] = &[
    GrammarRule {
        label: FUTURE_WILL,
        matches: |t| contains_any(t, &["will ", "'ll "]),
    },
    GrammarRule {
        label: PERFECT_PASSIVE,
        matches: |t| contains_any(t, &["have been", "has been"]),
    },
    // Yields to the two rules around it when "have" is really part of
    // "have been" or "have to".
    GrammarRule {
        label: PRESENT_PERFECT,
        matches: |t| {
            contains_any(t, &["have ", "has "])
                && !contains_any(t, &["have to", "has to"])
                && !contains_any(t, &["have been", "has been"])
        },
    },
    GrammarRule {
        label: HAVE_TO,
        matches: |t| contains_any(t, &["have to", "has to"]),
    },
    GrammarRule {
        label: PAST_PASSIVE,
        matches: |t| t.contains("was ") && WAS_ED_RE.is_match(t),
    },
    GrammarRule {
        label: PRESENT_PASSIVE,
        matches: |t| {
            contains_any(t, &["is ", "are "])
                && (IS_ARE_ED_RE.is_match(t) || IS_ARE_BEING_RE.is_match(t))
        },
    },
    GrammarRule {
        label: GOING_TO,
        matches: |t| t.contains("going to "),
    },
    GrammarRule {
        label: WOULD,
        matches: |t| t.contains("would "),
    },
    GrammarRule {
        label: COULD,
        matches: |t| t.contains("could "),
    },
    GrammarRule {
        label: SHOULD,
        matches: |t| t.contains("should "),
    },
    GrammarRule {
        label: MUST,
        matches: |t| t.contains("must "),
    },
    GrammarRule {
        label: MAY_MIGHT,
        matches: |t| contains_any(t, &["may ", "might "]),
    },
    GrammarRule {
        label: PROGRESSIVE,
        matches: |t| ING_RE.is_match(t) && contains_any(t, &["is ", "are ", "was ", "were "]),
    },
    GrammarRule {
        label: THAT_CLAUSE,
        matches: |t| t.contains(" that ") && REPORTING_THAT_RE.is_match(t),
    },
    GrammarRule {
        label: TO_INFINITIVE,
        matches: |t| t.contains(" to ") && WORD_TO_WORD_RE.is_match(t),
    },
];

/// Labels of the first two rules that match `translation`.
#[must_use]
pub fn detect_grammar_patterns(translation: &str) -> Vec<&'static str> {
    let lower = translation.to_lowercase();
    GRAMMAR_RULES
        .iter()
        .filter(|rule| (rule.matches)(&lower))
        .map(|rule| rule.label)
        .take(MAX_GRAMMAR_PATTERNS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_passive_wins_over_plain_perfect() {
        let patterns = detect_grammar_patterns("The repairs have been completed.");
        assert_eq!(patterns[0], PERFECT_PASSIVE);
        assert!(!patterns.contains(&PRESENT_PERFECT));
    }

    #[test]
    fn plain_perfect_without_been() {
        let patterns = detect_grammar_patterns("She has finished the report.");
        assert_eq!(patterns, vec![PRESENT_PERFECT]);
    }

    #[test]
    fn have_to_is_not_a_perfect() {
        let patterns = detect_grammar_patterns("We have to leave now.");
        assert_eq!(patterns, vec![HAVE_TO, TO_INFINITIVE]);
    }

    #[test]
    fn capped_at_two_in_declaration_order() {
        // matches future, would, should and the to-infinitive
        let patterns = detect_grammar_patterns(
            "You should know that he would say he will try to win.",
        );
        assert_eq!(patterns, vec![FUTURE_WILL, WOULD]);
    }

    #[test]
    fn contraction_future() {
        assert_eq!(detect_grammar_patterns("I'll call you."), vec![FUTURE_WILL]);
    }

    #[test]
    fn past_passive_requires_ed_participle() {
        assert_eq!(
            detect_grammar_patterns("The bridge was opened in May."),
            vec![PAST_PASSIVE]
        );
        assert!(detect_grammar_patterns("The bridge was new.").is_empty());
    }

    #[test]
    fn present_passive_and_progressive() {
        let patterns = detect_grammar_patterns("A new app is being developed.");
        assert_eq!(patterns, vec![PRESENT_PASSIVE, PROGRESSIVE]);
    }

    #[test]
    fn reporting_verb_that_clause() {
        let patterns = detect_grammar_patterns("The ministry announced that prices rose.");
        assert_eq!(patterns, vec![THAT_CLAUSE]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            detect_grammar_patterns("PRICES MUST FALL."),
            vec![MUST]
        );
    }

    #[test]
    fn simple_sentence_has_no_patterns() {
        assert!(detect_grammar_patterns("It rained.").is_empty());
    }

    #[test]
    fn rule_table_has_fifteen_distinct_labels() {
        let labels: std::collections::HashSet<_> = GRAMMAR_RULES.iter().map(|r| r.label).collect();
        assert_eq!(GRAMMAR_RULES.len(), 15);
        assert_eq!(labels.len(), 15);
    }
}

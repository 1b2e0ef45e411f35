use crate::core::models::Hint;

pub const KEYWORDS_HEADER: &str = "【使える単語・熟語】";
pub const GRAMMAR_HEADER: &str = "【文法表現】";
pub const BASIC_VOCABULARY_FALLBACK: &str = "この文は基本的な単語で構成されています。";
const BULLET: &str = "• ";

fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("{BULLET}{}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a hint as the plain-text block shown under the practice sentence.
#[must_use]
pub fn format_hint(hint: &Hint) -> String {
    let mut sections = Vec::new();

    if !hint.keywords.is_empty() {
        sections.push(format!("{KEYWORDS_HEADER}\n{}", bullet_list(&hint.keywords)));
    }
    if !hint.grammar_patterns.is_empty() {
        sections.push(format!(
            "{GRAMMAR_HEADER}\n{}",
            bullet_list(&hint.grammar_patterns)
        ));
    }

    if sections.is_empty() {
        BASIC_VOCABULARY_FALLBACK.to_string()
    } else {
        sections.join("\n\n")
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Culture,
    Food,
    Fashion,
    World,
    News,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Tech => "tech",
            Category::Culture => "culture",
            Category::Food => "food",
            Category::Fashion => "fashion",
            Category::World => "world",
            Category::News => "news",
        };
        f.write_str(name)
    }
}

/// Static description of one RSS feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSource {
    pub url: &'static str,
    pub source: &'static str,
    pub category: Category,
}

/// A short Japanese sentence eligible for display.
///
/// Serializes to the `GET /sentences` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSentence {
    pub sentence: String,
    pub source: String,
    pub category: Category,
    pub published_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hint {
    pub keywords: Vec<String>,
    pub grammar_patterns: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct HintRequest {
    #[serde(default)]
    pub sentence: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HintResponse {
    pub hint: String,
}

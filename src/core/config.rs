use std::env;

pub const DEFAULT_DEEPL_API_URL: &str = "https://api-free.deepl.com/v2/translate";
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Value shipped in the sample env file; treated the same as an unset key.
const NEWS_API_KEY_PLACEHOLDER: &str = "your_newsapi_key_here";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub deepl_api_key: Option<String>,
    pub deepl_api_url: String,
    pub news_api_key: Option<String>,
    pub news_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            deepl_api_key: non_empty_var("DEEPL_API_KEY"),
            deepl_api_url: non_empty_var("DEEPL_API_URL")
                .unwrap_or_else(|| DEFAULT_DEEPL_API_URL.to_string()),
            news_api_key: non_empty_var("NEWS_API_KEY"),
            news_api_url: non_empty_var("NEWS_API_URL")
                .unwrap_or_else(|| DEFAULT_NEWS_API_URL.to_string()),
        }
    }

    /// The news-search key, unless it is missing or still the placeholder.
    #[must_use]
    pub fn usable_news_api_key(&self) -> Option<&str> {
        self.news_api_key
            .as_deref()
            .filter(|key| *key != NEWS_API_KEY_PLACEHOLDER)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deepl_api_key: None,
            deepl_api_url: DEFAULT_DEEPL_API_URL.to_string(),
            news_api_key: None,
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

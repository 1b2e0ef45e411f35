//! News search API source (newsapi.org)
//!
//! Optional: only constructed when a usable key is configured.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::SentenceSource;
use super::extract::extract_sentences;
use crate::core::models::{CandidateSentence, Category};
use crate::errors::EisakuError;

pub const NEWS_DOMAINS: &str = "nhk.or.jp,asahi.com,mainichi.jp,yomiuri.co.jp";
pub const NEWS_PAGE_SIZE: u32 = 50;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub source: ArticleSource,
    #[serde(default)]
    pub published_at: String,
}

#[derive(Debug, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: String,
}

pub struct NewsApiSource {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl NewsApiSource {
    #[must_use]
    pub fn new(http: Client, api_key: String, endpoint: String) -> Self {
        Self {
            http,
            api_key,
            endpoint,
        }
    }

    fn request_url(&self) -> Result<Url, EisakuError> {
        let page_size = NEWS_PAGE_SIZE.to_string();
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("domains", NEWS_DOMAINS),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ],
        )
        .map_err(|e| EisakuError::ParseError(format!("invalid news API URL: {e}")))
    }

    async fn fetch(&self) -> Result<Vec<CandidateSentence>, EisakuError> {
        let resp = self.http.get(self.request_url()?).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(EisakuError::HttpError(format!("news API returned {status}")));
        }
        let body: NewsApiResponse = resp.json().await?;
        debug!(total_results = body.total_results, "News API response");
        Ok(sentences_from_articles(&body))
    }
}

#[async_trait]
impl SentenceSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn sentences(&self) -> Vec<CandidateSentence> {
        match self.fetch().await {
            Ok(sentences) => sentences,
            Err(e) => {
                warn!("NewsAPI error: {}", e);
                Vec::new()
            }
        }
    }
}

/// Sentences from every article description of a successful response.
#[must_use]
pub fn sentences_from_articles(response: &NewsApiResponse) -> Vec<CandidateSentence> {
    if response.status != "ok" {
        return Vec::new();
    }

    response
        .articles
        .iter()
        .filter_map(|article| {
            let description = article.description.as_deref()?;
            Some(extract_sentences(
                description,
                &article.source.name,
                Category::News,
                &article.published_at,
            ))
        })
        .flatten()
        .collect()
}

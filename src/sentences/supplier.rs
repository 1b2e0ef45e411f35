use futures::future::join_all;
use rand::Rng;
use reqwest::Client;
use tracing::info;

use super::SentenceSource;
use super::feeds::{RSS_FEEDS, RssFeedSource};
use super::news_api::NewsApiSource;
use crate::core::config::AppConfig;
use crate::core::models::CandidateSentence;
use crate::errors::EisakuError;

pub struct SentenceSupplier {
    sources: Vec<Box<dyn SentenceSource>>,
}

impl SentenceSupplier {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn SentenceSource>>) -> Self {
        Self { sources }
    }

    /// Every RSS feed, plus the news API when a usable key is configured.
    #[must_use]
    pub fn from_config(config: &AppConfig, http: &Client) -> Self {
        let mut sources: Vec<Box<dyn SentenceSource>> = RSS_FEEDS
            .iter()
            .map(|feed| {
                Box::new(RssFeedSource::new(http.clone(), *feed)) as Box<dyn SentenceSource>
            })
            .collect();

        if let Some(key) = config.usable_news_api_key() {
            sources.push(Box::new(NewsApiSource::new(
                http.clone(),
                key.to_string(),
                config.news_api_url.clone(),
            )));
        }

        Self::new(sources)
    }

    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Query every source concurrently and concatenate the results.
    pub async fn gather(&self) -> Vec<CandidateSentence> {
        let results = join_all(self.sources.iter().map(|source| source.sentences())).await;

        let mut all = Vec::new();
        for (source, sentences) in self.sources.iter().zip(results) {
            info!(source = source.name(), count = sentences.len(), "Gathered sentences");
            all.extend(sentences);
        }
        all
    }

    /// Gather from all sources and pick one sentence uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`EisakuError::NoSentences`] when no source produced anything.
    pub async fn random_sentence(&self) -> Result<CandidateSentence, EisakuError> {
        let all = self.gather().await;
        info!("Gathered {} candidate sentences in total", all.len());
        choose(all, &mut rand::thread_rng())
    }
}

/// Take one element of `sentences` chosen uniformly by `rng`.
pub fn choose<R: Rng + ?Sized>(
    mut sentences: Vec<CandidateSentence>,
    rng: &mut R,
) -> Result<CandidateSentence, EisakuError> {
    if sentences.is_empty() {
        return Err(EisakuError::NoSentences);
    }
    let index = rng.gen_range(0..sentences.len());
    Ok(sentences.swap_remove(index))
}

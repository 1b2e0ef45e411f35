//! Sentence Supplier: gathers short Japanese sentences from feeds and news
//! search and hands one back at random.

pub mod extract;
pub mod feeds;
pub mod news_api;
pub mod supplier;

use async_trait::async_trait;

use crate::core::models::CandidateSentence;

/// One upstream provider of candidate sentences.
///
/// Sources swallow their own failures and report them as an empty list.
#[async_trait]
pub trait SentenceSource: Send + Sync {
    fn name(&self) -> &str;

    async fn sentences(&self) -> Vec<CandidateSentence>;
}

pub use extract::extract_sentences;
pub use supplier::SentenceSupplier;

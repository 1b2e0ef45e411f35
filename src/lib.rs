//! eisaku - backend for an English-composition practice tool.
//!
//! A single API Lambda serves two stateless endpoints:
//! 1. `GET /sentences` gathers short Japanese sentences from RSS feeds and an
//!    optional news search API, and returns one at random
//! 2. `POST /hints` machine-translates a sentence and suggests English
//!    vocabulary and grammar patterns for writing it
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda behind API Gateway for serverless execution
//! - feed-rs and html2text for reading news feeds
//! - DeepL for Japanese → English translation
//! - Tokio for async runtime, with per-request concurrent fan-out
//!
//! # Example
//!
//! ```no_run
//! use eisaku::core::config::AppConfig;
//! use eisaku::hints::HintGenerator;
//! use eisaku::sentences::SentenceSupplier;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     eisaku::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let http = eisaku::clients::shared_client();
//!
//!     let sentence = SentenceSupplier::from_config(&config, &http)
//!         .random_sentence()
//!         .await?;
//!     println!("{} ({})", sentence.sentence, sentence.source);
//!
//!     let hint = HintGenerator::from_config(&config, &http)?
//!         .generate(&sentence.sentence)
//!         .await?;
//!     println!("{hint}");
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod hints;
pub mod sentences;

pub use errors::EisakuError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process start.
/// Calling it again is a no-op.
///
/// # Example
///
/// ```
/// eisaku::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

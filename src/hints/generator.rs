use reqwest::Client;
use std::collections::HashSet;
use tracing::{info, warn};

use super::format::format_hint;
use super::grammar::detect_grammar_patterns;
use super::katakana::extract_katakana_runs;
use super::keywords::{exclusion_set, extract_keywords};
use crate::clients::{DeepLClient, Translator};
use crate::core::config::AppConfig;
use crate::core::models::Hint;
use crate::errors::EisakuError;

pub struct HintGenerator {
    translator: Box<dyn Translator>,
}

impl HintGenerator {
    #[must_use]
    pub fn new(translator: Box<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Build a generator backed by DeepL.
    ///
    /// # Errors
    ///
    /// Returns [`EisakuError::MissingApiKey`] when `DEEPL_API_KEY` is unset.
    pub fn from_config(config: &AppConfig, http: &Client) -> Result<Self, EisakuError> {
        let api_key = config
            .deepl_api_key
            .clone()
            .ok_or_else(|| EisakuError::MissingApiKey("DEEPL_API_KEY".to_string()))?;
        Ok(Self::new(Box::new(DeepLClient::new(
            http.clone(),
            api_key,
            config.deepl_api_url.clone(),
        ))))
    }

    /// Translate `sentence` and derive the formatted hint text from it.
    pub async fn generate(&self, sentence: &str) -> Result<String, EisakuError> {
        let sentence = require_sentence(Some(sentence))?;

        let exclude = self.katakana_exclusions(sentence).await;
        let translation = self.translate_sentence(sentence).await?;

        #[cfg(feature = "debug-logs")]
        info!("Translation for hint: {}", translation);

        info!(
            excluded = exclude.len(),
            translation_chars = translation.chars().count(),
            "Translated sentence for hint"
        );

        Ok(format_hint(&build_hint(&translation, &exclude)))
    }

    /// English words for the sentence's loanwords. Failures leave the set empty.
    async fn katakana_exclusions(&self, sentence: &str) -> HashSet<String> {
        let runs = extract_katakana_runs(sentence);
        if runs.is_empty() {
            return HashSet::new();
        }

        match self.translator.translate(&runs).await {
            Ok(translations) => exclusion_set(&translations),
            Err(e) => {
                warn!("Katakana translation failed, not excluding loanwords: {}", e);
                HashSet::new()
            }
        }
    }

    async fn translate_sentence(&self, sentence: &str) -> Result<String, EisakuError> {
        let translations = self
            .translator
            .translate(&[sentence.to_string()])
            .await
            .map_err(|e| match e {
                EisakuError::TranslationFailed(_) => e,
                other => EisakuError::TranslationFailed(other.to_string()),
            })?;

        translations
            .into_iter()
            .next()
            .filter(|text| !text.trim().is_empty())
            .ok_or(EisakuError::EmptyTranslation)
    }
}

/// Validate the request's sentence field.
///
/// # Errors
///
/// Returns [`EisakuError::MissingSentence`] for a missing or blank sentence.
pub fn require_sentence(sentence: Option<&str>) -> Result<&str, EisakuError> {
    sentence
        .filter(|s| !s.trim().is_empty())
        .ok_or(EisakuError::MissingSentence)
}

/// Keywords and grammar patterns for one translation. Pure.
#[must_use]
pub fn build_hint(translation: &str, exclude: &HashSet<String>) -> Hint {
    Hint {
        keywords: extract_keywords(translation, exclude),
        grammar_patterns: detect_grammar_patterns(translation),
    }
}

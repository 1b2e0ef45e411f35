//! DeepL translation client
//!
//! Only the Japanese → English direction is needed: the hint generator
//! translates both the practice sentence and the loanwords found in it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::errors::EisakuError;

const SOURCE_LANG: &str = "JA";
const TARGET_LANG: &str = "EN";

/// Translates batches of Japanese text into English.
///
/// The returned vector is index-aligned with `texts`. Implementations may
/// return fewer entries than requested; callers treat missing entries as
/// untranslated.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, texts: &[String]) -> Result<Vec<String>, EisakuError>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a [String],
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub detected_source_language: Option<String>,
    pub text: String,
}

pub struct DeepLClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl DeepLClient {
    #[must_use]
    pub fn new(http: Client, api_key: String, endpoint: String) -> Self {
        Self {
            http,
            api_key,
            endpoint,
        }
    }

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key)
    }
}

#[async_trait]
impl Translator for DeepLClient {
    async fn translate(&self, texts: &[String]) -> Result<Vec<String>, EisakuError> {
        let body = TranslateRequest {
            text: texts,
            source_lang: SOURCE_LANG,
            target_lang: TARGET_LANG,
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| EisakuError::TranslationFailed(format!("request error: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!("DeepL API error: {} {}", status, text);
            return Err(EisakuError::TranslationFailed(format!(
                "DeepL returned {status}"
            )));
        }

        let parsed: TranslateResponse = resp
            .json()
            .await
            .map_err(|e| EisakuError::TranslationFailed(format!("invalid response: {e}")))?;

        debug!(
            count = parsed.translations.len(),
            detected = ?parsed
                .translations
                .first()
                .and_then(|t| t.detected_source_language.as_deref()),
            "DeepL translation complete"
        );

        Ok(parsed.translations.into_iter().map(|t| t.text).collect())
    }
}

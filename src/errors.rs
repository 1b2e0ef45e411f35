use thiserror::Error;

#[derive(Debug, Error)]
pub enum EisakuError {
    #[error("Request did not include a sentence")]
    MissingSentence,

    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Translation request failed: {0}")]
    TranslationFailed(String),

    #[error("Translation response contained no text")]
    EmptyTranslation,

    #[error("No suitable sentences found")]
    NoSentences,

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    /// A single feed could not be fetched or parsed. Feed sources log this
    /// and contribute no sentences; it never reaches a response on its own.
    #[error("Failed to read feed: {0}")]
    FeedError(String),
}

impl EisakuError {
    /// HTTP status the API layer reports for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            EisakuError::MissingSentence => 400,
            _ => 500,
        }
    }

    /// Message shown to the caller. Internal detail stays in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            EisakuError::MissingSentence => "文が指定されていません",
            EisakuError::MissingApiKey(_) => "APIキーが設定されていません",
            EisakuError::EmptyTranslation => "翻訳結果を取得できませんでした",
            EisakuError::NoSentences | EisakuError::FeedError(_) => "No suitable sentences found",
            EisakuError::TranslationFailed(_)
            | EisakuError::HttpError(_)
            | EisakuError::ParseError(_) => "ヒントの取得に失敗しました",
        }
    }
}

impl From<reqwest::Error> for EisakuError {
    fn from(error: reqwest::Error) -> Self {
        EisakuError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for EisakuError {
    fn from(error: serde_json::Error) -> Self {
        EisakuError::ParseError(error.to_string())
    }
}

//! Outbound HTTP clients for third-party services

pub mod deepl;
pub mod http;

pub use deepl::{DeepLClient, Translator};
pub use http::shared_client;

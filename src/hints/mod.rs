//! Hint Generator: turns a Japanese practice sentence into English
//! vocabulary and grammar suggestions.

pub mod format;
pub mod generator;
pub mod grammar;
pub mod katakana;
pub mod keywords;
pub mod vocabulary;

pub use format::format_hint;
pub use generator::{HintGenerator, build_hint, require_sentence};

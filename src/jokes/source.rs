use std::fmt;

use async_trait::async_trait;

use super::types::{Category, JokeEntry, Language};

/// Failures on the way from filters to joke text.
///
/// None of these reach the caller of [`JokeSource::fetch`]; they end up as the
/// content of the returned entry.
#[derive(Debug)]
pub enum FetchError {
    /// The request URL could not be assembled from the base URL.
    Url(String),
    /// Connection, DNS or TLS failure.
    Network(String),
    /// The body was not valid UTF-8.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Url(msg) => write!(f, "Could not build the joke URL: {msg}"),
            FetchError::Network(msg) => write!(f, "Could not reach the joke server: {msg}"),
            FetchError::Decode(msg) => write!(f, "The joke server sent unreadable text: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetches one joke. Always yields an entry: on failure its content
    /// describes what went wrong.
    async fn fetch(&self, category: Category, language: Language) -> JokeEntry;
}

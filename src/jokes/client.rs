//! JokeAPI client.
//!
//! One `GET {base}/joke/{segment}?lang={code}&format=txt&type=single` per
//! joke. The body is taken as-is; the status code is only logged, since the
//! API answers errors with readable text too.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use super::source::{FetchError, JokeSource};
use super::types::{Category, JokeEntry, Language};

pub const DEFAULT_BASE_URL: &str = "https://v2.jokeapi.dev";

/// HTTP-backed joke source.
pub struct JokeApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl JokeApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request URL for a category/language pair.
    pub fn build_url(&self, category: Category, language: Language) -> Result<Url, FetchError> {
        build_url(&self.base_url, category, language)
    }

    async fn request_text(&self, url: Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Joke server answered HTTP {}, keeping body as content", status.as_u16());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Joke response: status={}, {} bytes", status.as_u16(), body.len());

        String::from_utf8(body.to_vec()).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// `base` + `/joke/<segment>` + the fixed query. A base URL with a path
/// prefix keeps it (`http://host/v2` → `http://host/v2/joke/Any`).
pub fn build_url(base: &str, category: Category, language: Language) -> Result<Url, FetchError> {
    let mut url = Url::parse(base).map_err(|e| FetchError::Url(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::Url(format!("{base} cannot carry a path")))?
        .pop_if_empty()
        .push("joke")
        .push(category.path_segment());
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair("lang", language.code())
        .append_pair("format", "txt")
        .append_pair("type", "single");
    Ok(url)
}

#[async_trait]
impl JokeSource for JokeApiClient {
    fn name(&self) -> &str {
        "jokeapi"
    }

    async fn fetch(&self, category: Category, language: Language) -> JokeEntry {
        let result = match self.build_url(category, language) {
            Ok(url) => {
                debug!("Fetching joke from {}", url);
                self.request_text(url).await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(text) => {
                info!(
                    "Fetched {} joke ({}): {} chars",
                    category.label(),
                    language.code(),
                    text.chars().count()
                );
                JokeEntry::new(text)
            }
            Err(e) => {
                warn!("Joke fetch failed: {}", e);
                JokeEntry::new(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_value(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_build_url_every_filter_pair() {
        for category in Category::ALL {
            for language in Language::ALL {
                let url = build_url(DEFAULT_BASE_URL, category, language).unwrap();
                let segments: Vec<_> = url.path_segments().unwrap().collect();
                assert_eq!(segments.len(), 2);
                assert_eq!(segments[0], "joke");
                assert_eq!(segments[1] == "Any", category == Category::All);
                assert_eq!(query_value(&url, "lang").as_deref(), Some(language.code()));
                assert_eq!(query_value(&url, "format").as_deref(), Some("txt"));
                assert_eq!(query_value(&url, "type").as_deref(), Some("single"));
            }
        }
    }

    #[test]
    fn test_build_url_programming_spanish() {
        let url = build_url(DEFAULT_BASE_URL, Category::Programming, Language::Es).unwrap();
        assert_eq!(
            url.as_str(),
            "https://v2.jokeapi.dev/joke/Programming?lang=es&format=txt&type=single"
        );
    }

    #[test]
    fn test_build_url_all_english() {
        let url = build_url(DEFAULT_BASE_URL, Category::All, Language::En).unwrap();
        assert_eq!(url.path(), "/joke/Any");
        assert_eq!(query_value(&url, "lang").as_deref(), Some("en"));
    }

    #[test]
    fn test_build_url_keeps_base_path_prefix() {
        let url = build_url("http://localhost:8080/v2/", Category::Pun, Language::De).unwrap();
        assert_eq!(url.path(), "/v2/joke/Pun");
    }

    #[test]
    fn test_build_url_rejects_garbage_base() {
        let err = build_url("not a url", Category::All, Language::En).unwrap_err();
        assert!(matches!(err, FetchError::Url(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_build_url_rejects_cannot_be_a_base() {
        let err = build_url("mailto:jokes@example.com", Category::All, Language::En).unwrap_err();
        assert!(matches!(err, FetchError::Url(_)));
    }

    #[test]
    fn test_bad_base_url_fetch_yields_error_entry() {
        let client = JokeApiClient::new(Some("not a url".to_string()));
        let entry = tokio_test::block_on(client.fetch(Category::Dark, Language::Cs));
        assert!(entry.content().starts_with("Could not build the joke URL"));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(JokeApiClient::new(None).base_url(), DEFAULT_BASE_URL);
    }
}

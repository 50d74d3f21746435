//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::jokes::{Category, JokeEntry, JokeSource, Language};

/// Answers every fetch with the same text and records the filters it was asked for.
pub struct StaticSource {
    text: String,
    pub calls: Mutex<Vec<(Category, Language)>>,
}

impl StaticSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

#[async_trait]
impl JokeSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, category: Category, language: Language) -> JokeEntry {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((category, language));
        }
        JokeEntry::new(self.text.clone())
    }
}

/// Creates a test App backed by a StaticSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StaticSource::new(
        "Why did the test pass? It was mocked.",
    )))
}

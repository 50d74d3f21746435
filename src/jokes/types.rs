//! Domain types shared by the joke source and the core state.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text of the card a fresh session starts with.
pub const PLACEHOLDER_TEXT: &str = "Slide to start";

/// One card on the deck: a fetched joke, an error description, or the placeholder.
///
/// Entries are never mutated after creation. Identity is the `id` alone, so two
/// entries with the same text are still distinct cards.
#[derive(Debug, Clone)]
pub struct JokeEntry {
    id: Uuid,
    content: String,
}

impl JokeEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TEXT)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl PartialEq for JokeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for JokeEntry {}

/// Direction for cycling through a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Forward,
    Backward,
}

/// Topic filter sent to the joke API as a path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Programming,
    Miscellaneous,
    Dark,
    Pun,
    Spooky,
    Christmas,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::All,
        Category::Programming,
        Category::Miscellaneous,
        Category::Dark,
        Category::Pun,
        Category::Spooky,
        Category::Christmas,
    ];

    /// Path segment understood by the API. `All` is the wildcard `Any`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Category::All => "Any",
            other => other.label(),
        }
    }

    /// Name shown in the picker.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Programming => "Programming",
            Category::Miscellaneous => "Miscellaneous",
            Category::Dark => "Dark",
            Category::Pun => "Pun",
            Category::Spooky => "Spooky",
            Category::Christmas => "Christmas",
        }
    }

    pub fn cycle(self, direction: Cycle) -> Self {
        cycle_in(&Self::ALL, self, direction)
    }

    /// Parses the lowercase config/env spelling (`"programming"`, `"all"`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Language sent to the joke API as the `lang` query value.
///
/// Only these four are offered; other codes the API knows about are left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    De,
    Cs,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::De, Language::Cs];

    /// Two-letter code used in the query string.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
            Language::Cs => "cs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::De => "Deutsch",
            Language::Cs => "Čeština",
        }
    }

    pub fn cycle(self, direction: Cycle) -> Self {
        cycle_in(&Self::ALL, self, direction)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(value.trim()))
    }
}

fn cycle_in<T: Copy + PartialEq>(all: &[T], current: T, direction: Cycle) -> T {
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    let len = all.len();
    let next = match direction {
        Cycle::Forward => (pos + 1) % len,
        Cycle::Backward => (pos + len - 1) % len,
    };
    all[next]
}

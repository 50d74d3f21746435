//! # Application State
//!
//! Core business state for Joke Deck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn JokeSource>   // where jokes come from
//! ├── deck: JokeList                // cards, last = top
//! ├── swipe: SwipeState             // drag state of the top card
//! ├── category: Category            // filter for the next fetch
//! ├── language: Language            // filter for the next fetch
//! ├── in_flight: usize              // fetches started, not yet arrived
//! ├── last_request: Option<..>      // filters of the latest fetch started
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::deck::JokeList;
use crate::core::swipe::SwipeState;
use crate::jokes::{Category, JokeSource, Language};

pub const READY_STATUS: &str = "Ready";

/// Filters captured when a fetch is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub category: Category,
    pub language: Language,
}

pub struct App {
    pub source: Arc<dyn JokeSource>,
    pub deck: JokeList,
    pub swipe: SwipeState,
    pub category: Category,
    pub language: Language,
    pub in_flight: usize,
    pub last_request: Option<FetchRequest>,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn JokeSource>) -> Self {
        Self {
            source,
            deck: JokeList::new(),
            swipe: SwipeState::default(),
            category: Category::default(),
            language: Language::default(),
            in_flight: 0,
            last_request: None,
            status_message: String::from(READY_STATUS),
        }
    }

    pub fn from_config(source: Arc<dyn JokeSource>, config: &ResolvedConfig) -> Self {
        Self {
            deck: JokeList::with_limit(config.max_entries),
            category: config.category,
            language: config.language,
            ..Self::new(source)
        }
    }

    /// The request a dismissal would start right now.
    pub fn current_request(&self) -> FetchRequest {
        FetchRequest {
            category: self.category,
            language: self.language,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StaticSource, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, READY_STATUS);
        assert_eq!(app.deck.len(), 1);
        assert!(!app.is_fetching());
        assert_eq!(app.swipe, SwipeState::Idle);
        assert_eq!(app.source.name(), "static");
    }

    #[test]
    fn test_app_from_config() {
        let config = ResolvedConfig {
            category: Category::Dark,
            language: Language::Cs,
            base_url: "http://unused".to_string(),
            max_entries: Some(4),
            units_per_column: 10,
            key_step: 25,
        };
        let app = App::from_config(Arc::new(StaticSource::new("x")), &config);
        assert_eq!(
            app.current_request(),
            FetchRequest {
                category: Category::Dark,
                language: Language::Cs,
            }
        );
        assert_eq!(app.deck.len(), 1);
    }
}

//! # Joke Deck
//!
//! The ordered list of cards. Insertion order is display order: the last
//! entry is the topmost card, the one the user can swipe.
//!
//! ```text
//! entries: [ old ... | window (last 3) ]
//!                               ^ top
//! ```
//!
//! Only the event loop mutates the deck. Fetch results arrive as
//! `Action::JokeArrived` and are appended from there.

use uuid::Uuid;

use crate::jokes::JokeEntry;

/// Number of cards drawn from the tail of the deck.
pub const VISIBLE_CARDS: usize = 3;

#[derive(Debug)]
pub struct JokeList {
    entries: Vec<JokeEntry>,
    /// Oldest entries are evicted past this length. `None` keeps everything.
    max_entries: Option<usize>,
}

impl JokeList {
    /// A fresh deck holding only the placeholder card.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    pub fn with_limit(max_entries: Option<usize>) -> Self {
        Self {
            entries: vec![JokeEntry::placeholder()],
            max_entries: max_entries.map(|n| n.max(1)),
        }
    }

    pub fn entries(&self) -> &[JokeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The card currently on top, if any.
    pub fn top(&self) -> Option<&JokeEntry> {
        self.entries.last()
    }

    /// Adds `entry` as the new top card.
    pub fn append(&mut self, entry: JokeEntry) {
        self.entries.push(entry);
        if let Some(max) = self.max_entries
            && self.entries.len() > max
        {
            let excess = self.entries.len() - max;
            self.entries.drain(..excess);
        }
    }

    /// Removes the first entry with `id`. Returns it, or `None` if absent.
    pub fn remove(&mut self, id: Uuid) -> Option<JokeEntry> {
        let pos = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(pos))
    }

    /// The last [`VISIBLE_CARDS`] entries, oldest first.
    pub fn visible(&self) -> &[JokeEntry] {
        let start = self.entries.len().saturating_sub(VISIBLE_CARDS);
        &self.entries[start..]
    }
}

impl Default for JokeList {
    fn default() -> Self {
        Self::new()
    }
}

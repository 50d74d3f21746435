pub mod client;
pub mod source;
pub mod types;

pub use client::{DEFAULT_BASE_URL, JokeApiClient};
pub use source::{FetchError, JokeSource};
pub use types::{Category, Cycle, JokeEntry, Language, PLACEHOLDER_TEXT};

//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `TitleBar`: app name, status message, fetch spinner
//! - `FilterBar`: selected category and language
//! - `CardStack`: the visible cards, top card shifted by the live drag
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `CardStackState`: turns mouse drags and arrow keys into `GestureEvent`s
//!
//! Components receive external data as "props", not by reaching into `App`:
//!
//! ```rust,ignore
//! FilterBar::new(app.category, app.language).render(frame, area);
//! ```

pub mod card_stack;
mod filter_bar;
mod title_bar;

pub use card_stack::{CardStack, CardStackState, GestureEvent};
pub use filter_bar::FilterBar;
pub use title_bar::TitleBar;

//! # Core Application Logic
//!
//! This module contains Joke Deck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (deck, swipe)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   jokes    │
//!          │  Adapter   │                │ (JokeAPI)  │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`deck`]: The ordered card list
//! - [`swipe`]: Drag state and the dismiss threshold
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod deck;
pub mod state;
pub mod swipe;

//! # Actions
//!
//! Everything that can happen in Joke Deck becomes an `Action`.
//! User lets go of a card? That's `Action::DragReleased`.
//! A fetch finishes? That's `Action::JokeArrived(entry)`.
//!
//! `update()` applies an action to the state and returns an `Effect` the
//! event loop has to carry out. No I/O here: a dismissal asks for a fetch
//! through `Effect::SpawnFetch`, and the fetched entry comes back later as
//! another action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{App, FetchRequest, READY_STATUS};
use crate::core::swipe::SwipeOutcome;
use crate::jokes::{Category, Cycle, JokeEntry, Language};

#[derive(Debug)]
pub enum Action {
    /// A drag began on the top card.
    DragStarted,
    /// The drag moved; absolute horizontal offset in drag units.
    DragMoved(i32),
    DragReleased,
    /// Abandon the drag without resolving it.
    DragCancelled,
    /// A fetch finished (joke or error text).
    JokeArrived(JokeEntry),
    CycleCategory(Cycle),
    CycleLanguage(Cycle),
    SetCategory(Category),
    SetLanguage(Language),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Start a detached fetch and feed the result back as `JokeArrived`.
    SpawnFetch(FetchRequest),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::DragStarted => {
            // Nothing to drag while the deck is empty.
            if app.deck.top().is_some() {
                app.swipe.start();
            }
            Effect::None
        }
        Action::DragMoved(offset) => {
            app.swipe.move_to(offset);
            Effect::None
        }
        Action::DragReleased => match app.swipe.release() {
            Some(SwipeOutcome::Dismiss) => dismiss_top(app),
            Some(SwipeOutcome::SnapBack) => {
                debug!("Drag below threshold, snapping back");
                Effect::None
            }
            None => Effect::None,
        },
        Action::DragCancelled => {
            app.swipe.cancel();
            Effect::None
        }
        Action::JokeArrived(entry) => {
            app.in_flight = app.in_flight.saturating_sub(1);
            debug!("Appending entry {} ({} in flight)", entry.id(), app.in_flight);
            app.deck.append(entry);
            refresh_status(app);
            Effect::None
        }
        Action::CycleCategory(direction) => {
            app.category = app.category.cycle(direction);
            announce_filters(app);
            Effect::None
        }
        Action::CycleLanguage(direction) => {
            app.language = app.language.cycle(direction);
            announce_filters(app);
            Effect::None
        }
        Action::SetCategory(category) => {
            app.category = category;
            announce_filters(app);
            Effect::None
        }
        Action::SetLanguage(language) => {
            app.language = language;
            announce_filters(app);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn dismiss_top(app: &mut App) -> Effect {
    if let Some(id) = app.deck.top().map(|e| e.id()) {
        app.deck.remove(id);
        info!("Dismissed card {}", id);
    }
    let request = app.current_request();
    app.in_flight += 1;
    app.last_request = Some(request);
    refresh_status(app);
    Effect::SpawnFetch(request)
}

/// Status text for the fetch that is running, using the filters it was started with.
fn fetching_status(app: &App) -> Option<String> {
    let request = app.last_request.filter(|_| app.is_fetching())?;
    Some(format!(
        "Fetching {} joke ({})...",
        request.category.label(),
        request.language.code()
    ))
}

fn refresh_status(app: &mut App) {
    app.status_message = fetching_status(app).unwrap_or_else(|| READY_STATUS.to_string());
}

fn announce_filters(app: &mut App) {
    info!(
        "Filters changed: category={}, language={}",
        app.category.label(),
        app.language.code()
    );
    let next = format!("{} / {}", app.category.label(), app.language.label());
    app.status_message = match fetching_status(app) {
        Some(fetching) => format!("{fetching} | Next: {next}"),
        None => format!("Next joke: {next}"),
    };
}

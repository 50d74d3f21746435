//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates mouse and keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Threading
//!
//! The event loop is the only place `App` is mutated. Each fetch runs as a
//! detached tokio task and sends its entry back over an mpsc channel as
//! `Action::JokeArrived`; the loop drains that channel between input events.
//! Fetches are never cancelled, and entries are appended in the order they
//! arrive.
//!
//! ## Redraw Strategy
//!
//! - **Fetching**: draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, FetchRequest};
use crate::jokes::{JokeApiClient, JokeSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{CardStackState, GestureEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub cards: CardStackState,
}

impl TuiState {
    pub fn new(units_per_column: i32, key_step: i32) -> Self {
        Self {
            cards: CardStackState::new(units_per_column, key_step),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Translates a card gesture into the actions it stands for.
///
/// Keyboard nudges have no separate start event, so every move also starts
/// the drag (a no-op if it is already running).
pub fn gesture_actions(gesture: GestureEvent) -> Vec<Action> {
    match gesture {
        GestureEvent::Started => vec![Action::DragStarted],
        GestureEvent::Moved(offset) => vec![Action::DragStarted, Action::DragMoved(offset)],
        GestureEvent::Released => vec![Action::DragReleased],
        GestureEvent::Cancelled => vec![Action::DragCancelled],
    }
}

/// Applies an action and carries out its effect. Returns true on quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::SpawnFetch(request) => {
            spawn_fetch(app.source.clone(), request, tx.clone());
            false
        }
        Effect::None => false,
    }
}

/// Routes an input event to the card stack and applies the resulting gesture.
///
/// With no card on the deck there is nothing to drag: any gesture in progress
/// is dropped so its offset cannot carry over to the next card.
fn handle_card_event(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    tx: &mpsc::Sender<Action>,
) -> bool {
    if app.deck.top().is_none() {
        tui.cards.reset();
        return false;
    }
    let Some(gesture) = tui.cards.handle_event(event) else {
        return false;
    };
    let mut should_quit = false;
    for action in gesture_actions(gesture) {
        should_quit |= dispatch(app, action, tx);
    }
    should_quit
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn JokeSource> = Arc::new(JokeApiClient::new(Some(config.base_url.clone())));
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new(config.units_per_column, config.key_step);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_fetching();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            should_quit |= match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => dispatch(&mut app, Action::Quit, &tx),
                TuiEvent::CycleCategory(direction) => {
                    dispatch(&mut app, Action::CycleCategory(direction), &tx)
                }
                TuiEvent::CycleLanguage(direction) => {
                    dispatch(&mut app, Action::CycleLanguage(direction), &tx)
                }
                other => handle_card_event(&mut app, &mut tui, &other, &tx),
            };
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }

        // Hand fetched entries over to the UI context
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Joke Deck shutting down with {} cards in the deck", app.deck.len());
    ratatui::restore();
    Ok(())
}

/// Starts a detached fetch whose result comes back through `tx`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_fetch(source: Arc<dyn JokeSource>, request: FetchRequest, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning {} fetch: category={}, language={}",
        source.name(),
        request.category.label(),
        request.language.code()
    );
    tokio::spawn(async move {
        let entry = source.fetch(request.category, request.language).await;
        if tx.send(Action::JokeArrived(entry)).is_err() {
            warn!("Failed to deliver fetched joke: receiver dropped");
        }
    });
}

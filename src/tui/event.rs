use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::warn;

use crate::jokes::Cycle;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C
    CycleCategory(Cycle),
    CycleLanguage(Cycle),

    // Gesture input (interpreted by the card stack)
    NudgeLeft,
    NudgeRight,
    Release,
    Cancel,
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Maps a raw crossterm event to a `TuiEvent`, dropping anything we don't use.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Terminals with keyboard enhancement also report releases and repeats
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('c')) => Some(TuiEvent::CycleCategory(Cycle::Forward)),
                (_, KeyCode::Char('C')) => Some(TuiEvent::CycleCategory(Cycle::Backward)),
                (_, KeyCode::Char('l')) => Some(TuiEvent::CycleLanguage(Cycle::Forward)),
                (_, KeyCode::Char('L')) => Some(TuiEvent::CycleLanguage(Cycle::Backward)),
                (_, KeyCode::Left) => Some(TuiEvent::NudgeLeft),
                (_, KeyCode::Right) => Some(TuiEvent::NudgeRight),
                (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Release),
                (_, KeyCode::Esc) => Some(TuiEvent::Cancel),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
                MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::MouseDrag(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

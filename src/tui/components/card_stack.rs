//! # CardStack Component
//!
//! Draws the visible tail of the deck as a pile of cards and turns mouse
//! drags and arrow keys into swipe gestures on the top card.
//!
//! ```text
//!         ┌─ Joke ─────────────────┐      top card, shifted by the live offset
//!         │ Why do programmers ... │
//!         └────────────────────────┘
//!          └──────────────────────┘       cards underneath peek out below
//!           └────────────────────┘
//! ```
//!
//! Only the top card moves. The others are drawn without text.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::jokes::JokeEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally by a card.
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders.
const VERTICAL_OVERHEAD: u16 = 2;
const MAX_CARD_WIDTH: u16 = 60;
const MIN_CARD_HEIGHT: u16 = 5;

// ============================================================================
// Gesture handling
// ============================================================================

/// High-level gesture events emitted by the card stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    Started,
    /// Absolute offset from where the drag began, in drag units.
    Moved(i32),
    Released,
    Cancelled,
}

/// Gesture tracking for the card area.
///
/// Mouse drags measure columns from the press position; arrow keys add a
/// fixed step. Both produce offsets in drag units.
pub struct CardStackState {
    /// Where the cards were last drawn (for mouse hit testing).
    pub area: Rect,
    pub units_per_column: i32,
    pub key_step: i32,
    /// Column of the mouse press, while a mouse drag is active.
    anchor: Option<u16>,
    dragging: bool,
    offset: i32,
}

impl CardStackState {
    pub fn new(units_per_column: i32, key_step: i32) -> Self {
        Self {
            area: Rect::default(),
            units_per_column: units_per_column.max(1),
            key_step,
            anchor: None,
            dragging: false,
            offset: 0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.area.x
            && col < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }

    fn nudge(&mut self, delta: i32) -> GestureEvent {
        self.dragging = true;
        self.offset = self.offset.saturating_add(delta);
        GestureEvent::Moved(self.offset)
    }

    /// Drops any gesture in progress.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.dragging = false;
        self.offset = 0;
    }
}

impl EventHandler for CardStackState {
    type Event = GestureEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GestureEvent> {
        match *event {
            TuiEvent::MouseDown(col, row) if self.contains(col, row) => {
                self.reset();
                self.anchor = Some(col);
                self.dragging = true;
                Some(GestureEvent::Started)
            }
            TuiEvent::MouseDrag(col, _) => {
                let anchor = self.anchor?;
                self.offset = (i32::from(col) - i32::from(anchor)) * self.units_per_column;
                Some(GestureEvent::Moved(self.offset))
            }
            TuiEvent::MouseUp(..) if self.anchor.is_some() => {
                self.reset();
                Some(GestureEvent::Released)
            }
            // A mouse drag owns the gesture until the button comes up
            TuiEvent::NudgeLeft if self.anchor.is_none() => Some(self.nudge(-self.key_step)),
            TuiEvent::NudgeRight if self.anchor.is_none() => Some(self.nudge(self.key_step)),
            TuiEvent::Release if self.dragging && self.anchor.is_none() => {
                self.reset();
                Some(GestureEvent::Released)
            }
            TuiEvent::Cancel if self.dragging => {
                self.reset();
                Some(GestureEvent::Cancelled)
            }
            _ => None,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Props for one render pass.
pub struct CardStack<'a> {
    /// Visible cards, oldest first; the last one is on top.
    pub cards: &'a [JokeEntry],
    /// Horizontal shift of the top card in columns.
    pub offset_columns: i32,
    /// The top card is past the dismiss threshold.
    pub would_dismiss: bool,
    pub fetching: bool,
}

impl<'a> CardStack<'a> {
    pub fn new(
        cards: &'a [JokeEntry],
        offset_columns: i32,
        would_dismiss: bool,
        fetching: bool,
    ) -> Self {
        Self {
            cards,
            offset_columns,
            would_dismiss,
            fetching,
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let text = if self.fetching {
            "Fetching a joke..."
        } else {
            "No cards left"
        };
        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y, area.width, 1).intersection(area);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, line_area);
    }
}

/// Height a card needs to show `content` at `card_width`, borders included.
pub fn card_height(content: &str, card_width: u16) -> u16 {
    let inner = card_width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
    let lines: usize = content
        .lines()
        .map(|line| textwrap::wrap(line, inner).len().max(1))
        .sum();
    u16::try_from(lines.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(VERTICAL_OVERHEAD)
        .max(MIN_CARD_HEIGHT)
}

/// Shifts `base` horizontally by `shift` columns, clipped to `bounds`.
/// Returns `None` if nothing of the card is left on screen.
fn shifted(base: Rect, shift: i32, bounds: Rect) -> Option<Rect> {
    let left = (i32::from(base.x) + shift).max(i32::from(bounds.x));
    let right = (i32::from(base.x) + i32::from(base.width) + shift).min(i32::from(bounds.right()));
    if right <= left {
        return None;
    }
    Some(Rect::new(left as u16, base.y, (right - left) as u16, base.height).intersection(bounds))
}

impl Component for CardStack<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some((top, underneath)) = self.cards.split_last() else {
            self.render_empty(frame, area);
            return;
        };

        let depth = underneath.len() as u16;
        let width = area.width.min(MAX_CARD_WIDTH);
        let height = card_height(top.content(), width)
            .min(area.height.saturating_sub(depth))
            .max(1);
        let base = Rect::new(area.x + (area.width - width) / 2, area.y, width, height);

        // Deepest card first so nearer ones paint over it
        for level in (1..=depth).rev() {
            let inset = level.min(width / 2);
            let rect = Rect::new(
                base.x + inset,
                base.y + level,
                width.saturating_sub(inset * 2),
                height,
            )
            .intersection(area);
            let block = Block::bordered().border_style(
                Style::default().fg(Color::Blue).add_modifier(Modifier::DIM),
            );
            frame.render_widget(Clear, rect);
            frame.render_widget(block, rect);
        }

        let Some(rect) = shifted(base, self.offset_columns, area) else {
            return;
        };

        let (border, title) = if self.would_dismiss {
            (Style::default().fg(Color::Red).add_modifier(Modifier::BOLD), " release to dismiss ")
        } else {
            (Style::default().fg(Color::White), " Joke ")
        };
        let card = Paragraph::new(top.content())
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(border)
                    .padding(Padding::horizontal(1)),
            )
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(Clear, rect);
        frame.render_widget(card, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state_with_area() -> CardStackState {
        let mut state = CardStackState::new(10, 25);
        state.area = Rect::new(0, 2, 40, 10);
        state
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_mouse_drag_measures_columns_from_press() {
        let mut state = state_with_area();
        assert_eq!(state.handle_event(&TuiEvent::MouseDown(20, 5)), Some(GestureEvent::Started));
        assert_eq!(state.handle_event(&TuiEvent::MouseDrag(5, 9)), Some(GestureEvent::Moved(-150)));
        assert_eq!(state.handle_event(&TuiEvent::MouseDrag(31, 5)), Some(GestureEvent::Moved(110)));
        assert_eq!(state.handle_event(&TuiEvent::MouseUp(31, 5)), Some(GestureEvent::Released));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_press_outside_cards_is_ignored() {
        let mut state = state_with_area();
        assert_eq!(state.handle_event(&TuiEvent::MouseDown(20, 0)), None);
        assert_eq!(state.handle_event(&TuiEvent::MouseDrag(0, 0)), None);
        assert_eq!(state.handle_event(&TuiEvent::MouseUp(0, 0)), None);
    }

    #[test]
    fn test_arrow_keys_accumulate_offset() {
        let mut state = state_with_area();
        assert_eq!(state.handle_event(&TuiEvent::NudgeLeft), Some(GestureEvent::Moved(-25)));
        assert_eq!(state.handle_event(&TuiEvent::NudgeLeft), Some(GestureEvent::Moved(-50)));
        assert_eq!(state.handle_event(&TuiEvent::NudgeRight), Some(GestureEvent::Moved(-25)));
        assert_eq!(state.handle_event(&TuiEvent::Release), Some(GestureEvent::Released));
        // Offset starts over after a release
        assert_eq!(state.handle_event(&TuiEvent::NudgeRight), Some(GestureEvent::Moved(25)));
    }

    #[test]
    fn test_release_and_cancel_need_a_drag() {
        let mut state = state_with_area();
        assert_eq!(state.handle_event(&TuiEvent::Release), None);
        assert_eq!(state.handle_event(&TuiEvent::Cancel), None);

        state.handle_event(&TuiEvent::NudgeRight);
        assert_eq!(state.handle_event(&TuiEvent::Cancel), Some(GestureEvent::Cancelled));
        assert_eq!(state.handle_event(&TuiEvent::Release), None);
    }

    #[test]
    fn test_keys_ignored_during_mouse_drag() {
        let mut state = state_with_area();
        state.handle_event(&TuiEvent::MouseDown(10, 3));
        assert_eq!(state.handle_event(&TuiEvent::NudgeLeft), None);
        assert_eq!(state.handle_event(&TuiEvent::Release), None);
        assert_eq!(state.handle_event(&TuiEvent::Cancel), Some(GestureEvent::Cancelled));
    }

    #[test]
    fn test_card_height_counts_wrapped_lines_and_newlines() {
        assert_eq!(card_height("short", 40), MIN_CARD_HEIGHT);
        let joke = "line one\nline two\nline three\nline four";
        assert_eq!(card_height(joke, 40), 4 + VERTICAL_OVERHEAD);
        // 10 columns of text per line at width 14
        let long = "aaaa bbbb cccc dddd eeee ffff";
        assert_eq!(card_height(long, 14), 3 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_card_height_saturates_on_huge_bodies() {
        let body = "x\n".repeat(70_000);
        assert_eq!(card_height(&body, 40), u16::MAX);
    }

    #[test]
    fn test_reset_drops_keyboard_offset() {
        let mut state = state_with_area();
        state.handle_event(&TuiEvent::NudgeLeft);
        state.handle_event(&TuiEvent::NudgeLeft);
        state.reset();
        assert!(!state.is_dragging());
        assert_eq!(state.handle_event(&TuiEvent::NudgeLeft), Some(GestureEvent::Moved(-25)));
    }

    #[test]
    fn test_shifted_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 40, 10);
        let base = Rect::new(10, 0, 20, 5);
        assert_eq!(shifted(base, 0, bounds), Some(base));
        assert_eq!(shifted(base, -15, bounds), Some(Rect::new(0, 0, 15, 5)));
        assert_eq!(shifted(base, 15, bounds), Some(Rect::new(25, 0, 15, 5)));
        assert_eq!(shifted(base, -40, bounds), None);
    }

    #[test]
    fn test_render_top_card_text() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let cards = vec![JokeEntry::new("older joke"), JokeEntry::new("newest joke")];

        terminal
            .draw(|f| CardStack::new(&cards, 0, false, false).render(f, f.area()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("newest joke"));
        assert!(!text.contains("older joke"));
        assert!(text.contains("Joke"));
    }

    #[test]
    fn test_render_dismiss_hint() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let cards = vec![JokeEntry::new("bye")];

        terminal
            .draw(|f| CardStack::new(&cards, -12, true, false).render(f, f.area()))
            .unwrap();

        assert!(screen_text(&terminal).contains("release to dismiss"));
    }

    #[test]
    fn test_render_empty_deck_while_fetching() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| CardStack::new(&[], 0, false, true).render(f, f.area()))
            .unwrap();

        assert!(screen_text(&terminal).contains("Fetching a joke..."));
    }
}

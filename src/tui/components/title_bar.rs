//! # TitleBar Component
//!
//! Top line: app name, then the status message. While a fetch is in flight
//! a spinner sits in front of the status.
//!
//! Stateless: everything comes in as props.
//!
//! ```text
//! Fast Jokes | ⠹ Fetching Pun joke (en)...
//! Fast Jokes | Ready
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub status_message: String,
    /// Animation frame; `None` hides the spinner.
    pub spinner_frame: Option<usize>,
}

impl TitleBar {
    pub fn new(status_message: String, spinner_frame: Option<usize>) -> Self {
        Self {
            status_message,
            spinner_frame,
        }
    }

    fn line(&self) -> Line<'_> {
        let mut spans = vec![
            Span::styled("Fast ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("Jokes", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
        ];
        if let Some(frame) = self.spinner_frame {
            spans.push(Span::styled(
                format!("{} ", SPINNER[frame % SPINNER.len()]),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::raw(self.status_message.as_str()));
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

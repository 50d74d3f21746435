//! # FilterBar Component
//!
//! Shows the category and language the next fetch will use, with the keys
//! that change them. Stateless; the filters live in `App`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::jokes::{Category, Language};
use crate::tui::component::Component;

pub struct FilterBar {
    pub category: Category,
    pub language: Language,
}

impl FilterBar {
    pub fn new(category: Category, language: Language) -> Self {
        Self { category, language }
    }
}

impl Component for FilterBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::raw("Category "),
            Span::styled(format!("‹ {} ›", self.category.label()), value),
            Span::styled(" [c]", key),
            Span::raw("   Language "),
            Span::styled(format!("‹ {} ›", self.language.label()), value),
            Span::styled(" [l]", key),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_both_filters() {
        let backend = TestBackend::new(70, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = FilterBar::new(Category::Spooky, Language::De);

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Spooky"));
        assert!(text.contains("Deutsch"));
    }
}

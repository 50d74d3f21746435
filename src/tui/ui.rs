use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardStack, FilterBar, TitleBar};

const HELP_TEXT: &str =
    "←/→ or drag: swipe · Enter: release · Esc: cancel · c/C: category · l/L: language · q: quit";

/// Splits the screen into title, filters, cards and help line.
fn screen_areas(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(area)
}

/// Where the card pile goes inside its row: one blank line above, one column
/// of margin each side.
fn card_area(main: Rect) -> Rect {
    Rect::new(
        main.x.saturating_add(1),
        main.y.saturating_add(1),
        main.width.saturating_sub(2),
        main.height.saturating_sub(1),
    )
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, filter_area, main_area, help_area] = screen_areas(frame.area());

    let spinner = app.is_fetching().then_some(spinner_frame);
    TitleBar::new(app.status_message.clone(), spinner).render(frame, title_area);
    FilterBar::new(app.category, app.language).render(frame, filter_area);

    let cards_area = card_area(main_area);
    tui.cards.area = cards_area;
    let offset_columns = app.swipe.offset() / tui.cards.units_per_column;
    CardStack::new(
        app.deck.visible(),
        offset_columns,
        app.swipe.would_dismiss(),
        app.is_fetching(),
    )
    .render(frame, cards_area);

    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

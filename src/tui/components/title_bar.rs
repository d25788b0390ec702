// Title bar component
//
// One line: app name, version, slide count and theme.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Banner Carousel v{} ── {} slide(s) ── {}",
        VERSION,
        app.carousel.slide_count(),
        app.theme.name
    );

    f.render_widget(
        Paragraph::new(title).style(
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

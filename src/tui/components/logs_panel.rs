//! Logs panel component
//!
//! Shows the most recent log entries, newest at the bottom, color-coded by level.

use crate::logging::LogEntry;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn format_log_entry(entry: &LogEntry) -> String {
    let module = entry
        .target
        .strip_prefix("banner_carousel::")
        .unwrap_or(&entry.target);
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        module,
        entry.message
    )
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let theme = &app.theme;

    let items: Vec<ListItem> = app
        .log_buffer
        .recent(height)
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(theme.log_style(entry.level)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Logs ({}) ", app.log_buffer.len())),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::Utc;

    #[test]
    fn entry_shows_module_without_crate_prefix() {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Debug,
            target: "banner_carousel::carousel::scheduler".to_string(),
            message: "rotation state changed".to_string(),
        };
        let line = format_log_entry(&entry);
        assert!(line.contains("DEBUG carousel::scheduler: rotation state changed"));
    }
}

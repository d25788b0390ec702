// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "Classic" uses the terminal's ANSI palette, the others use true color (RGB).

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Carousel
    pub slide_fg: Color,
    pub slide_border: Color,
    pub slide_title: Color,
    pub clone_marker: Color,
    pub arrow: Color,
    pub arrow_disabled: Color,
    pub dot: Color,
    pub dot_selected: Color,

    // Rotation state colors
    pub state_running: Color,
    pub state_paused: Color,
    pub state_stopped: Color,

    // UI element colors
    pub status_bar: Color,
    pub border: Color,
    pub highlight: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Theme names accepted in config
    pub const NAMES: [&'static str; 3] = ["Classic", "Midnight", "Paper"];

    /// Load theme by name (case-insensitive, unknown names fall back to Classic)
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "midnight" => Self::midnight(),
            "paper" => Self::paper(),
            _ => Self::classic(),
        }
    }

    /// Classic theme - uses terminal's ANSI palette
    pub fn classic() -> Self {
        Self {
            name: "Classic".to_string(),
            slide_fg: Color::White,
            slide_border: Color::Cyan,
            slide_title: Color::Yellow,
            clone_marker: Color::DarkGray,
            arrow: Color::White,
            arrow_disabled: Color::DarkGray,
            dot: Color::Gray,
            dot_selected: Color::Yellow,
            state_running: Color::Green,
            state_paused: Color::Yellow,
            state_stopped: Color::Red,
            status_bar: Color::Green,
            border: Color::White,
            highlight: Color::Yellow,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::Blue,
            log_trace: Color::DarkGray,
        }
    }

    /// Midnight theme - deep blues with warm accents
    pub fn midnight() -> Self {
        Self {
            name: "Midnight".to_string(),
            slide_fg: Color::Rgb(0xd8, 0xde, 0xe9),
            slide_border: Color::Rgb(0x81, 0xa1, 0xc1), // frost
            slide_title: Color::Rgb(0xeb, 0xcb, 0x8b),  // amber
            clone_marker: Color::Rgb(0x4c, 0x56, 0x6a),
            arrow: Color::Rgb(0x88, 0xc0, 0xd0),
            arrow_disabled: Color::Rgb(0x4c, 0x56, 0x6a),
            dot: Color::Rgb(0x61, 0x6e, 0x88),
            dot_selected: Color::Rgb(0xeb, 0xcb, 0x8b),
            state_running: Color::Rgb(0xa3, 0xbe, 0x8c),
            state_paused: Color::Rgb(0xd0, 0x87, 0x70),
            state_stopped: Color::Rgb(0xbf, 0x61, 0x6a),
            status_bar: Color::Rgb(0x81, 0xa1, 0xc1),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
            log_error: Color::Rgb(0xbf, 0x61, 0x6a),
            log_warn: Color::Rgb(0xeb, 0xcb, 0x8b),
            log_info: Color::Rgb(0xa3, 0xbe, 0x8c),
            log_debug: Color::Rgb(0x81, 0xa1, 0xc1),
            log_trace: Color::Rgb(0x4c, 0x56, 0x6a),
        }
    }

    /// Paper theme - dark ink for light terminals
    pub fn paper() -> Self {
        Self {
            name: "Paper".to_string(),
            slide_fg: Color::Rgb(0x2e, 0x34, 0x40),
            slide_border: Color::Rgb(0x26, 0x8b, 0xd2), // blue
            slide_title: Color::Rgb(0xb5, 0x89, 0x00),  // ochre
            clone_marker: Color::Rgb(0x93, 0xa1, 0xa1),
            arrow: Color::Rgb(0x07, 0x36, 0x42),
            arrow_disabled: Color::Rgb(0x93, 0xa1, 0xa1),
            dot: Color::Rgb(0x93, 0xa1, 0xa1),
            dot_selected: Color::Rgb(0xcb, 0x4b, 0x16),
            state_running: Color::Rgb(0x85, 0x99, 0x00),
            state_paused: Color::Rgb(0xb5, 0x89, 0x00),
            state_stopped: Color::Rgb(0xdc, 0x32, 0x2f),
            status_bar: Color::Rgb(0x26, 0x8b, 0xd2),
            border: Color::Rgb(0x58, 0x6e, 0x75),
            highlight: Color::Rgb(0xcb, 0x4b, 0x16),
            log_error: Color::Rgb(0xdc, 0x32, 0x2f),
            log_warn: Color::Rgb(0xb5, 0x89, 0x00),
            log_info: Color::Rgb(0x85, 0x99, 0x00),
            log_debug: Color::Rgb(0x26, 0x8b, 0xd2),
            log_trace: Color::Rgb(0x93, 0xa1, 0xa1),
        }
    }

    /// Style for a log level
    pub fn log_style(&self, level: LogLevel) -> Style {
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        };
        let style = Style::default().fg(color);
        if level == LogLevel::Error {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("midnight").name, "Midnight");
        assert_eq!(Theme::by_name("PAPER").name, "Paper");
    }

    #[test]
    fn unknown_theme_falls_back_to_classic() {
        assert_eq!(Theme::by_name("neon").name, "Classic");
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in Theme::NAMES {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }
}

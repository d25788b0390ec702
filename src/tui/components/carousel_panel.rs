//! Carousel panel component
//!
//! Draws the render model into the terminal: a bordered region holding the
//! previous/next arrows, the slide strip and a row of dots. The strip is laid
//! out as one viewport-wide cell per slide and shifted by the animated
//! offset, so a transition slides the neighbouring banner into view.

use crate::carousel::view::{CarouselView, SlideView};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, app: &App) {
    let layout = &app.layout;
    let theme = &app.theme;
    let view = app.carousel.view();

    let live = match view.region.live {
        crate::carousel::view::Live::Off => "live: off",
        crate::carousel::view::Live::Polite => "live: polite",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.slide_border))
        .title(Span::styled(
            format!(" {} ", view.region.label),
            Style::default()
                .fg(theme.slide_title)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(format!(" {} ", live)).right_aligned());
    f.render_widget(block, layout.carousel);

    render_arrow(f, layout.prev, "‹", view.prev.enabled, theme);
    render_arrow(f, layout.next, "›", view.next.enabled, theme);

    if let Some(text) = view.placeholder {
        let vp = layout.viewport;
        let lines = vertically_centered(vec![Line::from(text)], vp.height);
        f.render_widget(
            Paragraph::new(lines)
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().fg(theme.arrow_disabled)),
            vp,
        );
        return;
    }

    render_strip(f, layout.viewport, &view, app.strip_offset(), theme);
    render_dots(f, app, &view);
}

fn render_arrow(f: &mut Frame, area: Rect, glyph: &str, enabled: bool, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let color = if enabled { theme.arrow } else { theme.arrow_disabled };
    let lines = vertically_centered(vec![Line::from(glyph)], area.height);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        area,
    );
}

/// Column span `[left, left + width)` of a strip cell, relative to the viewport
pub fn cell_left(cell_offset_percent: i64, strip_offset_percent: f64, width: u16) -> i32 {
    let percent = cell_offset_percent as f64 + strip_offset_percent;
    (percent / 100.0 * width as f64).round() as i32
}

/// Visible part of a cell: (x within viewport, columns skipped, visible width)
pub fn clip(left: i32, width: u16) -> Option<(u16, u16, u16)> {
    let w = width as i32;
    let start = left.max(0);
    let end = (left + w).min(w);
    if start >= end {
        return None;
    }
    Some((start as u16, (start - left) as u16, (end - start) as u16))
}

fn render_strip(f: &mut Frame, vp: Rect, view: &CarouselView, offset: f64, theme: &Theme) {
    if vp.width == 0 || vp.height == 0 {
        return;
    }
    for slide in &view.slides {
        let left = cell_left(slide.offset_percent, offset, vp.width);
        let Some((x, skip, width)) = clip(left, vp.width) else {
            continue;
        };
        let lines = slide_lines(slide, vp.width, vp.height, theme);
        let area = Rect {
            x: vp.x + x,
            y: vp.y,
            width,
            height: vp.height,
        };
        f.render_widget(Paragraph::new(lines).scroll((0, skip)), area);
    }
}

/// Lines for one slide, each padded to `width` so horizontal scroll clips cleanly
fn slide_lines(slide: &SlideView, width: u16, height: u16, theme: &Theme) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(theme.slide_title)
        .add_modifier(Modifier::BOLD);
    let body_style = Style::default().fg(theme.slide_fg);
    let dim_style = Style::default().fg(theme.clone_marker);

    let mut content = vec![
        centered(&slide.alt_text, width, title_style),
        Line::default(),
        centered(&format!("🖼  {}", slide.image.as_str()), width, body_style),
        Line::default(),
        centered(&slide.label, width, dim_style),
    ];
    if slide.is_clone {
        content.push(centered("(loop)", width, dim_style));
    }
    vertically_centered(content, height)
}

fn centered(text: &str, width: u16, style: Style) -> Line<'static> {
    let text = truncate(text, width as usize);
    let pad = (width as usize).saturating_sub(text.width()) / 2;
    Line::from(Span::styled(format!("{}{}", " ".repeat(pad), text), style))
}

/// Truncate to a display width, adding an ellipsis when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}

fn vertically_centered<'a>(lines: Vec<Line<'a>>, height: u16) -> Vec<Line<'a>> {
    let top = (height as usize).saturating_sub(lines.len()) / 2;
    let mut out = vec![Line::default(); top];
    out.extend(lines);
    out
}

fn render_dots(f: &mut Frame, app: &App, view: &CarouselView) {
    let theme = &app.theme;
    for (dot, area) in view.dots.iter().zip(app.layout.dots.iter()) {
        let (glyph, color) = if dot.selected {
            ("●", theme.dot_selected)
        } else {
            ("○", theme.dot)
        };
        f.render_widget(
            Paragraph::new(glyph).style(Style::default().fg(color)),
            *area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_positions_follow_offset() {
        // Resting on slide 1 of a 40-column viewport
        assert_eq!(cell_left(0, -100.0, 40), -40);
        assert_eq!(cell_left(100, -100.0, 40), 0);
        assert_eq!(cell_left(200, -100.0, 40), 40);
        // Halfway through the transition to slide 2
        assert_eq!(cell_left(100, -150.0, 40), -20);
    }

    #[test]
    fn clipping() {
        assert_eq!(clip(0, 40), Some((0, 0, 40)));
        assert_eq!(clip(-20, 40), Some((0, 20, 20)));
        assert_eq!(clip(20, 40), Some((20, 0, 20)));
        assert_eq!(clip(40, 40), None);
        assert_eq!(clip(-40, 40), None);
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Full-stack bootcamp", 8), "Full-st…");
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn centering_keeps_borrowed_lines() {
        let glyph = String::from("›");
        let lines = vertically_centered(vec![Line::from(glyph.as_str())], 5);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].to_string(), "›");
        assert!(lines[0].spans.is_empty());
    }
}

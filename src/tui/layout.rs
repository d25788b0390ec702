//! Screen layout and mouse hit-testing.
//!
//! Single source of truth for where things are drawn: the renderer draws
//! into these rects and the mouse handler tests against the same rects.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Responsive breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: narrow arrows, no log panel
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols: full status text
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// What a mouse position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Prev,
    Next,
    Dot(usize),
    /// The slide viewport (drag to swipe)
    Viewport,
    /// Inside the carousel frame but not on a control
    Frame,
}

/// Rects for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    /// Whole carousel, border included; hover is tracked against this
    pub carousel: Rect,
    pub prev: Rect,
    pub viewport: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
    pub status: Rect,
    pub logs: Option<Rect>,
}

/// Rows reserved for the log panel when shown
const LOG_ROWS: u16 = 8;

/// Columns per dot ("● ")
const DOT_WIDTH: u16 = 2;

fn contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x.saturating_add(r.width) && row >= r.y && row < r.y.saturating_add(r.height)
}

impl ScreenLayout {
    pub fn compute(area: Rect, slide_count: usize, show_logs: bool) -> Self {
        let bp = Breakpoint::from_width(area.width);
        let logs_fit = show_logs && bp.at_least(Breakpoint::Normal) && area.height >= 24;

        let mut constraints = vec![
            Constraint::Length(1), // title
            Constraint::Min(7),    // carousel
            Constraint::Length(2), // status (top border + text)
        ];
        if logs_fit {
            constraints.push(Constraint::Length(LOG_ROWS));
        }
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let carousel = rows[1];
        // Inside the border: slide rows, then one row of dots
        let inner = Rect {
            x: carousel.x.saturating_add(1),
            y: carousel.y.saturating_add(1),
            width: carousel.width.saturating_sub(2),
            height: carousel.height.saturating_sub(2),
        };
        let slide_rows = inner.height.saturating_sub(1);

        let arrow_width = if bp.at_least(Breakpoint::Normal) { 3 } else { 1 };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(arrow_width),
                Constraint::Min(1),
                Constraint::Length(arrow_width),
            ])
            .split(Rect {
                height: slide_rows,
                ..inner
            });

        let dots_row = inner.y + slide_rows;
        // Only as many dots as fit on one row
        let dot_count = slide_count.min((inner.width / DOT_WIDTH) as usize) as u16;
        let dots_width = dot_count * DOT_WIDTH;
        let dots_x = inner.x + (inner.width - dots_width) / 2;
        let dots = (0..dot_count)
            .map(|i| Rect {
                x: dots_x + i * DOT_WIDTH,
                y: dots_row,
                width: DOT_WIDTH,
                height: 1,
            })
            .collect();

        Self {
            title: rows[0],
            carousel,
            prev: columns[0],
            viewport: columns[1],
            next: columns[2],
            dots,
            status: rows[2],
            logs: logs_fit.then(|| rows[3]),
        }
    }

    /// Whether the pointer is over the carousel
    pub fn is_over_carousel(&self, col: u16, row: u16) -> bool {
        contains(self.carousel, col, row)
    }

    pub fn hit_test(&self, col: u16, row: u16) -> Option<HitTarget> {
        if !self.is_over_carousel(col, row) {
            return None;
        }
        if contains(self.prev, col, row) {
            return Some(HitTarget::Prev);
        }
        if contains(self.next, col, row) {
            return Some(HitTarget::Next);
        }
        if let Some(i) = self.dots.iter().position(|r| contains(*r, col, row)) {
            return Some(HitTarget::Dot(i));
        }
        if contains(self.viewport, col, row) {
            return Some(HitTarget::Viewport);
        }
        Some(HitTarget::Frame)
    }
}

// Status bar component
//
// Renders rotation status at the bottom: uptime, state, slide, next timer, key help.

use crate::carousel::{RotationState, TimerKind};
use crate::tui::app::App;
use crate::tui::components::carousel_panel::truncate;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Human-readable countdown for the armed timer
pub fn format_due(kind: TimerKind, due_in_ms: u64) -> String {
    let secs = due_in_ms as f64 / 1000.0;
    match kind {
        TimerKind::Periodic => format!("next in {:.1}s", secs),
        TimerKind::Resume => format!("resume in {:.1}s", secs),
    }
}

fn state_icon(state: RotationState) -> &'static str {
    match state {
        RotationState::Running => "▶",
        RotationState::PausedHover | RotationState::PausedCooldown => "⏸",
        RotationState::Stopped => "■",
    }
}

/// Render the status bar
///
/// Adapts to terminal width: key help only on wide terminals.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.carousel.snapshot();
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let state_color = match snapshot.state {
        RotationState::Running => theme.state_running,
        RotationState::PausedHover | RotationState::PausedCooldown => theme.state_paused,
        RotationState::Stopped => theme.state_stopped,
    };

    let timer = match (snapshot.armed, snapshot.due_in_ms) {
        (Some(kind), Some(due)) => format_due(kind, due),
        _ if app.carousel.reduced_motion() => "reduced motion".to_string(),
        _ => "no timer".to_string(),
    };

    let view = app.carousel.view();
    let slide = match view.current_slide() {
        Some(current) if bp.at_least(Breakpoint::Normal) => format!(
            "slide {}/{} {}",
            snapshot.index + 1,
            snapshot.slide_count,
            truncate(&current.alt_text, 24)
        ),
        Some(_) => format!("slide {}/{}", snapshot.index + 1, snapshot.slide_count),
        None => "no slides".to_string(),
    };

    let mut spans = vec![
        Span::raw(format!(" {} │ ", app.uptime())),
        Span::styled(
            format!("{} {}", state_icon(snapshot.state), snapshot.state.as_str()),
            Style::default().fg(state_color),
        ),
        Span::raw(format!(" │ {} │ {}", slide, timer)),
    ];
    if snapshot.hovered {
        spans.push(Span::raw(" │ hover"));
    }
    if let Some(at) = app.carousel.last_interaction() {
        let secs = app.carousel.now().saturating_duration_since(at).as_secs();
        spans.push(Span::raw(format!(" │ input {}s ago", secs)));
    }
    if bp.at_least(Breakpoint::Wide) {
        spans.push(Span::raw(" │ ←/→ h/l 1-9 click drag │ L logs │ q quit"));
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

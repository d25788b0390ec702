// TUI module - Terminal User Interface
//
// This module hosts the carousel in the terminal using ratatui. It handles:
// - Terminal initialization and cleanup
// - The event loop (keyboard and mouse input, redraw ticks, timer deadlines)
// - Rendering

pub mod animation;
pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod ui;

use crate::carousel::Carousel;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Redraw period while a transition is running
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Redraw period at rest (keeps the countdown in the status bar fresh)
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Run the TUI until the user quits
///
/// Returns the carousel so the caller decides when to unmount it.
pub async fn run_tui(carousel: Carousel, log_buffer: LogBuffer, config: &Config) -> Result<Carousel> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(carousel, log_buffer, config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal even if the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result.map(|()| app.carousel)
}

/// When the loop must wake up next: the next frame or the carousel's deadline
fn next_wake(app: &App, now: Instant) -> Instant {
    let frame = now + if app.is_animating() { FRAME_INTERVAL } else { IDLE_INTERVAL };
    match app.carousel.next_deadline() {
        Some(deadline) if deadline < frame => deadline,
        _ => frame,
    }
}

/// Main event loop
///
/// tokio::select! waits on terminal input and on the next wake-up instant,
/// whichever comes first. Timers are not callbacks: the loop sleeps until
/// the carousel's deadline and then polls it.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();

        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;
        app.frame_presented();

        if app.should_quit {
            break;
        }

        let wake = tokio::time::Instant::from_std(next_wake(app, Instant::now()));

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => app.handle_key(key_event),
                        Ok(Event::Mouse(mouse_event)) => app.handle_mouse(mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Next frame or timer deadline
            _ = tokio::time::sleep_until(wake) => {}
        }
    }

    Ok(())
}

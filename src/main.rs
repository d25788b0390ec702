// Banner Carousel - auto-rotating, interaction-aware promotional banners
//
// Architecture:
// - Carousel core: slide deck, loop indexing, rotation state machine, timers as deadlines
// - Config: env > file > defaults, TOML template as single source of truth
// - TUI (ratatui): hosts the carousel, maps mouse/keys onto carousel handlers
// - Headless mode: same carousel driven by a tokio timer loop, logging each change
// - Simulate: scripted sessions on a simulated clock

mod carousel;
mod cli;
mod config;
mod logging;
mod simulate;
mod startup;
mod theme;
mod tui;

use anyhow::{Context, Result};
use carousel::{Carousel, SlideDeck, SystemClock};
use config::{Config, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with conditional output
///
/// In TUI mode logs go to the in-memory buffer (stdout would garble the
/// display); in headless mode they go to stdout. File logging is added on
/// top when enabled. The returned guard must live until exit so the
/// background writer flushes.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(
    logging: &LoggingConfig,
    enable_tui: bool,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("banner_carousel={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = enable_tui.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stdout_layer = (!enable_tui).then(|| tracing_subscriber::fmt::layer());

    let file_writer = if logging.file_enabled {
        match logging.file_appender() {
            Ok(appender) => Some(tracing_appender::non_blocking(appender)),
            Err(e) => {
                eprintln!(
                    "Warning: File logging disabled, could not open {:?}: {}",
                    logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    let (file_layer, guard) = match file_writer {
        // File layer uses JSON format for structured log parsing
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}

/// Headless host: sleep until each deadline, poll, log what changed
async fn run_headless(carousel: &mut Carousel) -> Result<()> {
    tracing::info!("TUI disabled, running headless (Ctrl+C to stop)");

    loop {
        let deadline = carousel.next_deadline();

        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.context("Failed to listen for Ctrl+C")?;
                return Ok(());
            }
            _ = async {
                match deadline {
                    Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                if carousel.poll() {
                    let snapshot = carousel.snapshot();
                    let alt = carousel.current_slide().map(|s| s.alt_text.as_str()).unwrap_or("");
                    tracing::info!(
                        index = snapshot.index,
                        state = snapshot.state.as_str(),
                        "Showing slide {} of {}: {}",
                        snapshot.index + 1,
                        snapshot.slide_count,
                        alt
                    );
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config, simulate); exit if one ran
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    let log_buffer = LogBuffer::with_capacity(config.logging.panel_capacity);
    let _file_guard = init_tracing(&config.logging, config.enable_tui, &log_buffer);

    let deck = SlideDeck::new(config.slides.clone()).context("Invalid slide list in config")?;
    let motion = config.carousel.reduced_motion.provider();
    let mut carousel = Carousel::mount(
        deck,
        config.carousel.options(),
        Box::new(SystemClock),
        Some(motion.as_ref()),
    )
    .context("Failed to mount carousel")?;

    // Print startup banner before the TUI takes the screen
    startup::print_startup(&config, &carousel);
    startup::log_startup(&config, &carousel);

    if config.enable_tui {
        tracing::info!("Starting TUI");
        match tui::run_tui(carousel, log_buffer, &config).await {
            Ok(mut returned) => returned.unmount(),
            Err(e) => tracing::error!("TUI error: {:?}", e),
        }
    } else {
        run_headless(&mut carousel).await?;
        carousel.unmount();
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

//! Configuration for the banner carousel
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/banner-carousel/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::carousel::Slide;
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod carousel;
mod observability;
mod serialization;
mod slides;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use carousel::{CarouselSettings, FileCarousel, ReducedMotion};
pub use observability::{FileLogging, LoggingConfig};
pub use slides::{default_slides, FileSlide};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under ~/.config
const APP_DIR: &str = "banner-carousel";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Classic", "Midnight", "Paper"
    pub theme: String,

    /// Whether to enable the TUI (can be disabled for headless mode)
    pub enable_tui: bool,

    /// Carousel timing and input settings
    pub carousel: CarouselSettings,

    /// Slides to rotate through, in order
    pub slides: Vec<Slide>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Classic".to_string(),
            enable_tui: true,
            carousel: CarouselSettings::default(),
            slides: default_slides(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [carousel] section
    pub carousel: Option<FileCarousel>,

    /// Optional [[slides]] tables
    pub slides: Option<Vec<FileSlide>>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/banner-carousel/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_DIR).join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be parsed.
    /// A broken config should fail fast with a clear error, not silently
    /// fall back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - [[slides]] entries without an id or image");
                    eprintln!("    - Durations written as strings instead of numbers\n");
                    eprintln!("  To reset, run: banner-carousel config --reset\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Load the config file alone, ignoring environment overrides
    pub fn from_file() -> Self {
        Self::resolve(Self::load_file_config(), |_| None)
    }

    /// Merge a parsed file with environment overrides
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("BANNER_THEME")
            .or(file.theme)
            .unwrap_or_else(|| "Classic".to_string());

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("BANNER_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let mut carousel = CarouselSettings::from_file(file.carousel);

        // Timing overrides: env > file
        if let Some(ms) = env("BANNER_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            if ms > 0 {
                carousel.interval_ms = ms;
            }
        }
        if let Some(ms) = env("BANNER_COOLDOWN_MS").and_then(|v| v.parse().ok()) {
            if ms > 0 {
                carousel.cooldown_ms = ms;
            }
        }
        if let Some(mode) = env("BANNER_REDUCED_MOTION").and_then(|v| ReducedMotion::from_str(&v)) {
            carousel.reduced_motion = mode;
        }

        let slides = slides::slides_from_file(file.slides);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            enable_tui,
            carousel,
            slides,
            logging,
        }
    }
}

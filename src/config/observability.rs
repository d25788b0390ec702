//! Logging configuration: filter level, log panel size, JSON file output

use crate::logging::MAX_LOG_ENTRIES;
use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Levels accepted for `logging.level`
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// When the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, appended forever
    Never,
}

impl LogRotation {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default filter level for this crate; RUST_LOG wins when set
    pub level: String,
    /// Entries kept for the TUI log panel
    pub panel_capacity: usize,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix ("banner-carousel" -> "banner-carousel.2026-10-19")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            panel_capacity: MAX_LOG_ENTRIES,
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "banner-carousel".to_string(),
        }
    }
}

/// `[logging]` as it appears in the file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub panel_capacity: Option<usize>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let level = match file.level {
            Some(level) if LEVELS.contains(&level.trim().to_lowercase().as_str()) => {
                level.trim().to_lowercase()
            }
            Some(level) => {
                eprintln!("Warning: unknown logging.level {:?}, using info", level);
                defaults.level
            }
            None => defaults.level,
        };

        let panel_capacity = match file.panel_capacity {
            Some(0) => {
                eprintln!("Warning: logging.panel_capacity must be positive, using default");
                defaults.panel_capacity
            }
            Some(n) => n,
            None => defaults.panel_capacity,
        };

        let file_rotation = match file.file_rotation {
            Some(s) => LogRotation::from_str(&s).unwrap_or_else(|| {
                eprintln!("Warning: unknown logging.file_rotation {:?}, using daily", s);
                defaults.file_rotation
            }),
            None => defaults.file_rotation,
        };

        Self {
            level,
            panel_capacity,
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_rotation,
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }

    /// Rolling appender for the JSON log file, creating the directory first
    pub fn file_appender(&self) -> anyhow::Result<RollingFileAppender> {
        std::fs::create_dir_all(&self.file_dir)?;
        let appender = RollingFileAppender::builder()
            .rotation(self.file_rotation.into())
            .filename_prefix(&self.file_prefix)
            .build(&self.file_dir)?;
        Ok(appender)
    }
}

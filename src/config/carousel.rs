//! Carousel timing and input configuration

use crate::carousel::{
    CarouselOptions, DesktopMotionPreference, FixedMotionPreference, LoopMode, MotionPreference,
    RotationPolicy, SWIPE_THRESHOLD_PX,
};
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Reduced Motion
// ─────────────────────────────────────────────────────────────────────────────

/// Where the reduced-motion preference comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReducedMotion {
    /// Ask the desktop (falls back to "no preference")
    #[default]
    Auto,
    /// Always reduce motion
    On,
    /// Never reduce motion
    Off,
}

impl ReducedMotion {
    /// Parse setting string from config or environment
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "on" | "true" | "1" | "yes" => Some(Self::On),
            "off" | "false" | "0" | "no" => Some(Self::Off),
            _ => None,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Capability provider for this setting
    pub fn provider(&self) -> Box<dyn MotionPreference> {
        match self {
            Self::Auto => Box::new(DesktopMotionPreference),
            Self::On => Box::new(FixedMotionPreference(true)),
            Self::Off => Box::new(FixedMotionPreference(false)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Carousel Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Carousel behavior settings
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    /// Auto-advance interval in milliseconds
    pub interval_ms: u64,
    /// Pause after a user interaction, in milliseconds
    pub cooldown_ms: u64,
    /// Horizontal distance a swipe must exceed, in pixels
    pub swipe_threshold_px: f64,
    /// Wrap-around strategy
    pub loop_mode: LoopMode,
    /// Reduced-motion source
    pub reduced_motion: ReducedMotion,
    /// Pixels per terminal column when converting mouse drags to swipes
    pub cell_width_px: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: 10_000,
            cooldown_ms: 30_000,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            loop_mode: LoopMode::Modular,
            reduced_motion: ReducedMotion::Auto,
            cell_width_px: 8.0,
        }
    }
}

/// Carousel settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileCarousel {
    pub interval_ms: Option<u64>,
    pub cooldown_ms: Option<u64>,
    pub swipe_threshold_px: Option<f64>,
    pub loop_mode: Option<String>,
    pub reduced_motion: Option<String>,
    pub cell_width_px: Option<f64>,
}

/// Keep a positive value, warn and fall back otherwise
fn positive_u64(name: &str, value: Option<u64>, default: u64) -> u64 {
    match value {
        Some(0) => {
            eprintln!("Warning: carousel.{} must be > 0, using {}", name, default);
            default
        }
        Some(v) => v,
        None => default,
    }
}

fn positive_f64(name: &str, value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            eprintln!("Warning: carousel.{} must be > 0 (got {}), using {}", name, v, default);
            default
        }
        None => default,
    }
}

impl CarouselSettings {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileCarousel>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let loop_mode = match file.loop_mode {
            Some(s) => LoopMode::from_str(&s).unwrap_or_else(|| {
                eprintln!("Warning: unknown carousel.loop_mode {:?}, using modular", s);
                defaults.loop_mode
            }),
            None => defaults.loop_mode,
        };

        let reduced_motion = match file.reduced_motion {
            Some(s) => ReducedMotion::from_str(&s).unwrap_or_else(|| {
                eprintln!("Warning: unknown carousel.reduced_motion {:?}, using auto", s);
                defaults.reduced_motion
            }),
            None => defaults.reduced_motion,
        };

        Self {
            interval_ms: positive_u64("interval_ms", file.interval_ms, defaults.interval_ms),
            cooldown_ms: positive_u64("cooldown_ms", file.cooldown_ms, defaults.cooldown_ms),
            swipe_threshold_px: positive_f64(
                "swipe_threshold_px",
                file.swipe_threshold_px,
                defaults.swipe_threshold_px,
            ),
            loop_mode,
            reduced_motion,
            cell_width_px: positive_f64("cell_width_px", file.cell_width_px, defaults.cell_width_px),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Construction options for `Carousel::mount`
    pub fn options(&self) -> CarouselOptions {
        CarouselOptions {
            policy: RotationPolicy {
                interval: self.interval(),
                cooldown: self.cooldown(),
            },
            swipe_threshold_px: self.swipe_threshold_px,
            loop_mode: self.loop_mode,
        }
    }
}

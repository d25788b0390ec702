//! Configuration tests
//!
//! Guard the TOML template against drifting from the loader: whatever
//! `to_toml()` writes must parse back into the same effective config.

use super::*;
use super::observability::LogRotation;
use crate::carousel::LoopMode;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    match toml::from_str(toml_str) {
        Ok(file) => file,
        Err(e) => panic!("TOML should parse.\nTOML:\n{}\nError: {}", toml_str, e),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let resolved = Config::resolve(parse(&config.to_toml()), no_env);

    assert_eq!(resolved.theme, config.theme);
    assert_eq!(resolved.carousel, config.carousel);
    assert_eq!(resolved.slides, config.slides);
    assert_eq!(resolved.logging, config.logging);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.theme = "Midnight".to_string();
    config.carousel.interval_ms = 4_000;
    config.carousel.cooldown_ms = 12_500;
    config.carousel.swipe_threshold_px = 72.5;
    config.carousel.loop_mode = LoopMode::ClonePadded;
    config.carousel.reduced_motion = ReducedMotion::On;
    config.slides = vec![Slide::new("intro", "intro \"hero\".png", "Intro, with quotes")];
    config.logging.file_rotation = LogRotation::Never;
    config.logging.level = "debug".to_string();
    config.logging.panel_capacity = 200;

    let resolved = Config::resolve(parse(&config.to_toml()), no_env);

    assert_eq!(resolved.theme, "Midnight");
    assert_eq!(resolved.carousel, config.carousel);
    assert_eq!(resolved.slides, config.slides);
    assert_eq!(resolved.logging, config.logging);
}

#[test]
fn test_config_roundtrip_empty_slides() {
    let mut config = Config::default();
    config.slides.clear();

    let toml_str = config.to_toml();
    let resolved = Config::resolve(parse(&toml_str), no_env);
    assert!(
        resolved.slides.is_empty(),
        "explicit empty list should not fall back to defaults:\n{}",
        toml_str
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading rules
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_sections_use_defaults() {
    let resolved = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(resolved.carousel, CarouselSettings::default());
    assert_eq!(resolved.slides, default_slides());
    assert!(resolved.enable_tui);
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "Paper"
[carousel]
interval_ms = 5000
reduced_motion = "off"
"#,
    );
    let env: HashMap<&str, &str> = HashMap::from([
        ("BANNER_THEME", "Midnight"),
        ("BANNER_INTERVAL_MS", "2500"),
        ("BANNER_COOLDOWN_MS", "not-a-number"),
        ("BANNER_REDUCED_MOTION", "on"),
        ("BANNER_NO_TUI", "1"),
    ]);

    let resolved = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(resolved.theme, "Midnight");
    assert_eq!(resolved.carousel.interval_ms, 2_500);
    assert_eq!(resolved.carousel.cooldown_ms, 30_000);
    assert_eq!(resolved.carousel.reduced_motion, ReducedMotion::On);
    assert!(!resolved.enable_tui);
}

#[test]
fn test_zero_durations_fall_back() {
    let file = parse(
        r#"
[carousel]
interval_ms = 0
cooldown_ms = 0
swipe_threshold_px = -3.0
"#,
    );
    let resolved = Config::resolve(file, no_env);
    assert_eq!(resolved.carousel.interval_ms, 10_000);
    assert_eq!(resolved.carousel.cooldown_ms, 30_000);
    assert_eq!(resolved.carousel.swipe_threshold_px, 50.0);
}

#[test]
fn test_unknown_enums_fall_back() {
    let file = parse(
        r#"
[carousel]
loop_mode = "spiral"
reduced_motion = "sometimes"
"#,
    );
    let resolved = Config::resolve(file, no_env);
    assert_eq!(resolved.carousel.loop_mode, LoopMode::Modular);
    assert_eq!(resolved.carousel.reduced_motion, ReducedMotion::Auto);
}

#[test]
fn test_invalid_logging_values_fall_back() {
    let file = parse(
        r#"
[logging]
level = "LOUD"
panel_capacity = 0
file_rotation = "weekly"
"#,
    );
    let resolved = Config::resolve(file, no_env);
    assert_eq!(resolved.logging, LoggingConfig::default());
}

#[test]
fn test_logging_level_is_normalized() {
    let file = parse("[logging]\nlevel = \" Warn \"\n");
    let resolved = Config::resolve(file, no_env);
    assert_eq!(resolved.logging.level, "warn");
}

#[test]
fn test_slide_alt_text_defaults_from_id() {
    let file = parse(
        r#"
[[slides]]
id = "7"
image = "seven.png"
"#,
    );
    let resolved = Config::resolve(file, no_env);
    assert_eq!(resolved.slides, vec![Slide::new("7", "seven.png", "Banner 7")]);
}

#[test]
fn test_options_carry_durations() {
    let settings = CarouselSettings {
        interval_ms: 1_500,
        cooldown_ms: 9_000,
        ..CarouselSettings::default()
    };
    let options = settings.options();
    assert_eq!(options.policy.interval.as_millis(), 1_500);
    assert_eq!(options.policy.cooldown.as_millis(), 9_000);
    assert_eq!(options.swipe_threshold_px, 50.0);
}

//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::theme::Theme;

impl Config {
    /// Serialize the slide list as [[slides]] tables
    pub(super) fn slides_to_toml(&self) -> String {
        if self.slides.is_empty() {
            // Explicitly empty: the carousel shows its placeholder
            return "slides = []\n".to_string();
        }

        let mut output = String::new();
        for slide in &self.slides {
            output.push_str("[[slides]]\n");
            output.push_str(&format!("id = {:?}\n", slide.id.as_str()));
            output.push_str(&format!("image = {:?}\n", slide.image.as_str()));
            output.push_str(&format!("alt_text = {:?}\n", slide.alt_text));
            output.push('\n');
        }
        output
    }

    /// Generate TOML representation of this config
    pub fn to_toml(&self) -> String {
        let carousel = &self.carousel;
        let logging = &self.logging;

        format!(
            r#"# banner-carousel configuration

# Theme: {themes}
theme = "{theme}"

{slides_inline}# Carousel behavior
[carousel]
# Auto-advance interval
interval_ms = {interval}
# Pause after an arrow/dot/swipe/key interaction before rotating again
cooldown_ms = {cooldown}
# Horizontal drag distance that counts as a swipe
swipe_threshold_px = {swipe:?}
# Wrap strategy: modular, clone-padded
loop_mode = "{loop_mode}"
# Reduced motion: auto (ask the desktop), on, off
reduced_motion = "{reduced_motion}"
# Pixels per terminal column when turning mouse drags into swipes
cell_width_px = {cell_width:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# Entries kept for the log panel
panel_capacity = {log_panel_capacity}
# File logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"

{slides_tables}"#,
            themes = Theme::NAMES.join(", "),
            theme = self.theme,
            // An empty list must precede the first table to stay a top-level key
            slides_inline = if self.slides.is_empty() {
                self.slides_to_toml() + "\n"
            } else {
                String::new()
            },
            interval = carousel.interval_ms,
            cooldown = carousel.cooldown_ms,
            swipe = carousel.swipe_threshold_px,
            loop_mode = carousel.loop_mode.as_str(),
            reduced_motion = carousel.reduced_motion.as_str(),
            cell_width = carousel.cell_width_px,
            log_level = logging.level,
            log_panel_capacity = logging.panel_capacity,
            log_file_enabled = logging.file_enabled,
            log_file_dir = logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = logging.file_rotation.as_str(),
            log_file_prefix = logging.file_prefix,
            slides_tables = if self.slides.is_empty() {
                String::new()
            } else {
                format!("# Slides, in display order\n{}", self.slides_to_toml())
            },
        )
    }
}

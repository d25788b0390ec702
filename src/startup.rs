// Startup module - displays banner and carousel status
//
// Shows, before the TUI takes over the screen (or in headless mode):
// - Version info and branding
// - Configuration source
// - The slide list and rotation timing

use crate::carousel::Carousel;
use crate::config::{Config, ReducedMotion, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Feature status for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: String,
}

/// Print the startup banner
pub fn print_startup(config: &Config, carousel: &Carousel) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Banner Carousel{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Auto-rotating promotional banners{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    println!("  {DIM}Slides:{RESET}");
    if carousel.deck().is_empty() {
        println!("    {YELLOW}○{RESET} {DIM}none configured (placeholder shown){RESET}");
    }
    for (i, slide) in carousel.deck().iter().enumerate() {
        println!(
            "    {DIM}{:>2}.{RESET} {:<24} {DIM}{}{RESET}",
            i + 1,
            slide.image.as_str(),
            slide.alt_text
        );
    }
    println!();

    for module in &get_module_status(config, carousel) {
        print_module_status(module);
    }
    println!();

    println!(
        "  {MAGENTA}▸{RESET} Rotation {BOLD}{}{RESET}",
        carousel.rotation_state()
    );
    println!();
}

/// Status of each optional behavior
fn get_module_status(config: &Config, carousel: &Carousel) -> Vec<ModuleStatus> {
    let settings = &config.carousel;
    let motion_source = match settings.reduced_motion {
        ReducedMotion::Auto => "desktop setting",
        ReducedMotion::On | ReducedMotion::Off => "config",
    };

    vec![
        ModuleStatus {
            name: "rotation",
            enabled: carousel.armed_timer().is_some(),
            description: format!(
                "every {}ms, {}ms pause after interaction",
                settings.interval_ms, settings.cooldown_ms
            ),
        },
        ModuleStatus {
            name: "motion",
            enabled: !carousel.reduced_motion(),
            description: format!("reduced motion from {}", motion_source),
        },
        ModuleStatus {
            name: "looping",
            enabled: true,
            description: settings.loop_mode.as_str().to_string(),
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface".to_string(),
        },
        ModuleStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: config.logging.file_dir.display().to_string(),
        },
    ]
}

fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Print startup messages to the log (TUI log panel or stdout)
pub fn log_startup(config: &Config, carousel: &Carousel) {
    tracing::info!("Banner Carousel v{}", VERSION);
    tracing::info!(
        slides = carousel.slide_count(),
        theme = %config.theme,
        "Loaded configuration"
    );

    for module in &get_module_status(config, carousel) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!("Rotation {}", carousel.rotation_state());
}

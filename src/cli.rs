// CLI module - command-line argument parsing and handlers
//
// Provides subcommands:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Merge new defaults into existing config
// - simulate: Replay scripted sessions on simulated time

use crate::config::{Config, VERSION};
use crate::simulate;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Banner Carousel - auto-rotating promotional banners in the terminal
#[derive(Parser)]
#[command(name = "banner-carousel")]
#[command(version = VERSION)]
#[command(about = "Auto-rotating, interaction-aware banner carousel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Replay scripted sessions on a simulated clock
    Simulate {
        /// Scenario name, or "all"
        #[arg(long, default_value = "all")]
        scenario: String,

        /// Emit one JSON object per timeline entry
        #[arg(long)]
        json: bool,

        /// Use interval/cooldown from the config instead of the defaults
        #[arg(long)]
        use_config: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else if update {
                handle_config_update();
            } else {
                // No flag provided, show help
                println!("Usage: banner-carousel config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Update config with new defaults (preserves user values)");
                println!("  --path    Show config file path");
            }
            true
        }
        Some(Commands::Simulate {
            scenario,
            json,
            use_config,
        }) => {
            handle_simulate(&scenario, json, use_config);
            true
        }
        None => false, // No subcommand, run the carousel
    }
}

fn handle_simulate(name: &str, json: bool, use_config: bool) {
    let Some(scenarios) = simulate::select(name) else {
        eprintln!("Unknown scenario: {}", name);
        eprintln!("Available:");
        for s in simulate::scenarios() {
            eprintln!("  {:<16} {}", s.name, s.description);
        }
        eprintln!("  {:<16} run every scenario", "all");
        std::process::exit(1);
    };

    let options = if use_config {
        Config::from_env().carousel.options()
    } else {
        Default::default()
    };

    if let Err(e) = simulate::print(&scenarios, options, json) {
        eprintln!("Simulation failed: {:#}", e);
        std::process::exit(1);
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();
    let carousel = &config.carousel;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("enable_tui = {}", config.enable_tui);
    println!();
    println!("[carousel]");
    println!("interval_ms = {}", carousel.interval_ms);
    println!("cooldown_ms = {}", carousel.cooldown_ms);
    println!("swipe_threshold_px = {:?}", carousel.swipe_threshold_px);
    println!("loop_mode = {:?}", carousel.loop_mode.as_str());
    println!("reduced_motion = {:?}", carousel.reduced_motion.as_str());
    println!("cell_width_px = {:?}", carousel.cell_width_px);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!();
    println!("# {} slide(s)", config.slides.len());
    for slide in &config.slides {
        println!("#   {} {} ({})", slide.id, slide.image.as_str(), slide.alt_text);
    }

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            println!("Aborted.");
            return;
        }

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Re-render the file's values through the current template; env overrides stay out
    let updated = Config::from_file().to_toml();

    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    if let Err(e) = std::fs::write(&path, updated) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}

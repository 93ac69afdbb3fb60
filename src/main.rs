// CleanSlate - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Platform detection and environment construction
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use cleanslate::app;
pub use cleanslate::core;
pub use cleanslate::platform;
pub use cleanslate::ui;
pub use cleanslate::util;

use clap::Parser;
use crate::core::model::{Browser, CleanupEnv, Platform};
use crate::platform::process::SystemCommandRunner;
use std::sync::Arc;

/// CleanSlate - desktop privacy cleanup.
///
/// Flush the system DNS cache, clear browser data for supported browsers,
/// and sign out of supported desktop services.
#[derive(Parser, Debug)]
#[command(name = "CleanSlate", version, about)]
struct Cli {
    /// Preview mode: report what would be removed without deleting anything.
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can take part in the filter priority. Config-load
    // warnings are re-surfaced in the GUI, so nothing is lost to the
    // not-yet-initialised subscriber.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let known_ids: Vec<&str> = Browser::all().iter().map(|b| b.id()).collect();
    let (config, config_warnings) =
        platform::config::load_config(&platform_paths.config_dir, &known_ids);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        dry_run = cli.dry_run,
        "CleanSlate starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Detect the platform once; everything downstream receives it as data.
    let Some(host) = Platform::detect() else {
        tracing::error!("Unsupported operating system");
        eprintln!(
            "Error: {} supports Windows, macOS, and Linux only.",
            util::constants::APP_NAME
        );
        std::process::exit(1);
    };

    let Some(home) = platform::config::home_dir() else {
        tracing::error!("Could not determine the user's home directory");
        eprintln!("Error: could not determine the user's home directory.");
        std::process::exit(1);
    };

    tracing::info!(platform = %host, home = %home.display(), "Environment resolved");

    let env = CleanupEnv {
        platform: host,
        home,
        dry_run: cli.dry_run,
        runner: Arc::new(SystemCommandRunner),
    };

    let dark_mode = config.dark_mode;
    let state = app::state::AppState::new(env, config, config_warnings);

    let mut title = format!(
        "{} v{}",
        util::constants::APP_NAME,
        util::constants::APP_VERSION
    );
    if cli.dry_run {
        title.push_str(" (dry run)");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::CleanSlateApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch CleanSlate GUI: {e}");
        std::process::exit(1);
    }
}

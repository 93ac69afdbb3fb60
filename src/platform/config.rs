// CleanSlate - platform/config.rs
//
// Platform-specific home/config directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// Resolved platform paths for CleanSlate configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/cleanslate/ or %APPDATA%\CleanSlate\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

/// The current user's home directory, under which every cleanup target
/// lives. `None` only on badly broken environments.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[cleanup]` section.
    pub cleanup: CleanupSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[cleanup]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CleanupSection {
    /// Browser ids offered in the GUI. Absent or empty means all.
    pub browsers: Option<Vec<String>>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Validated browser ids the GUI offers. Always a subset of the known
    /// set; empty means the config disabled everything (still valid).
    pub browsers: Vec<String>,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl AppConfig {
    fn defaults(known_browser_ids: &[&str]) -> Self {
        Self {
            browsers: known_browser_ids.iter().map(|s| s.to_string()).collect(),
            dark_mode: true,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// `known_browser_ids` is the closed set of supported browser identifiers;
/// config entries outside it are dropped with a warning.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. A missing file returns defaults with no warnings (first-run).
/// An unparseable file returns defaults with an error warning -- the
/// application still starts but the user is informed.
pub fn load_config(config_dir: &Path, known_browser_ids: &[&str]) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::defaults(known_browser_ids), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::defaults(known_browser_ids), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::defaults(known_browser_ids), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::defaults(known_browser_ids);

    // -- Cleanup: browsers --
    if let Some(requested) = raw.cleanup.browsers {
        if requested.is_empty() {
            // Explicit empty list: offer all (same as absent).
            warnings.push(
                "[cleanup] browsers is empty; offering all supported browsers.".to_string(),
            );
        } else {
            let mut validated = Vec::new();
            for id in requested {
                let trimmed = id.trim().to_lowercase();
                if known_browser_ids.contains(&trimmed.as_str()) {
                    if !validated.contains(&trimmed) {
                        validated.push(trimmed);
                    }
                } else {
                    warnings.push(format!(
                        "[cleanup] browsers entry \"{id}\" is not a supported browser. \
                         Supported: {}.",
                        known_browser_ids.join(", ")
                    ));
                }
            }
            if !validated.is_empty() {
                config.browsers = validated;
            }
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

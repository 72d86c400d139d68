//! Configuration file loading with precedence handling.

use crate::model::Timings;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A duration override was zero; every movement needs a positive
    /// duration.
    #[error("Invalid timing in {path}: {field} must be at least 1ms")]
    ZeroDuration {
        /// Path with the invalid value.
        path: PathBuf,
        /// Offending field name.
        field: &'static str,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional — if not specified, hardcoded defaults are
/// used. Corresponds to `~/.config/letterbox/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme name (e.g., "classic", "midnight", "mono").
    #[serde(default)]
    pub theme: Option<String>,

    /// Start the reveal sequence on launch instead of waiting for input.
    #[serde(default)]
    pub auto_open: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Duration overrides for the choreography.
    #[serde(default)]
    pub timings: Option<TimingsSection>,
}

/// `[timings]` section from TOML, all values in milliseconds.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct TimingsSection {
    /// Flap swing duration.
    #[serde(default)]
    pub flap_open_ms: Option<u64>,

    /// Letter slide duration.
    #[serde(default)]
    pub letter_slide_ms: Option<u64>,

    /// Zoom in/out duration.
    #[serde(default)]
    pub zoom_ms: Option<u64>,

    /// Envelope pull/release duration.
    #[serde(default)]
    pub envelope_move_ms: Option<u64>,
}

impl TimingsSection {
    fn validate(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let fields = [
            ("flap_open_ms", self.flap_open_ms),
            ("letter_slide_ms", self.letter_slide_ms),
            ("zoom_ms", self.zoom_ms),
            ("envelope_move_ms", self.envelope_move_ms),
        ];
        for (field, value) in fields {
            if value == Some(0) {
                return Err(ConfigError::ZeroDuration {
                    path: path.clone(),
                    field,
                });
            }
        }
        Ok(())
    }

    fn apply(&self, mut timings: Timings) -> Timings {
        if let Some(ms) = self.flap_open_ms {
            timings.flap_open = Duration::from_millis(ms);
        }
        if let Some(ms) = self.letter_slide_ms {
            timings.letter_slide = Duration::from_millis(ms);
        }
        if let Some(ms) = self.zoom_ms {
            timings.zoom = Duration::from_millis(ms);
        }
        if let Some(ms) = self.envelope_move_ms {
            timings.envelope_move = Duration::from_millis(ms);
        }
        timings
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Theme name.
    pub theme: String,
    /// Start the reveal on launch.
    pub auto_open: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Choreography durations.
    pub timings: Timings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: "classic".to_string(),
            auto_open: false,
            log_file_path: default_log_path(),
            timings: Timings::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/letterbox/letterbox.log` on Unix-like systems,
/// or the appropriate platform path elsewhere. Falls back to the current
/// directory when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("letterbox").join("letterbox.log")
    } else {
        PathBuf::from("letterbox.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/letterbox/config.toml` on Unix, the appropriate
/// path on other platforms, `None` if no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("letterbox").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error — use
/// defaults). Returns `Err` if it exists but cannot be read, parsed, or
/// validated.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if let Some(timings) = &config.timings {
        timings.validate(&path)?;
    }

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `LETTERBOX_CONFIG` environment variable
/// 3. Default path `~/.config/letterbox/config.toml`
///
/// Missing config files are NOT errors — defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(path) = std::env::var("LETTERBOX_CONFIG") {
        return load_config_file(PathBuf::from(path));
    }

    match default_config_path() {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Merge an optional config file over the hardcoded defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(file) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: file.theme.unwrap_or(defaults.theme),
        auto_open: file.auto_open.unwrap_or(defaults.auto_open),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
        timings: file
            .timings
            .map(|t| t.apply(defaults.timings))
            .unwrap_or(defaults.timings),
    }
}

/// Apply environment variable overrides.
///
/// `LETTERBOX_THEME` overrides the theme; `LETTERBOX_AUTO_OPEN` set to
/// `1` or `true` enables auto-open.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var("LETTERBOX_THEME") {
        if !theme.is_empty() {
            config.theme = theme;
        }
    }
    if let Ok(auto) = std::env::var("LETTERBOX_AUTO_OPEN") {
        config.auto_open = auto == "1" || auto.eq_ignore_ascii_case("true");
    }
    config
}

/// Apply CLI argument overrides (the highest-precedence source).
///
/// `None` means the flag was not given and the current value stands.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme: Option<String>,
    auto_open: Option<bool>,
) -> ResolvedConfig {
    if let Some(theme) = theme {
        config.theme = theme;
    }
    if let Some(auto_open) = auto_open {
        config.auto_open = auto_open;
    }
    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

//! Configuration loading with precedence handling.
//!
//! Precedence: Defaults → Config File → CLI args. A missing config file
//! is not an error; defaults apply.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
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
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are
/// used. Corresponds to `~/.config/endirim/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to the offers JSON file.
    #[serde(default)]
    pub offers_path: Option<PathBuf>,

    /// Path to the details JSON file.
    #[serde(default)]
    pub details_path: Option<PathBuf>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Whether the feedback survey tab is available.
    #[serde(default)]
    pub survey_enabled: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Path to the offers JSON file.
    pub offers_path: PathBuf,
    /// Path to the details JSON file.
    pub details_path: PathBuf,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
    /// Whether the feedback survey tab is available.
    pub survey_enabled: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            offers_path: PathBuf::from("data/offers.json"),
            details_path: PathBuf::from("data/details.json"),
            log_file_path: default_log_path(),
            survey_enabled: true,
        }
    }
}

/// Resolve the default log file path.
///
/// Returns `~/.local/state/endirim/endirim.log` on Unix-like systems, or
/// the platform equivalent. Falls back to the current directory when no
/// state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("endirim").join("endirim.log")
    } else {
        PathBuf::from("endirim.log")
    }
}

/// Default config file path: `~/.config/endirim/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("endirim").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults). Returns `Err` if the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

    Ok(Some(config))
}

/// Load config honoring an explicit `--config` override.
///
/// With an explicit path the file must exist and parse. Without one the
/// default location is tried and a missing file falls back to defaults.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    reason: "file does not exist".to_string(),
                });
            }
            load_config_file(path)
        }
        None => match default_config_path() {
            Some(path) => load_config_file(path),
            None => Ok(None),
        },
    }
}

/// Merge an optional config file over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(file) = file else {
        return defaults;
    };
    ResolvedConfig {
        offers_path: file.offers_path.unwrap_or(defaults.offers_path),
        details_path: file.details_path.unwrap_or(defaults.details_path),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
        survey_enabled: file.survey_enabled.unwrap_or(defaults.survey_enabled),
    }
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    offers_path: Option<PathBuf>,
    details_path: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(path) = offers_path {
        config.offers_path = path;
    }
    if let Some(path) = details_path {
        config.details_path = path;
    }
    config
}

// ===== Tests =====

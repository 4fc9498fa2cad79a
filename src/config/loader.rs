//! Configuration file loading with precedence handling.

use crate::codegen::OutputFormat;
use crate::model::LayoutMode;
use crate::viewport::ViewportKind;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "FLEXLAB_CONFIG";
/// Env var overriding the startup viewport.
pub const VIEWPORT_ENV: &str = "FLEXLAB_VIEWPORT";
/// Env var overriding the startup output format.
pub const FORMAT_ENV: &str = "FLEXLAB_FORMAT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/flexlab/config.toml`:
///
/// ```toml
/// viewport = "mobile"
/// output_format = "markup"
/// mode = "grid"
/// log_file_path = "/tmp/flexlab.log"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Simulated device on startup.
    #[serde(default)]
    pub viewport: Option<ViewportKind>,

    /// Code panel format on startup.
    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    /// Layout mode of the seed layout.
    #[serde(default)]
    pub mode: Option<LayoutMode>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Device frame shown on start.
    pub viewport: ViewportKind,
    /// Code panel tab shown on start.
    pub output_format: OutputFormat,
    /// Initial container mode.
    pub mode: LayoutMode,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportKind::default(),
            output_format: OutputFormat::default(),
            mode: LayoutMode::default(),
            log_file_path: default_log_path(),
        }
    }
}

// ===== Value names =====

/// Read a viewport name as used in the config file and on the command line.
pub fn parse_viewport(name: &str) -> Option<ViewportKind> {
    match name.trim().to_ascii_lowercase().as_str() {
        "mobile" => Some(ViewportKind::Mobile),
        "tablet" => Some(ViewportKind::Tablet),
        "desktop" => Some(ViewportKind::Desktop),
        _ => None,
    }
}

/// Read an output format name. `tailwind` is accepted for `markup`.
pub fn parse_format(name: &str) -> Option<OutputFormat> {
    match name.trim().to_ascii_lowercase().as_str() {
        "css" => Some(OutputFormat::Css),
        "markup" | "tailwind" => Some(OutputFormat::Markup),
        _ => None,
    }
}

/// Read a layout mode name.
pub fn parse_mode(name: &str) -> Option<LayoutMode> {
    match name.trim().to_ascii_lowercase().as_str() {
        "flex" => Some(LayoutMode::Flex),
        "grid" => Some(LayoutMode::Grid),
        _ => None,
    }
}

// ===== Paths =====

/// Resolve default log file path.
///
/// Returns `~/.local/state/flexlab/flexlab.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("flexlab").join("flexlab.log")
    } else {
        PathBuf::from("flexlab.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/flexlab/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flexlab").join("config.toml"))
}

// ===== Loading =====

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidPath("empty path".to_string()));
    }

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

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FLEXLAB_CONFIG` environment variable
/// 3. Default path `~/.config/flexlab/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

// ===== Precedence chain =====

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        viewport: config.viewport.unwrap_or(defaults.viewport),
        output_format: config.output_format.unwrap_or(defaults.output_format),
        mode: config.mode.unwrap_or(defaults.mode),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// An environment override that was set but not understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredEnvValue {
    /// Name of the variable, e.g. `FLEXLAB_VIEWPORT`.
    pub var: &'static str,
    /// The value as it was set.
    pub value: String,
}

impl IgnoredEnvValue {
    /// Report the ignored value through `tracing`.
    ///
    /// Config is resolved before the subscriber exists, so callers log these
    /// once `logging::init` has run.
    pub fn log(&self) {
        warn!(var = self.var, value = %self.value, "Ignoring unrecognised environment override");
    }
}

impl std::fmt::Display for IgnoredEnvValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ignoring {}={:?}", self.var, self.value)
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FLEXLAB_VIEWPORT`: mobile, tablet or desktop
/// - `FLEXLAB_FORMAT`: css or markup
///
/// Unrecognised values leave the config untouched and are returned so the
/// caller can warn about them.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<IgnoredEnvValue>) {
    let mut ignored = Vec::new();

    if let Ok(value) = std::env::var(VIEWPORT_ENV) {
        match parse_viewport(&value) {
            Some(kind) => config.viewport = kind,
            None => ignored.push(IgnoredEnvValue {
                var: VIEWPORT_ENV,
                value,
            }),
        }
    }

    if let Ok(value) = std::env::var(FORMAT_ENV) {
        match parse_format(&value) {
            Some(format) => config.output_format = format,
            None => ignored.push(IgnoredEnvValue {
                var: FORMAT_ENV,
                value,
            }),
        }
    }

    (config, ignored)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    viewport_override: Option<ViewportKind>,
    format_override: Option<OutputFormat>,
    mode_override: Option<LayoutMode>,
) -> ResolvedConfig {
    if let Some(viewport) = viewport_override {
        config.viewport = viewport;
    }

    if let Some(format) = format_override {
        config.output_format = format;
    }

    if let Some(mode) = mode_override {
        config.mode = mode;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

//! Configuration loading.
//!
//! Locates `astrofacts.toml`, creates the default file when the default
//! location is empty, then parses and validates it.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::Config;
use super::validation::validate_config;
use crate::constants::*;

/// Configuration directory chosen with `--config`, set once at startup.
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// Returns an error if it was already set.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// The `--config` directory, if one was given.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Path of the active configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration using automatic path detection.
///
/// With no `--config` directory, a default file is created if none exists.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        if get_custom_config_dir().is_some() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                config_path.display()
            );
        }
        super::builder::create_default_config(&config_path)
            .context("Failed to create default config during load")?;
        log_debug!("Created default config at {}", config_path.display());
    }

    load_from_path(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
}

/// Load configuration from a specific path. Never creates the file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    validate_config(&config)?;
    apply_defaults(&mut config);

    Ok(config)
}

/// Fill unset fields so later code sees the effective values.
fn apply_defaults(config: &mut Config) {
    if config.default_timezone.is_none() {
        config.default_timezone = Some(DEFAULT_TIMEZONE.to_string());
    }
    if config.warn_on_timezone_fallback.is_none() {
        config.warn_on_timezone_fallback = Some(DEFAULT_WARN_ON_TIMEZONE_FALLBACK);
    }
    if config.output.is_none() {
        config.output = Some(Default::default());
    }
}

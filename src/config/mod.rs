//! Configuration for the astrofacts command-line front end.
//!
//! Settings live in `astrofacts.toml`, looked up in this order:
//! 1. `--config DIR` (`DIR/astrofacts.toml`)
//! 2. `$XDG_CONFIG_HOME/astrofacts/astrofacts.toml`
//!
//! A commented default file is written the first time the default location is
//! used. An explicit `--config` directory must already contain the file.
//!
//! ```toml
//! #[Profile defaults]
//! default_timezone = "UTC"          # Zone used when a profile omits one
//! warn_on_timezone_fallback = true  # Warn when a zone cannot be resolved
//!
//! #[Output]
//! output = "text"                   # "text" or "json"
//!
//! [timezone_aliases]
//! NYC = "America/New_York"
//! ```
//!
//! Every field is optional. Values are validated on load: the default zone
//! and every alias target must resolve, and alias names must be non-empty.

pub mod builder;
pub mod loading;
pub mod validation;

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::constants::*;
use crate::time::TimezoneResolver;

pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};


/// How results are printed.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawing layout through the logger.
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Settings loaded from `astrofacts.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Zone applied to profiles that do not name one.
    pub default_timezone: Option<String>,
    /// Print a warning when a profile's zone falls back to UTC.
    pub warn_on_timezone_fallback: Option<bool>,
    pub output: Option<OutputFormat>,
    /// Extra names accepted as timezones, mapped to IANA zones or offsets.
    pub timezone_aliases: Option<BTreeMap<String, String>>,
}

impl Config {
    pub fn default_timezone(&self) -> &str {
        self.default_timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    pub fn warn_on_timezone_fallback(&self) -> bool {
        self.warn_on_timezone_fallback
            .unwrap_or(DEFAULT_WARN_ON_TIMEZONE_FALLBACK)
    }

    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    /// Resolver with the built-in aliases plus the configured ones.
    pub fn resolver(&self) -> TimezoneResolver {
        let resolver = TimezoneResolver::default();
        match &self.timezone_aliases {
            Some(aliases) => resolver.with_aliases(aliases.clone()),
            None => resolver,
        }
    }

    pub fn log_config(&self) {
        log_debug!("Default timezone: {}", self.default_timezone());
        log_debug!(
            "Warn on timezone fallback: {}",
            self.warn_on_timezone_fallback()
        );
        log_debug!("Output: {}", self.output().as_str());
        if let Some(aliases) = &self.timezone_aliases {
            for (alias, zone) in aliases {
                log_debug!("Alias: {alias} → {zone}");
            }
        }
    }
}

//! Default configuration file creation.
//!
//! Writes a commented `astrofacts.toml` with every setting at its default,
//! aligned with a small builder so the comments line up.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Create a default config file at `path`, including parent directories.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", path.display()))
}

pub(crate) fn default_config_content() -> String {
    let mut content = ConfigBuilder::new()
        .add_section("Profile defaults")
        .add_setting(
            "default_timezone",
            &format!("\"{DEFAULT_TIMEZONE}\""),
            "Zone used when a profile omits one",
        )
        .add_setting(
            "warn_on_timezone_fallback",
            &DEFAULT_WARN_ON_TIMEZONE_FALLBACK.to_string(),
            "Warn when a zone cannot be resolved",
        )
        .add_section("Output")
        .add_setting("output", "\"text\"", "\"text\" or \"json\"")
        .add_table("timezone_aliases")
        .add_comment("Extra names accepted as timezones, for example:")
        .add_comment("NYC = \"America/New_York\"")
        .build();
    content.push('\n');
    content
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Table(String),
    Comment(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_table(mut self, name: &str) -> Self {
        self.entries.push(ConfigEntry::Table(format!("[{name}]")));
        self
    }

    fn add_comment(mut self, text: &str) -> Self {
        self.entries.push(ConfigEntry::Comment(format!("# {text}")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        // Align comments one space past the longest setting line
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        for entry in self.entries {
            match entry {
                ConfigEntry::Section(header) | ConfigEntry::Table(header) => {
                    if !result.is_empty() {
                        result.push(String::new());
                    }
                    result.push(header);
                }
                ConfigEntry::Comment(text) => result.push(text),
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}

//! Configuration validation.
//!
//! Rejects settings that would silently degrade every result, such as a
//! default zone that would always trigger the UTC fallback.

use anyhow::Result;

use super::Config;
use crate::time::resolve_zone_name;

/// Validate a parsed configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(zone) = &config.default_timezone {
        let resolver = config.resolver();
        if resolver.resolve(zone).is_none() {
            anyhow::bail!(
                "default_timezone '{}' is not a known IANA zone, alias or UTC offset",
                zone
            );
        }
    }

    if let Some(aliases) = &config.timezone_aliases {
        for (alias, target) in aliases {
            if alias.trim().is_empty() {
                anyhow::bail!("timezone_aliases contains an empty alias name");
            }
            if alias.trim() != alias {
                anyhow::bail!(
                    "timezone alias '{}' must not have leading or trailing whitespace",
                    alias
                );
            }
            // Targets must be real zones; alias chains are not followed
            if resolve_zone_name(target).is_none() {
                anyhow::bail!(
                    "timezone alias '{}' points to unknown zone '{}'",
                    alias,
                    target
                );
            }
        }
    }

    Ok(())
}

//! Timezone name resolution.
//!
//! Profiles carry whatever the user typed for a timezone, so resolution is
//! forgiving: a small alias table first, then IANA names (case-insensitive),
//! then UTC offset specifiers such as `UTC+8`, `GMT-05:30` or `+0800`.
//! Anything else is unresolved and left to the caller's fallback policy.

use chrono::FixedOffset;
use chrono_tz::Tz;
use std::collections::HashMap;
use std::fmt;

use crate::constants::BUILTIN_TIMEZONE_ALIASES;

/// A zone the resolver understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedZone {
    /// An IANA zone with its full transition history.
    Named(Tz),
    /// A constant offset from UTC.
    Fixed(FixedOffset),
}

impl ResolvedZone {
    pub fn name(&self) -> String {
        match self {
            ResolvedZone::Named(tz) => tz.name().to_string(),
            ResolvedZone::Fixed(offset) => format!("UTC{offset}"),
        }
    }
}

impl fmt::Display for ResolvedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Maps user-supplied timezone strings to zones.
#[derive(Debug, Clone)]
pub struct TimezoneResolver {
    aliases: HashMap<String, String>,
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self {
            aliases: BUILTIN_TIMEZONE_ALIASES
                .iter()
                .map(|(alias, zone)| (alias.to_string(), zone.to_string()))
                .collect(),
        }
    }
}

impl TimezoneResolver {
    /// Resolver with the built-in aliases only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add aliases on top of the current table. Later entries win.
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Resolve a user-supplied timezone string.
    pub fn resolve(&self, input: &str) -> Option<ResolvedZone> {
        let name = input.trim();
        if name.is_empty() {
            return None;
        }

        // Aliases match exactly; their targets go through normal lookup.
        let target = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        resolve_zone_name(target)
    }
}

/// Resolve an IANA name or an offset specifier, without alias lookup.
pub fn resolve_zone_name(name: &str) -> Option<ResolvedZone> {
    let name = name.trim();
    if let Ok(tz) = name.parse::<Tz>() {
        return Some(ResolvedZone::Named(tz));
    }
    if let Ok(tz) = Tz::from_str_insensitive(name) {
        return Some(ResolvedZone::Named(tz));
    }
    parse_offset_specifier(name).map(ResolvedZone::Fixed)
}

/// Parse `Z`, `UTC`, `GMT`, `UTC+8`, `UTC-05:30`, `GMT+0530`, `+08:00`, `-5`.
fn parse_offset_specifier(input: &str) -> Option<FixedOffset> {
    let lower = input.to_ascii_lowercase();
    if lower == "z" {
        return FixedOffset::east_opt(0);
    }

    let rest = lower
        .strip_prefix("utc")
        .or_else(|| lower.strip_prefix("gmt"))
        .unwrap_or(&lower);
    if rest.is_empty() {
        // Only reachable through a bare "utc"/"gmt" prefix
        return if lower.is_empty() {
            None
        } else {
            FixedOffset::east_opt(0)
        };
    }

    let (sign, digits) = match rest.as_bytes()[0] {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };

    // ASCII only from here on, so byte lengths and split points are safe
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) if !h.is_empty() && h.len() <= 2 && m.len() == 2 => (h, m),
        Some(_) => return None,
        None if !digits.is_empty() && digits.len() <= 2 => (digits, "0"),
        None if digits.len() == 4 => digits.split_at(2),
        None => return None,
    };

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 14 || minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

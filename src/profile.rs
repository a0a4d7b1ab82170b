//! Birth profile parsing.
//!
//! A profile arrives as strings (command-line flags or a TOML file). This is
//! where they are checked; the calculator functions themselves assume valid
//! input and never fail.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A person's birth data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthProfile {
    pub dob: NaiveDate,
    /// Local time of birth. Required for the UTC instant and the moon sign.
    pub tob: Option<NaiveTime>,
    /// IANA zone name, alias or UTC offset specifier, as typed by the user.
    pub timezone: String,
    pub place: Option<String>,
}

/// On-disk profile layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileFile {
    dob: String,
    tob: Option<String>,
    timezone: Option<String>,
    place: Option<String>,
}

impl BirthProfile {
    /// Build a profile from its string fields.
    ///
    /// `dob` is `YYYY-MM-DD`, `tob` is 24-hour `HH:MM` or `HH:MM:SS`.
    pub fn parse(dob: &str, tob: Option<&str>, timezone: &str) -> Result<Self> {
        let dob = parse_dob(dob)?;
        let tob = tob
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(parse_tob)
            .transpose()?;

        Ok(Self {
            dob,
            tob,
            timezone: timezone.trim().to_string(),
            place: None,
        })
    }

    pub fn with_place(mut self, place: Option<String>) -> Self {
        self.place = place.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
        self
    }

    /// Load a profile from a TOML file.
    ///
    /// A missing `timezone` key takes `default_timezone`.
    pub fn load_from_path(path: &Path, default_timezone: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile from {}", path.display()))?;
        Self::from_toml_str(&content, default_timezone)
            .with_context(|| format!("Failed to parse profile from {}", path.display()))
    }

    pub fn from_toml_str(content: &str, default_timezone: &str) -> Result<Self> {
        let raw: ProfileFile = toml::from_str(content).context("Invalid profile TOML")?;
        let timezone = raw.timezone.as_deref().unwrap_or(default_timezone);
        Ok(Self::parse(&raw.dob, raw.tob.as_deref(), timezone)?.with_place(raw.place))
    }
}

fn parse_dob(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("Invalid date of birth '{input}'. Use YYYY-MM-DD"))
}

fn parse_tob(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .with_context(|| format!("Invalid time of birth '{input}'. Use HH:MM or HH:MM:SS (24-hour)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_profile() {
        let profile = BirthProfile::parse(TEST_DOB, Some(TEST_TOB), TEST_TIMEZONE).unwrap();
        assert_eq!(profile.dob, NaiveDate::from_ymd_opt(1986, 3, 21).unwrap());
        assert_eq!(profile.tob, NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(profile.timezone, "Asia/Singapore");
        assert_eq!(profile.place, None);
    }

    #[test]
    fn test_time_with_seconds_and_blank_time() {
        let profile = BirthProfile::parse("2000-02-29", Some("23:59:30"), "UTC").unwrap();
        assert_eq!(profile.tob, NaiveTime::from_hms_opt(23, 59, 30));

        let no_time = BirthProfile::parse("2000-02-29", Some("  "), "UTC").unwrap();
        assert_eq!(no_time.tob, None);
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let err = BirthProfile::parse("1986-02-30", None, "UTC").unwrap_err();
        assert!(err.to_string().contains("Invalid date of birth"));

        let err = BirthProfile::parse("1986-03-21", Some("25:00"), "UTC").unwrap_err();
        assert!(err.to_string().contains("Invalid time of birth"));

        assert!(BirthProfile::parse("21/03/1986", None, "UTC").is_err());
    }

    #[test]
    fn test_unknown_timezone_is_not_a_parse_error() {
        let profile = BirthProfile::parse(TEST_DOB, Some(TEST_TOB), "Atlantis/Capital").unwrap();
        assert_eq!(profile.timezone, "Atlantis/Capital");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "dob = \"1986-03-21\"\ntob = \"00:00\"\ntimezone = \"Singapore\"\nplace = \"Singapore\""
        )
        .unwrap();

        let profile = BirthProfile::load_from_path(file.path(), "UTC").unwrap();
        assert_eq!(profile.timezone, "Singapore");
        assert_eq!(profile.place.as_deref(), Some("Singapore"));
    }

    #[test]
    fn test_toml_defaults_timezone_and_rejects_unknown_keys() {
        let profile = BirthProfile::from_toml_str("dob = \"1970-01-01\"", "Europe/Paris").unwrap();
        assert_eq!(profile.timezone, "Europe/Paris");
        assert_eq!(profile.tob, None);

        assert!(BirthProfile::from_toml_str("dob = \"1970-01-01\"\nzodiac = \"Leo\"", "UTC").is_err());
    }
}

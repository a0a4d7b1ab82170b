//! Facts command implementation.
//!
//! Builds a birth profile from flags or a profile file, derives the full set
//! of facts and prints them.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;
use std::path::Path;

use crate::args::FactsInput;
use crate::config::Config;
use crate::facts::ZodiacFacts;
use crate::profile::BirthProfile;
use crate::zodiac::chinese_element;
use crate::zodiac::ephemeris::julian_day;
use crate::zodiac::degree_in_sign;

/// JSON layout: the profile as understood, followed by the facts.
#[derive(Serialize)]
struct FactsReport<'a> {
    dob: NaiveDate,
    tob: Option<NaiveTime>,
    place: Option<&'a str>,
    #[serde(flatten)]
    facts: &'a ZodiacFacts,
}

/// Handle the facts command.
pub fn handle_facts_command(input: &FactsInput, config: &Config, json: bool) -> Result<()> {
    let profile = build_profile(input, config)?;
    let resolver = config.resolver();
    let facts = ZodiacFacts::assemble(&profile, &resolver);

    log_debug!("Profile timezone input: '{}'", profile.timezone);
    match &facts.timezone {
        Some(zone) => log_debug!("Resolved timezone: {}", zone),
        None => log_debug!("Timezone unresolved, reading birth time as UTC"),
    }
    if let Some(instant) = facts.utc_instant {
        log_debug!("Julian day (UT): {:.6}", julian_day(instant));
    }
    if let Some(longitude) = facts.moon_longitude {
        log_debug!("Moon longitude: {:.6}°", longitude);
    }

    if !facts.timezone_resolved && config.warn_on_timezone_fallback() {
        if json {
            eprintln!(
                "warning: timezone '{}' not recognized, using UTC",
                profile.timezone
            );
        } else {
            log_warning_standalone!(
                "Timezone '{}' not recognized, using UTC",
                profile.timezone
            );
        }
    }

    if json {
        return super::print_json(&FactsReport {
            dob: profile.dob,
            tob: profile.tob,
            place: profile.place.as_deref(),
            facts: &facts,
        });
    }

    display_facts(&profile, &facts);
    Ok(())
}

fn build_profile(input: &FactsInput, config: &Config) -> Result<BirthProfile> {
    match input {
        FactsInput::Fields {
            dob,
            tob,
            timezone,
            place,
        } => {
            let timezone = timezone.as_deref().unwrap_or(config.default_timezone());
            Ok(BirthProfile::parse(dob, tob.as_deref(), timezone)?.with_place(place.clone()))
        }
        FactsInput::ProfileFile(path) => {
            BirthProfile::load_from_path(Path::new(path), config.default_timezone())
        }
    }
}

fn display_facts(profile: &BirthProfile, facts: &ZodiacFacts) {
    log_version!();

    log_block_start!("Birth profile");
    log_indented!("Date: {}", profile.dob);
    match profile.tob {
        Some(tob) => log_indented!("Time: {}", tob.format("%H:%M:%S")),
        None => log_indented!("Time: unknown"),
    }
    match &facts.timezone {
        Some(zone) => log_indented!("Timezone: {}", zone),
        None => log_indented!("Timezone: UTC (fallback from '{}')", profile.timezone),
    }
    if let Some(place) = &profile.place {
        log_indented!("Place: {}", place);
    }
    if let Some(instant) = facts.utc_instant {
        log_indented!("UTC: {}", instant.format("%Y-%m-%d %H:%M:%S"));
    }

    let stem = chinese_element(profile.dob.year());
    log_block_start!("Natal facts");
    log_indented!("Sun sign: {}", facts.sun_sign);
    match (facts.moon_sign, facts.moon_longitude) {
        (Some(sign), Some(longitude)) => log_indented!(
            "Moon sign: {} ({:.2}° {})",
            sign,
            degree_in_sign(longitude),
            sign
        ),
        _ => log_indented!("Moon sign: needs a time of birth"),
    }
    log_indented!("Chinese zodiac: {}", facts.chinese_animal);
    log_indented!("Chinese element: {} ({})", stem, stem.pinyin());
    log_end!();
}

/// Display help for the facts command
pub fn display_help() {
    log_version!();
    log_block_start!("facts - Sun, moon and Chinese facts for a birth profile");
    log_block_start!("Usage: astrofacts facts --dob <date> [OPTIONS]");
    log_indented!("       astrofacts facts --profile <file>");
    log_block_start!("Options:");
    log_indented!("--dob <YYYY-MM-DD>    Date of birth");
    log_indented!("--tob <HH:MM[:SS]>    Local time of birth (needed for the moon sign)");
    log_indented!("--tz <zone>           IANA zone, alias or offset such as UTC+8");
    log_indented!("                      (default: default_timezone from config)");
    log_indented!("--place <text>        Place of birth, shown for reference");
    log_indented!("--profile <file>      Read dob, tob, timezone and place from TOML");
    log_indented!("-j, --json            Output in JSON format");
    log_block_start!("Notes:");
    log_indented!("An unrecognized timezone is read as UTC and flagged in the output");
    log_block_start!("Examples:");
    log_indented!("astrofacts facts --dob 1986-03-21 --tob 00:00 --tz Asia/Singapore");
    log_indented!("astrofacts facts --json --profile ~/me.toml");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;
    use std::collections::BTreeMap;
    use std::io::Write;

    #[test]
    fn test_build_profile_uses_config_default_zone() {
        let config = Config {
            default_timezone: Some("Asia/Tokyo".to_string()),
            ..Config::default()
        };
        let input = FactsInput::Fields {
            dob: TEST_DOB.to_string(),
            tob: Some(TEST_TOB.to_string()),
            timezone: None,
            place: Some("Tokyo".to_string()),
        };

        let profile = build_profile(&input, &config).unwrap();
        assert_eq!(profile.timezone, "Asia/Tokyo");
        assert_eq!(profile.place.as_deref(), Some("Tokyo"));
    }

    #[test]
    fn test_build_profile_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dob = \"{TEST_DOB}\"\ntob = \"{TEST_TOB}\"").unwrap();

        let config = Config {
            default_timezone: Some("Home".to_string()),
            timezone_aliases: Some(BTreeMap::from([(
                "Home".to_string(),
                TEST_TIMEZONE.to_string(),
            )])),
            ..Config::default()
        };
        let input = FactsInput::ProfileFile(file.path().display().to_string());

        let profile = build_profile(&input, &config).unwrap();
        assert_eq!(profile.timezone, "Home");

        let facts = ZodiacFacts::assemble(&profile, &config.resolver());
        assert_eq!(facts.timezone.as_deref(), Some(TEST_TIMEZONE));
    }

    #[test]
    fn test_build_profile_rejects_bad_date() {
        let input = FactsInput::Fields {
            dob: "21/03/1986".to_string(),
            tob: None,
            timezone: None,
            place: None,
        };
        assert!(build_profile(&input, &Config::default()).is_err());
    }

    #[test]
    fn test_report_json_layout() {
        let profile = BirthProfile::parse(TEST_DOB, None, TEST_TIMEZONE).unwrap();
        let facts = ZodiacFacts::assemble(&profile, &Config::default().resolver());
        let report = FactsReport {
            dob: profile.dob,
            tob: profile.tob,
            place: None,
            facts: &facts,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["dob"], "1986-03-21");
        assert!(value["tob"].is_null());
        assert_eq!(value["sun_sign"], "Aries");
        assert_eq!(value["chinese_animal"], "Tiger");
        assert!(value["moon_sign"].is_null());
    }
}

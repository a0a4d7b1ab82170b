//! Moon command implementation.

use anyhow::Result;
use serde_json::json;

use crate::time::source::{now, parse_instant};
use crate::zodiac::ephemeris::julian_day;
use crate::zodiac::moon::normalize_longitude;
use crate::zodiac::{MeeusMoon, MoonLongitude, degree_in_sign, sign_for_longitude};

/// Handle the moon command - print the moon sign at an instant.
///
/// With no instant the current time from the time source is used.
pub fn handle_moon_command(instant: Option<&str>, json: bool) -> Result<()> {
    let instant = match instant {
        Some(input) => parse_instant(input)?,
        None => now(),
    };

    log_debug!("Julian day (UT): {:.6}", julian_day(instant));
    let longitude = normalize_longitude(MeeusMoon.geocentric_longitude(instant));
    log_debug!("Moon longitude: {:.6}°", longitude);
    let sign = sign_for_longitude(longitude);

    if json {
        return super::print_json(&json!({
            "instant": instant,
            "moon_longitude": longitude,
            "moon_sign": sign,
        }));
    }

    log_version!();
    log_block_start!("Moon at {}", instant.format("%Y-%m-%d %H:%M:%S UTC"));
    log_indented!("Sign: {}", sign);
    log_indented!(
        "Longitude: {:.2}° ({:.2}° {})",
        longitude,
        degree_in_sign(longitude),
        sign
    );
    log_end!();
    Ok(())
}

/// Display help for the moon command
pub fn display_help() {
    log_version!();
    log_block_start!("moon - Moon sign at an instant");
    log_block_start!("Usage: astrofacts moon [INSTANT]");
    log_block_start!("Arguments:");
    log_indented!("INSTANT  RFC 3339 (1992-04-12T08:00:00+08:00) or");
    log_indented!("         YYYY-MM-DD HH:MM[:SS], read as UTC");
    log_indented!("         If omitted, uses the current time");
    log_block_start!("Notes:");
    log_indented!("Apparent geocentric longitude, tropical zodiac, 30° per sign");
    log_block_start!("Examples:");
    log_indented!("astrofacts moon");
    log_indented!("astrofacts moon 1992-04-12T00:00:00Z");
    log_end!();
}

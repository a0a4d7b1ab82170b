//! Application-wide constants and defaults.

// # Configuration
pub const CONFIG_DIR_NAME: &str = "astrofacts";
pub const CONFIG_FILE_NAME: &str = "astrofacts.toml";

// # Default values
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_WARN_ON_TIMEZONE_FALLBACK: bool = true;

/// Aliases accepted on top of IANA names, checked before zone lookup.
pub const BUILTIN_TIMEZONE_ALIASES: &[(&str, &str)] =
    &[("Singapore", "Asia/Singapore"), ("SG", "Asia/Singapore")];

// # Calendar anchors
/// Gregorian year whose residue starts both Chinese cycles (year 4 = Jia-Zi, Rat).
pub const CHINESE_CYCLE_ANCHOR_YEAR: i32 = 4;

// # Astronomy
pub const DEGREES_PER_SIGN: f64 = 30.0;
pub const JULIAN_DAY_UNIX_EPOCH: f64 = 2_440_587.5;
pub const JULIAN_DAY_J2000: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// # Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

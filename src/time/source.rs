//! Source of "now" for commands that default to the current instant.
//!
//! The calculator itself never reads the clock. Only CLI commands that are
//! given no explicit instant (such as `astrofacts moon`) ask this module, and
//! tests swap in a fixed clock.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::OnceCell;
use std::sync::Arc;

static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting the wall clock.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
#[cfg(any(test, feature = "testing-support"))]
pub struct FixedTimeSource(pub DateTime<Utc>);

#[cfg(any(test, feature = "testing-support"))]
impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Install the global time source. Only the first call has an effect.
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Current instant from the global time source.
pub fn now() -> DateTime<Utc> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Parse an instant given on the command line.
///
/// Accepts RFC 3339 (`1992-04-12T00:00:00Z`, `1992-04-12T08:00:00+08:00`)
/// and offset-less `YYYY-MM-DD HH:MM[:SS]` / `YYYY-MM-DDTHH:MM[:SS]`, which
/// are read as UTC.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .with_context(|| {
            format!("Invalid instant '{input}'. Use RFC 3339 or YYYY-MM-DD HH:MM[:SS] (UTC)")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_is_frozen() {
        let instant = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let source = FixedTimeSource(instant);
        assert_eq!(source.now(), instant);
        assert_eq!(source.now(), source.now());
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
        assert_eq!(parse_instant("1992-04-12T00:00:00Z").unwrap(), expected);
        assert_eq!(parse_instant("1992-04-12T08:00:00+08:00").unwrap(), expected);
        assert_eq!(parse_instant("1992-04-12 00:00").unwrap(), expected);
        assert_eq!(parse_instant(" 1992-04-12T00:00:00 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        let err = parse_instant("yesterday").unwrap_err();
        assert!(err.to_string().contains("Invalid instant"));
    }
}

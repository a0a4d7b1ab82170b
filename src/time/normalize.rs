//! Birth date/time/zone to UTC instant.
//!
//! The date and time of birth are a civil timestamp in the birth timezone.
//! Normalization never fails: when the zone cannot be resolved the civil
//! timestamp is read as if it were already UTC. [`normalize`] reports which
//! path was taken so callers can warn; [`to_utc_instant`] returns only the
//! instant.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono::offset::LocalResult;

use super::zone::{ResolvedZone, TimezoneResolver};

/// How the timezone of a profile was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneResolution {
    Resolved(ResolvedZone),
    /// The zone was unknown; the civil timestamp was read as UTC.
    FallbackUtc,
}

/// A UTC instant together with how its zone was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInstant {
    pub instant: DateTime<Utc>,
    pub zone: ZoneResolution,
}

impl NormalizedInstant {
    pub fn is_fallback(&self) -> bool {
        self.zone == ZoneResolution::FallbackUtc
    }
}

/// UTC instant of a birth profile using the built-in aliases.
pub fn to_utc_instant(dob: NaiveDate, tob: NaiveTime, timezone: &str) -> DateTime<Utc> {
    normalize(dob, tob, timezone, &TimezoneResolver::default()).instant
}

/// UTC instant of a birth profile, with the zone resolution outcome.
pub fn normalize(
    dob: NaiveDate,
    tob: NaiveTime,
    timezone: &str,
    resolver: &TimezoneResolver,
) -> NormalizedInstant {
    let civil = dob.and_time(tob);

    let zoned = resolver.resolve(timezone).and_then(|zone| {
        let instant = match zone {
            ResolvedZone::Named(tz) => localize(&tz, civil),
            ResolvedZone::Fixed(offset) => localize(&offset, civil),
        };
        instant.map(|instant| NormalizedInstant {
            instant,
            zone: ZoneResolution::Resolved(zone),
        })
    });

    zoned.unwrap_or_else(|| NormalizedInstant {
        instant: Utc.from_utc_datetime(&civil),
        zone: ZoneResolution::FallbackUtc,
    })
}

/// Interpret a civil timestamp in `zone`.
///
/// Overlaps (clocks turned back) take the earlier instant. Gaps (clocks turned
/// forward) apply the offset in force before the transition, so 02:30 in a
/// 02:00→03:00 gap reads as 03:30 local time.
fn localize<Z: TimeZone>(zone: &Z, civil: NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&civil) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, latest) => {
            Some(earliest.min(latest).with_timezone(&Utc))
        }
        LocalResult::None => {
            let before_gap = civil.checked_sub_signed(Duration::days(1))?;
            let offset = zone
                .offset_from_local_datetime(&before_gap)
                .earliest()?
                .fix()
                .local_minus_utc();
            let utc = civil.checked_sub_signed(Duration::seconds(i64::from(offset)))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_singapore_birth() {
        let instant = to_utc_instant(date(1986, 3, 21), time(0, 0), "Asia/Singapore");
        assert_eq!(instant, utc(1986, 3, 20, 16, 0));
    }

    #[test]
    fn test_alias_matches_iana_name() {
        let via_alias = to_utc_instant(date(1986, 3, 21), time(0, 0), "SG");
        let via_iana = to_utc_instant(date(1986, 3, 21), time(0, 0), "Asia/Singapore");
        assert_eq!(via_alias, via_iana);
    }

    #[test]
    fn test_deterministic() {
        let a = to_utc_instant(date(1990, 7, 4), time(13, 45), "America/Chicago");
        let b = to_utc_instant(date(1990, 7, 4), time(13, 45), "America/Chicago");
        assert_eq!(a, b);
        assert_eq!(a, utc(1990, 7, 4, 18, 45));
    }

    #[test]
    fn test_unknown_zone_falls_back_to_utc() {
        let resolver = TimezoneResolver::default();
        let result = normalize(date(2001, 9, 9), time(1, 46), "Not/AZone", &resolver);
        assert!(result.is_fallback());
        assert_eq!(result.instant, utc(2001, 9, 9, 1, 46));

        let empty = normalize(date(2001, 9, 9), time(1, 46), "", &resolver);
        assert_eq!(empty.instant, result.instant);
    }

    #[test]
    fn test_multibyte_offset_garbage_falls_back_to_utc() {
        for zone in ["UTC+aéb", "+aéb", "GMT-é9"] {
            let instant = to_utc_instant(date(1986, 3, 21), time(0, 0), zone);
            assert_eq!(instant, utc(1986, 3, 21, 0, 0), "{zone:?}");
        }
    }

    #[test]
    fn test_fixed_offset_zone() {
        let resolver = TimezoneResolver::default();
        let result = normalize(date(2000, 1, 1), time(8, 0), "UTC+8", &resolver);
        assert!(!result.is_fallback());
        assert_eq!(result.instant, utc(2000, 1, 1, 0, 0));
    }

    #[test]
    fn test_dst_gap_moves_forward() {
        // 2021-03-14 02:30 does not exist in New York (EST -5 → EDT -4)
        let instant = to_utc_instant(date(2021, 3, 14), time(2, 30), "America/New_York");
        assert_eq!(instant, utc(2021, 3, 14, 7, 30));
    }

    #[test]
    fn test_dst_overlap_takes_earlier_instant() {
        // 2021-11-07 01:30 happens twice in New York; first time is EDT (-4)
        let instant = to_utc_instant(date(2021, 11, 7), time(1, 30), "America/New_York");
        assert_eq!(instant, utc(2021, 11, 7, 5, 30));
    }
}

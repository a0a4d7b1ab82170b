//! Tropical moon sign from the Moon's geocentric ecliptic longitude.
//!
//! The longitude source is a capability ([`MoonLongitude`]) so the sign logic
//! (normalize, divide by 30°, index the table) can be exercised without any
//! particular ephemeris. [`moon_sign`] uses [`MeeusMoon`].

use chrono::{DateTime, Utc};

use super::{ALL_SIGNS, MeeusMoon, ZodiacSign};
use crate::constants::DEGREES_PER_SIGN;

/// Source of the Moon's geocentric ecliptic longitude.
#[cfg_attr(test, mockall::automock)]
pub trait MoonLongitude {
    /// Tropical longitude of date at `instant`, in degrees.
    ///
    /// Implementations may return values outside [0, 360); callers normalize.
    fn geocentric_longitude(&self, instant: DateTime<Utc>) -> f64;
}

/// Normalize a longitude into [0, 360).
///
/// Correct for negative inputs; non-finite values map to 0.
pub fn normalize_longitude(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Sign containing an ecliptic longitude (30° per sign, Aries at 0°).
pub fn sign_for_longitude(deg: f64) -> ZodiacSign {
    let lon = normalize_longitude(deg);
    let idx = (lon / DEGREES_PER_SIGN).floor() as usize;
    ALL_SIGNS[idx.min(ALL_SIGNS.len() - 1)]
}

/// Position inside the containing sign, in [0, 30).
pub fn degree_in_sign(deg: f64) -> f64 {
    normalize_longitude(deg) % DEGREES_PER_SIGN
}

/// Moon sign at `instant` using the given longitude source.
pub fn moon_sign_with<M: MoonLongitude + ?Sized>(source: &M, instant: DateTime<Utc>) -> ZodiacSign {
    sign_for_longitude(source.geocentric_longitude(instant))
}

/// Moon sign at `instant` using the built-in lunar series.
pub fn moon_sign(instant: DateTime<Utc>) -> ZodiacSign {
    moon_sign_with(&MeeusMoon, instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(sign_for_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(sign_for_longitude(29.9), ZodiacSign::Aries);
        assert_eq!(sign_for_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(sign_for_longitude(180.0), ZodiacSign::Libra);
        assert_eq!(sign_for_longitude(359.9), ZodiacSign::Pisces);
    }

    #[test]
    fn test_negative_and_wrapped_longitudes() {
        assert_eq!(sign_for_longitude(-0.1), ZodiacSign::Pisces);
        assert_eq!(sign_for_longitude(-30.0), ZodiacSign::Pisces);
        assert_eq!(sign_for_longitude(-30.1), ZodiacSign::Aquarius);
        assert_eq!(sign_for_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(sign_for_longitude(725.0), ZodiacSign::Aries);
        assert_eq!(sign_for_longitude(-1e-18), ZodiacSign::Aries);
    }

    #[test]
    fn test_non_finite_longitude_is_total() {
        assert_eq!(sign_for_longitude(f64::NAN), ZodiacSign::Aries);
        assert_eq!(sign_for_longitude(f64::INFINITY), ZodiacSign::Aries);
    }

    #[test]
    fn test_degree_in_sign() {
        assert!((degree_in_sign(133.5) - 13.5).abs() < 1e-9);
        assert!((degree_in_sign(-10.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_moon_sign_uses_injected_source() {
        let instant = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let mut source = MockMoonLongitude::new();
        source
            .expect_geocentric_longitude()
            .withf(move |at| *at == instant)
            .times(1)
            .return_const(245.0);

        assert_eq!(moon_sign_with(&source, instant), ZodiacSign::Sagittarius);
    }

    #[test]
    fn test_moon_sign_default_source() {
        // Meeus example 47.a gives λ ≈ 133.17° on 1992-04-12.
        let instant = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
        assert_eq!(moon_sign(instant), ZodiacSign::Leo);
    }
}

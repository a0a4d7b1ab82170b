//! Assembly of the natal facts record.
//!
//! This is the caller side of the calculator: it feeds one profile through the
//! normalizer and the four resolvers and merges their labels into a single
//! serializable record.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::profile::BirthProfile;
use crate::time::{NormalizedInstant, TimezoneResolver, ZoneResolution, normalize};
use crate::zodiac::{
    ChineseAnimal, Element, MeeusMoon, MoonLongitude, Polarity, ZodiacSign, chinese_animal,
    chinese_element, sign_for_longitude, sun_sign_for_date,
};
use crate::zodiac::moon::normalize_longitude;

/// Facts derived from one birth profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZodiacFacts {
    pub sun_sign: ZodiacSign,
    /// `None` when the profile has no time of birth.
    pub moon_sign: Option<ZodiacSign>,
    /// Moon's tropical longitude in degrees [0, 360).
    pub moon_longitude: Option<f64>,
    pub chinese_animal: ChineseAnimal,
    pub chinese_element: Element,
    pub chinese_polarity: Polarity,
    pub utc_instant: Option<DateTime<Utc>>,
    /// Zone the birth time was read in, or `None` after a UTC fallback.
    pub timezone: Option<String>,
    /// `false` when the profile's zone could not be resolved.
    pub timezone_resolved: bool,
}

impl ZodiacFacts {
    /// Derive all facts using the built-in lunar series.
    pub fn assemble(profile: &BirthProfile, resolver: &TimezoneResolver) -> Self {
        Self::assemble_with(profile, resolver, &MeeusMoon)
    }

    /// Derive all facts with an explicit moon longitude source.
    pub fn assemble_with<M: MoonLongitude + ?Sized>(
        profile: &BirthProfile,
        resolver: &TimezoneResolver,
        moon: &M,
    ) -> Self {
        let year = profile.dob.year();
        let stem = chinese_element(year);

        let normalized: Option<NormalizedInstant> = profile
            .tob
            .map(|tob| normalize(profile.dob, tob, &profile.timezone, resolver));

        let moon_longitude = normalized
            .map(|n| normalize_longitude(moon.geocentric_longitude(n.instant)));

        // Without a birth time only the zone is resolved
        let zone = match normalized {
            Some(n) => n.zone,
            None => resolver
                .resolve(&profile.timezone)
                .map_or(ZoneResolution::FallbackUtc, ZoneResolution::Resolved),
        };

        Self {
            sun_sign: sun_sign_for_date(profile.dob),
            moon_sign: moon_longitude.map(sign_for_longitude),
            moon_longitude,
            chinese_animal: chinese_animal(year),
            chinese_element: stem.element,
            chinese_polarity: stem.polarity,
            utc_instant: normalized.map(|n| n.instant),
            timezone: match zone {
                ZoneResolution::Resolved(resolved) => Some(resolved.name()),
                ZoneResolution::FallbackUtc => None,
            },
            timezone_resolved: zone != ZoneResolution::FallbackUtc,
        }
    }
}

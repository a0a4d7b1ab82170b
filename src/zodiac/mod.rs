//! Zodiac fact resolvers.
//!
//! Each resolver is a pure function of its arguments:
//!
//! - [`sun`]: tropical sun sign from a calendar month/day rule
//! - [`moon`]: tropical moon sign from the Moon's geocentric ecliptic longitude
//! - [`ephemeris`]: the low-precision lunar series behind [`moon`]
//! - [`chinese`]: earthly branch (animal) and heavenly stem (element, polarity)
//!   of a Gregorian year
//!
//! None of them hold state or perform I/O, so they can be called from any
//! number of threads at once.

pub mod chinese;
pub mod ephemeris;
pub mod moon;
pub mod sun;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use chinese::{ChineseAnimal, Element, HeavenlyStem, Polarity, chinese_animal, chinese_element};
pub use ephemeris::MeeusMoon;
pub use moon::{MoonLongitude, degree_in_sign, moon_sign, moon_sign_with, sign_for_longitude};
pub use sun::{sun_sign, sun_sign_for_date};

/// The twelve tropical zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in ecliptic order (index 0 = Aries at 0°).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based position in [`ALL_SIGNS`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_table_order_matches_index() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(sign.index(), i);
        }
    }

    #[test]
    fn test_sign_serializes_as_label() {
        let json = serde_json::to_string(&ZodiacSign::Sagittarius).unwrap();
        assert_eq!(json, "\"Sagittarius\"");
        assert_eq!(ZodiacSign::Capricorn.to_string(), "Capricorn");
    }
}

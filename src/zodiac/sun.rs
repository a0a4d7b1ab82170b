//! Tropical sun sign from calendar date ranges.

use chrono::{Datelike, NaiveDate};

use super::ZodiacSign;

/// Sun sign for a calendar month (1-12) and day (1-31).
///
/// Each sign is the OR of two month/day conditions, inclusive of the date the
/// sign starts on. Day-of-month is not checked against the month length, and
/// any pair that matches no rule (month 13, month 0, ...) falls through to
/// Pisces. Callers rely on that fall-through, so it must not be tightened.
pub fn sun_sign(month: u32, day: u32) -> ZodiacSign {
    let starts_or_ends = |start_month: u32, start_day: u32, end_month: u32, end_day: u32| {
        (month == start_month && day >= start_day) || (month == end_month && day <= end_day)
    };

    if starts_or_ends(3, 21, 4, 19) {
        ZodiacSign::Aries
    } else if starts_or_ends(4, 20, 5, 20) {
        ZodiacSign::Taurus
    } else if starts_or_ends(5, 21, 6, 20) {
        ZodiacSign::Gemini
    } else if starts_or_ends(6, 21, 7, 22) {
        ZodiacSign::Cancer
    } else if starts_or_ends(7, 23, 8, 22) {
        ZodiacSign::Leo
    } else if starts_or_ends(8, 23, 9, 22) {
        ZodiacSign::Virgo
    } else if starts_or_ends(9, 23, 10, 22) {
        ZodiacSign::Libra
    } else if starts_or_ends(10, 23, 11, 21) {
        ZodiacSign::Scorpio
    } else if starts_or_ends(11, 22, 12, 21) {
        ZodiacSign::Sagittarius
    } else if starts_or_ends(12, 22, 1, 19) {
        ZodiacSign::Capricorn
    } else if starts_or_ends(1, 20, 2, 18) {
        ZodiacSign::Aquarius
    } else {
        ZodiacSign::Pisces
    }
}

/// Sun sign for a date of birth.
pub fn sun_sign_for_date(date: NaiveDate) -> ZodiacSign {
    sun_sign(date.month(), date.day())
}

//! Low-precision geocentric lunar longitude.
//!
//! Truncated ELP-2000/82 series as tabulated in Meeus, *Astronomical
//! Algorithms* (2nd ed.), Chapter 47: 60 periodic terms in longitude plus the
//! three additive terms for Venus, Jupiter and the flattening of the Earth.
//! Longitudes are referred to the true equinox of date by adding the
//! low-precision nutation in longitude from Chapter 22.
//!
//! Accuracy is about 10 arcseconds against the full theory, far below the
//! 30° width of a sign. Only instants within a degree of a sign boundary are
//! sensitive at all, and there the error budget is still two orders of
//! magnitude inside a degree.

use chrono::{DateTime, Datelike, Utc};

use super::moon::{MoonLongitude, normalize_longitude};
use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, JULIAN_DAY_J2000, JULIAN_DAY_UNIX_EPOCH, SECONDS_PER_DAY,
};

/// Built-in [`MoonLongitude`] source using the Meeus Chapter 47 series.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusMoon;

impl MoonLongitude for MeeusMoon {
    fn geocentric_longitude(&self, instant: DateTime<Utc>) -> f64 {
        let jde = julian_day(instant) + delta_t_seconds(decimal_year(instant)) / SECONDS_PER_DAY;
        Self::longitude_at_jde(jde)
    }
}

impl MeeusMoon {
    /// Apparent geocentric longitude of the Moon in degrees [0, 360) at a
    /// Julian Ephemeris Day (TT).
    pub fn longitude_at_jde(jde: f64) -> f64 {
        let t = (jde - JULIAN_DAY_J2000) / DAYS_PER_JULIAN_CENTURY;
        normalize_longitude(mean_equinox_longitude(t) + nutation_in_longitude_deg(t))
    }
}

/// Julian Day (UT) of an instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    seconds / SECONDS_PER_DAY + JULIAN_DAY_UNIX_EPOCH
}

fn decimal_year(instant: DateTime<Utc>) -> f64 {
    f64::from(instant.year()) + (f64::from(instant.month()) - 0.5) / 12.0
}

/// ΔT = TT − UT in seconds for a decimal year.
///
/// Polynomial fits of Espenak & Meeus (2006) for 1800-2150, the long-term
/// parabola elsewhere.
pub fn delta_t_seconds(year: f64) -> f64 {
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };

    match year {
        y if (1800.0..1860.0).contains(&y) => {
            let t = y - 1800.0;
            13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
                - 0.00037436 * t.powi(4)
                + 0.0000121272 * t.powi(5)
                - 0.0000001699 * t.powi(6)
                + 0.000000000875 * t.powi(7)
        }
        y if (1860.0..1900.0).contains(&y) => {
            let t = y - 1860.0;
            7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
                - 0.0004473624 * t.powi(4)
                + t.powi(5) / 233174.0
        }
        y if (1900.0..1920.0).contains(&y) => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                - 0.000197 * t.powi(4)
        }
        y if (1920.0..1941.0).contains(&y) => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
        }
        y if (1941.0..1961.0).contains(&y) => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if (1961.0..1986.0).contains(&y) => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if (1986.0..2005.0).contains(&y) => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t.powi(2)
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        y if (2005.0..2050.0).contains(&y) => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        y if (2050.0..2150.0).contains(&y) => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

// Periodic terms for Σl, Meeus Table 47.A.
// [D, M, M', F, coefficient in 1e-6 degrees]
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 60] = [
    [0.0,  0.0,  1.0,  0.0,  6_288_774.0],
    [2.0,  0.0, -1.0,  0.0,  1_274_027.0],
    [2.0,  0.0,  0.0,  0.0,    658_314.0],
    [0.0,  0.0,  2.0,  0.0,    213_618.0],
    [0.0,  1.0,  0.0,  0.0,   -185_116.0],
    [0.0,  0.0,  0.0,  2.0,   -114_332.0],
    [2.0,  0.0, -2.0,  0.0,     58_793.0],
    [2.0, -1.0, -1.0,  0.0,     57_066.0],
    [2.0,  0.0,  1.0,  0.0,     53_322.0],
    [2.0, -1.0,  0.0,  0.0,     45_758.0],
    [0.0,  1.0, -1.0,  0.0,    -40_923.0],
    [1.0,  0.0,  0.0,  0.0,    -34_720.0],
    [0.0,  1.0,  1.0,  0.0,    -30_383.0],
    [2.0,  0.0,  0.0, -2.0,     15_327.0],
    [0.0,  0.0,  1.0,  2.0,    -12_528.0],
    [0.0,  0.0,  1.0, -2.0,     10_980.0],
    [4.0,  0.0, -1.0,  0.0,     10_675.0],
    [0.0,  0.0,  3.0,  0.0,     10_034.0],
    [4.0,  0.0, -2.0,  0.0,      8_548.0],
    [2.0,  1.0, -1.0,  0.0,     -7_888.0],
    [2.0,  1.0,  0.0,  0.0,     -6_766.0],
    [1.0,  0.0, -1.0,  0.0,     -5_163.0],
    [1.0,  1.0,  0.0,  0.0,      4_987.0],
    [2.0, -1.0,  1.0,  0.0,      4_036.0],
    [2.0,  0.0,  2.0,  0.0,      3_994.0],
    [4.0,  0.0,  0.0,  0.0,      3_861.0],
    [2.0,  0.0, -3.0,  0.0,      3_665.0],
    [0.0,  1.0, -2.0,  0.0,     -2_689.0],
    [2.0,  0.0, -1.0,  2.0,     -2_602.0],
    [2.0, -1.0, -2.0,  0.0,      2_390.0],
    [1.0,  0.0,  1.0,  0.0,     -2_348.0],
    [2.0, -2.0,  0.0,  0.0,      2_236.0],
    [0.0,  1.0,  2.0,  0.0,     -2_120.0],
    [0.0,  2.0,  0.0,  0.0,     -2_069.0],
    [2.0, -2.0, -1.0,  0.0,      2_048.0],
    [2.0,  0.0,  1.0, -2.0,     -1_773.0],
    [2.0,  0.0,  0.0,  2.0,     -1_595.0],
    [4.0, -1.0, -1.0,  0.0,      1_215.0],
    [0.0,  0.0,  2.0,  2.0,     -1_110.0],
    [3.0,  0.0, -1.0,  0.0,       -892.0],
    [2.0,  1.0,  1.0,  0.0,       -810.0],
    [4.0, -1.0, -2.0,  0.0,        759.0],
    [0.0,  2.0, -1.0,  0.0,       -713.0],
    [2.0,  2.0, -1.0,  0.0,       -700.0],
    [2.0,  1.0, -2.0,  0.0,        691.0],
    [2.0, -1.0,  0.0, -2.0,        596.0],
    [4.0,  0.0,  1.0,  0.0,        549.0],
    [0.0,  0.0,  4.0,  0.0,        537.0],
    [4.0, -1.0,  0.0,  0.0,        520.0],
    [1.0,  0.0, -2.0,  0.0,       -487.0],
    [2.0,  1.0,  0.0, -2.0,       -399.0],
    [0.0,  0.0,  2.0, -2.0,       -381.0],
    [1.0,  1.0,  1.0,  0.0,        351.0],
    [3.0,  0.0, -2.0,  0.0,       -340.0],
    [4.0,  0.0, -3.0,  0.0,        330.0],
    [2.0, -1.0,  2.0,  0.0,        327.0],
    [0.0,  2.0,  1.0,  0.0,       -323.0],
    [1.0,  1.0, -1.0,  0.0,        299.0],
    [2.0,  0.0,  3.0,  0.0,        294.0],
    [2.0,  0.0, -1.0, -2.0,          0.0],
];

/// Geometric longitude referred to the mean equinox of date, degrees
/// (not normalized). `t` = Julian centuries of TT since J2000.0.
fn mean_equinox_longitude(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Moon's mean longitude
    let l_prime =
        218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0 - t4 / 65_194_000.0;
    // Mean elongation
    let d = 297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    // Sun's mean anomaly
    let m = 357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    // Moon's mean anomaly
    let m_prime =
        134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0 - t4 / 14_712_000.0;
    // Argument of latitude
    let f = 93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;

    // Eccentricity of Earth's orbit, scales terms containing M
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let (d, m, m_prime, f) = (
        d.to_radians(),
        m.to_radians(),
        m_prime.to_radians(),
        f.to_radians(),
    );

    let mut sum_l = 0.0_f64;
    for term in &LONGITUDE_TERMS {
        let arg = term[0] * d + term[1] * m + term[2] * m_prime + term[3] * f;
        let scale = match term[1].abs() as i32 {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_l += term[4] * scale * arg.sin();
    }

    sum_l += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (l_prime - f.to_degrees()).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    l_prime + sum_l / 1_000_000.0
}

/// Nutation in longitude Δψ in degrees, accurate to about 0.5".
fn nutation_in_longitude_deg(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t + 0.0020708 * t * t + t.powi(3) / 450_000.0)
        .to_radians();
    let sun_mean = (280.4665 + 36_000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481_267.8813 * t).to_radians();

    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin()
        - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_julian_day_epochs() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(j2000) - JULIAN_DAY_J2000).abs() < 1e-9);

        let unix = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!((julian_day(unix) - JULIAN_DAY_UNIX_EPOCH).abs() < 1e-9);
    }

    #[test]
    fn test_meeus_example_47a() {
        // 1992 April 12, 0h TD: mean-equinox λ = 133.162655°, Δψ = +0.004610°
        let jde = 2_448_724.5;
        let t = (jde - JULIAN_DAY_J2000) / DAYS_PER_JULIAN_CENTURY;

        let geometric = normalize_longitude(mean_equinox_longitude(t));
        assert!(
            (geometric - 133.162655).abs() < 0.001,
            "geometric longitude {geometric}"
        );

        let apparent = MeeusMoon::longitude_at_jde(jde);
        assert!((apparent - 133.167265).abs() < 0.002, "apparent {apparent}");
    }

    #[test]
    fn test_nutation_example_22a() {
        // 1987 April 10, 0h TD: Δψ = -3.788"
        let t = (2_446_895.5 - JULIAN_DAY_J2000) / DAYS_PER_JULIAN_CENTURY;
        let arcsec = nutation_in_longitude_deg(t) * 3600.0;
        assert!((arcsec + 3.788).abs() < 0.5, "Δψ {arcsec}\"");
    }

    #[test]
    fn test_delta_t_plausible_range() {
        assert!((delta_t_seconds(1986.0) - 54.9).abs() < 1.5);
        assert!((delta_t_seconds(2000.0) - 63.8).abs() < 1.0);
        assert!((delta_t_seconds(2020.0) - 71.6).abs() < 4.0);
        assert!(delta_t_seconds(1700.0).is_finite());
    }

    #[test]
    fn test_longitude_advances_about_13_degrees_per_day() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let next = start + chrono::Duration::days(1);
        let a = MeeusMoon.geocentric_longitude(start);
        let b = MeeusMoon.geocentric_longitude(next);
        let motion = normalize_longitude(b - a);
        assert!((11.5..15.5).contains(&motion), "daily motion {motion}");
    }
}

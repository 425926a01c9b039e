//! Geocentric position of the Sun.
//!
//! Two theories are provided. [`almanac_position`] reverses the VSOP87
//! heliocentric Earth series and applies the FK5, nutation and aberration
//! corrections of Meeus chapter 25. [`truncated_position`] uses the mean
//! longitude plus the equation of centre only.

use crate::ephemeris::series::power_series;
use crate::ephemeris::types::{normalize_degrees, EclipticPosition};
use crate::ephemeris::vsop87::{
    EARTH_B0, EARTH_B1, EARTH_L0, EARTH_L1, EARTH_L2, EARTH_L3, EARTH_L4, EARTH_R0, EARTH_R1,
    EARTH_R2,
};
use crate::time::{julian_centuries, julian_millennia};

const SERIES_SCALE: f64 = 1e8;
const ARCSEC: f64 = 1.0 / 3600.0;
/// Constant of aberration in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Longitude of the Moon's mean ascending node in degrees (Meeus 22).
pub(crate) fn mean_node_longitude(t: f64) -> f64 {
    125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0
}

/// Apparent geocentric position of the Sun from the VSOP87 Earth series.
pub fn almanac_position(jd: f64) -> EclipticPosition {
    let tau = julian_millennia(jd);
    let t = julian_centuries(jd);

    let l = power_series(
        &[&EARTH_L0, &EARTH_L1, &EARTH_L2, &EARTH_L3, &EARTH_L4],
        tau,
    ) / SERIES_SCALE;
    let b = power_series(&[&EARTH_B0, &EARTH_B1], tau) / SERIES_SCALE;
    let r = power_series(&[&EARTH_R0, &EARTH_R1, &EARTH_R2], tau) / SERIES_SCALE;

    // Heliocentric Earth -> geocentric Sun
    let mut longitude = normalize_degrees(l.to_degrees() + 180.0);
    let mut latitude = -b.to_degrees();

    // FK5 frame correction
    let l_prime = (longitude - 1.397 * t - 0.00031 * t * t).to_radians();
    longitude -= 0.09033 * ARCSEC;
    latitude += 0.03916 * ARCSEC * (l_prime.cos() - l_prime.sin());

    // Nutation in longitude, dominant term only
    let omega = mean_node_longitude(t).to_radians();
    longitude -= 0.00478 * omega.sin();

    longitude -= ABERRATION_ARCSEC * ARCSEC / r;

    EclipticPosition {
        longitude: normalize_degrees(longitude),
        latitude,
        distance: r,
    }
}

/// Sun from its mean longitude and the equation of centre (Meeus 25, low accuracy).
pub fn truncated_position(jd: f64) -> EclipticPosition {
    let t = julian_centuries(jd);

    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_anomaly = m + c.to_radians();
    let distance = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    EclipticPosition {
        longitude: normalize_degrees(l0 + c),
        latitude: 0.0,
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::J2000_JD;

    #[test]
    fn test_meeus_example_25b() {
        // 1992 October 13.0 TD: apparent longitude 199°.90601 (Meeus 25.b)
        let sun = almanac_position(2_448_908.5);
        assert!((sun.longitude - 199.906).abs() < 0.005, "sun = {}", sun.longitude);
        assert!((sun.distance - 0.99760775).abs() < 1e-4);
        assert!(sun.latitude.abs() < 0.001);
    }

    #[test]
    fn test_meeus_example_25a_truncated() {
        // 1992 October 13.0 TD: true longitude 199°.90988 (Meeus 25.a)
        let sun = truncated_position(2_448_908.5);
        assert!((sun.longitude - 199.90988).abs() < 0.01, "sun = {}", sun.longitude);
        assert!((sun.distance - 0.99766).abs() < 1e-3);
    }

    #[test]
    fn test_tiers_agree_at_j2000() {
        let precise = almanac_position(J2000_JD);
        let rough = truncated_position(J2000_JD);
        assert!((precise.longitude - 280.37).abs() < 0.05);
        assert!((precise.longitude - rough.longitude).abs() < 0.03);
    }
}

//! Sidereal time, the chart angles and house cusps.

use serde::{Deserialize, Serialize};

use crate::ephemeris::types::{normalize_degrees, GeoLocation};
use crate::time::{julian_centuries, J2000_JD};

/// Index of the Ascendant in [`HouseSystem::cusps`]
pub const ASCENDANT: usize = 0;
/// Index of the Imum Coeli
pub const IMUM_COELI: usize = 3;
/// Index of the Descendant
pub const DESCENDANT: usize = 6;
/// Index of the Midheaven
pub const MIDHEAVEN: usize = 9;

/// How intermediate cusps are placed between the angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseMethod {
    /// Each quadrant arc between two angles is split into three equal
    /// ecliptic arcs. Approximates Placidus, which trisects the diurnal and
    /// nocturnal semi-arcs in time rather than in longitude.
    #[default]
    PlacidusEqualThirds,
}

/// Twelve cusp longitudes; index 0 is the Ascendant, 9 the Midheaven.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseSystem {
    pub method: HouseMethod,
    pub cusps: [f64; 12],
}

impl HouseSystem {
    pub fn ascendant(&self) -> f64 {
        self.cusps[ASCENDANT]
    }

    pub fn midheaven(&self) -> f64 {
        self.cusps[MIDHEAVEN]
    }

    pub fn descendant(&self) -> f64 {
        self.cusps[DESCENDANT]
    }

    pub fn imum_coeli(&self) -> f64 {
        self.cusps[IMUM_COELI]
    }

    /// House (1-12) containing an ecliptic longitude.
    pub fn house_of(&self, longitude: f64) -> u8 {
        (0..12)
            .find(|&i| {
                let start = self.cusps[i];
                let end = self.cusps[(i + 1) % 12];
                normalize_degrees(longitude - start) < normalize_degrees(end - start)
            })
            .map(|i| i as u8 + 1)
            // Unreachable unless cusps collapse; the first house owns the seam.
            .unwrap_or(1)
    }
}

/// Greenwich mean sidereal time in degrees (Meeus 12.4).
pub fn greenwich_mean_sidereal_time(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    normalize_degrees(
        280.46061837 + 360.98564736629 * (jd - J2000_JD) + 0.000387933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Local sidereal time for an east-positive longitude.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(jd) + longitude)
}

/// Mean obliquity of the ecliptic in degrees (linear term only).
pub fn mean_obliquity(jd: f64) -> f64 {
    23.439291 - 0.0130042 * julian_centuries(jd)
}

/// Ecliptic longitude rising on the eastern horizon.
///
/// `atan2(-cos RAMC, sin RAMC·cos ε + tan φ·sin ε)` alone lands on the
/// setting point; the half-turn selects the rising one.
pub fn ascendant(lst: f64, obliquity: f64, latitude: f64) -> f64 {
    let ramc = lst.to_radians();
    let eps = obliquity.to_radians();
    let phi = latitude.to_radians();

    let y = -ramc.cos();
    let x = ramc.sin() * eps.cos() + phi.tan() * eps.sin();
    normalize_degrees(y.atan2(x).to_degrees() + 180.0)
}

/// Ecliptic longitude culminating on the meridian.
pub fn midheaven(lst: f64, obliquity: f64) -> f64 {
    let ramc = lst.to_radians();
    let eps = obliquity.to_radians();
    normalize_degrees(ramc.sin().atan2(ramc.cos() * eps.cos()).to_degrees())
}

fn fill_quadrant(cusps: &mut [f64; 12], from: usize, to: usize) {
    let start = cusps[from];
    let arc = normalize_degrees(cusps[to] - start);
    cusps[from + 1] = normalize_degrees(start + arc / 3.0);
    cusps[from + 2] = normalize_degrees(start + 2.0 * arc / 3.0);
}

pub fn compute_houses(jd: f64, location: &GeoLocation) -> HouseSystem {
    let lst = local_sidereal_time(jd, location.lon);
    let eps = mean_obliquity(jd);

    let mc = midheaven(lst, eps);
    let mut asc = ascendant(lst, eps, location.lat);
    // Inside the polar circles the rising ecliptic point can fall west of the
    // Midheaven; take the opposite point so the quadrants stay ordered.
    if normalize_degrees(asc - mc) >= 180.0 {
        asc = normalize_degrees(asc + 180.0);
    }

    let mut cusps = [0.0; 12];
    cusps[ASCENDANT] = asc;
    cusps[IMUM_COELI] = normalize_degrees(mc + 180.0);
    cusps[DESCENDANT] = normalize_degrees(asc + 180.0);
    cusps[MIDHEAVEN] = mc;

    fill_quadrant(&mut cusps, ASCENDANT, IMUM_COELI);
    fill_quadrant(&mut cusps, IMUM_COELI, DESCENDANT);
    fill_quadrant(&mut cusps, DESCENDANT, MIDHEAVEN);
    // 10 -> 11 -> 12 -> 1 wraps back to the Ascendant
    let arc = normalize_degrees(asc - mc);
    cusps[10] = normalize_degrees(mc + arc / 3.0);
    cusps[11] = normalize_degrees(mc + 2.0 * arc / 3.0);

    HouseSystem {
        method: HouseMethod::PlacidusEqualThirds,
        cusps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBLIQUITY: f64 = 23.44;

    #[test]
    fn test_gmst_meeus_example_12a() {
        // 1987 April 10, 0h UT: 13h10m46.3668s = 197.693195°
        let gmst = greenwich_mean_sidereal_time(2_446_895.5);
        assert!((gmst - 197.693195).abs() < 1e-4, "gmst = {gmst}");
    }

    #[test]
    fn test_equator_at_aries_meridian() {
        assert!((midheaven(0.0, OBLIQUITY) - 0.0).abs() < 1e-9);
        assert!((ascendant(0.0, OBLIQUITY, 0.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_equator_at_cancer_meridian() {
        assert!((midheaven(90.0, OBLIQUITY) - 90.0).abs() < 1e-9);
        assert!((ascendant(90.0, OBLIQUITY, 0.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascendant_east_of_midheaven() {
        for lst in (0..360).step_by(15) {
            for lat in [-50.0, -20.0, 0.0, 35.0, 51.5, 60.0] {
                let lst = lst as f64;
                let ahead = normalize_degrees(ascendant(lst, OBLIQUITY, lat) - midheaven(lst, OBLIQUITY));
                assert!(ahead > 0.0 && ahead < 180.0, "lst = {lst}, lat = {lat}");
            }
        }
    }

    #[test]
    fn test_cusps_partition_the_circle() {
        let houses = compute_houses(2_451_545.0, &GeoLocation { lat: 40.7, lon: -74.0 });
        let total: f64 = (0..12)
            .map(|i| normalize_degrees(houses.cusps[(i + 1) % 12] - houses.cusps[i]))
            .sum();
        assert!((total - 360.0).abs() < 1e-6);
        assert!((houses.descendant() - normalize_degrees(houses.ascendant() + 180.0)).abs() < 1e-9);
        assert!((houses.imum_coeli() - normalize_degrees(houses.midheaven() + 180.0)).abs() < 1e-9);
    }

    #[test]
    fn test_polar_cusps_stay_ordered() {
        for lat in [66.0, 68.0, 70.0, 75.0, -70.0] {
            for step in 0..96 {
                let jd = 2_451_545.0 + step as f64 / 96.0;
                let houses = compute_houses(jd, &GeoLocation { lat, lon: 18.9 });
                let spans: Vec<f64> = (0..12)
                    .map(|i| normalize_degrees(houses.cusps[(i + 1) % 12] - houses.cusps[i]))
                    .collect();
                let total: f64 = spans.iter().sum();
                assert!((total - 360.0).abs() < 1e-6, "lat = {lat}, step = {step}, cusps = {:?}", houses.cusps);
                assert!(spans.iter().all(|&span| span < 180.0), "lat = {lat}, step = {step}");
                assert_eq!(houses.house_of(houses.midheaven()), 10);
            }
        }
    }

    #[test]
    fn test_house_of_cusps_and_midpoints() {
        let houses = compute_houses(2_451_545.0, &GeoLocation { lat: 40.7, lon: -74.0 });
        assert_eq!(houses.house_of(houses.ascendant()), 1);
        assert_eq!(houses.house_of(houses.midheaven()), 10);
        for i in 0..12 {
            let start = houses.cusps[i];
            let span = normalize_degrees(houses.cusps[(i + 1) % 12] - start);
            let mid = normalize_degrees(start + span / 2.0);
            assert_eq!(houses.house_of(mid), i as u8 + 1);
        }
    }
}

//! Planet positions from Keplerian orbital elements.
//!
//! Elements are the JPL "approximate positions of the planets" set valid for
//! 1800-2050 (mean elements at J2000 plus linear rates per Julian century).
//! Each body is propagated on its osculating ellipse, rotated into the
//! heliocentric ecliptic frame and referred to the Earth.

use log::warn;

use crate::ephemeris::types::{normalize_degrees, Body, EclipticPosition};
use crate::time::julian_centuries;

const KEPLER_TOLERANCE: f64 = 1e-10;
const KEPLER_MAX_ITERATIONS: u32 = 20;

/// Mean orbital elements at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (AU)
    pub a: f64,
    pub e: f64,
    /// Inclination (deg)
    pub inclination: f64,
    /// Mean longitude (deg)
    pub mean_longitude: f64,
    /// Longitude of perihelion (deg)
    pub perihelion: f64,
    /// Longitude of the ascending node (deg)
    pub node: f64,
    pub a_rate: f64,
    pub e_rate: f64,
    pub inclination_rate: f64,
    pub mean_longitude_rate: f64,
    pub perihelion_rate: f64,
    pub node_rate: f64,
}

/// Elements evaluated at a given instant, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ElementsAt {
    a: f64,
    e: f64,
    inclination: f64,
    mean_longitude: f64,
    perihelion: f64,
    node: f64,
}

impl OrbitalElements {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        a: f64,
        e: f64,
        inclination: f64,
        mean_longitude: f64,
        perihelion: f64,
        node: f64,
        a_rate: f64,
        e_rate: f64,
        inclination_rate: f64,
        mean_longitude_rate: f64,
        perihelion_rate: f64,
        node_rate: f64,
    ) -> Self {
        Self {
            a,
            e,
            inclination,
            mean_longitude,
            perihelion,
            node,
            a_rate,
            e_rate,
            inclination_rate,
            mean_longitude_rate,
            perihelion_rate,
            node_rate,
        }
    }

    fn at(&self, t: f64) -> ElementsAt {
        ElementsAt {
            a: self.a + self.a_rate * t,
            e: self.e + self.e_rate * t,
            inclination: self.inclination + self.inclination_rate * t,
            mean_longitude: normalize_degrees(self.mean_longitude + self.mean_longitude_rate * t),
            perihelion: normalize_degrees(self.perihelion + self.perihelion_rate * t),
            node: normalize_degrees(self.node + self.node_rate * t),
        }
    }
}

#[rustfmt::skip]
pub const MERCURY: OrbitalElements = OrbitalElements::new(
    0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593,
    0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081,
);
#[rustfmt::skip]
pub const VENUS: OrbitalElements = OrbitalElements::new(
    0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255,
    0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418,
);
#[rustfmt::skip]
pub const EARTH: OrbitalElements = OrbitalElements::new(
    1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0,
    0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0,
);
#[rustfmt::skip]
pub const MARS: OrbitalElements = OrbitalElements::new(
    1.52371034, 0.09339410, 1.84969142, 355.44656895, 336.04084219, 49.55953891,
    0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343,
);
#[rustfmt::skip]
pub const JUPITER: OrbitalElements = OrbitalElements::new(
    5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909,
    -0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106,
);
#[rustfmt::skip]
pub const SATURN: OrbitalElements = OrbitalElements::new(
    9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448,
    -0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794,
);
#[rustfmt::skip]
pub const URANUS: OrbitalElements = OrbitalElements::new(
    19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503,
    -0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589,
);
#[rustfmt::skip]
pub const NEPTUNE: OrbitalElements = OrbitalElements::new(
    30.06992276, 0.00859048, 1.77004347, 304.87997031, 44.96476227, 131.78422574,
    0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664,
);
#[rustfmt::skip]
pub const PLUTO: OrbitalElements = OrbitalElements::new(
    39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684,
    -0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482,
);

/// Which theory places a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theory {
    Sun,
    Moon,
    Orbit(&'static OrbitalElements),
}

pub fn theory_for(body: Body) -> Theory {
    match body {
        Body::Sun => Theory::Sun,
        Body::Moon => Theory::Moon,
        Body::Mercury => Theory::Orbit(&MERCURY),
        Body::Venus => Theory::Orbit(&VENUS),
        Body::Mars => Theory::Orbit(&MARS),
        Body::Jupiter => Theory::Orbit(&JUPITER),
        Body::Saturn => Theory::Orbit(&SATURN),
        Body::Uranus => Theory::Orbit(&URANUS),
        Body::Neptune => Theory::Orbit(&NEPTUNE),
        Body::Pluto => Theory::Orbit(&PLUTO),
    }
}

/// Result of solving Kepler's equation `E - e·sin E = M`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians
    pub eccentric_anomaly: f64,
    pub iterations: u32,
    pub converged: bool,
}

/// Newton-Raphson solve seeded at `M`.
///
/// Stops when the correction drops below 1e-10 rad or after 20 iterations;
/// in the latter case the last estimate is returned with `converged = false`.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let mut e_anom = mean_anomaly;
    for iteration in 1..=KEPLER_MAX_ITERATIONS {
        let delta = (mean_anomaly - e_anom + eccentricity * e_anom.sin())
            / (1.0 - eccentricity * e_anom.cos());
        e_anom += delta;
        if delta.abs() < KEPLER_TOLERANCE {
            return KeplerSolution {
                eccentric_anomaly: e_anom,
                iterations: iteration,
                converged: true,
            };
        }
    }

    warn!(
        "Kepler solver did not converge (M = {mean_anomaly}, e = {eccentricity}); using last estimate"
    );
    KeplerSolution {
        eccentric_anomaly: e_anom,
        iterations: KEPLER_MAX_ITERATIONS,
        converged: false,
    }
}

/// True anomaly (radians) and radius vector for elements at an instant.
fn orbit_point(el: &ElementsAt) -> (f64, f64) {
    let mean_anomaly = (el.mean_longitude - el.perihelion).to_radians();
    let e_anom = solve_kepler(mean_anomaly, el.e).eccentric_anomaly;
    let nu = 2.0
        * f64::atan2(
            (1.0 + el.e).sqrt() * (e_anom / 2.0).sin(),
            (1.0 - el.e).sqrt() * (e_anom / 2.0).cos(),
        );
    let r = el.a * (1.0 - el.e * e_anom.cos());
    (nu, r)
}

/// Heliocentric rectangular ecliptic coordinates (AU).
pub fn heliocentric_xyz(elements: &OrbitalElements, jd: f64) -> [f64; 3] {
    let el = elements.at(julian_centuries(jd));
    let (nu, r) = orbit_point(&el);

    let node = el.node.to_radians();
    let incl = el.inclination.to_radians();
    // argument of latitude
    let u = nu + (el.perihelion - el.node).to_radians();

    [
        r * (node.cos() * u.cos() - node.sin() * u.sin() * incl.cos()),
        r * (node.sin() * u.cos() + node.cos() * u.sin() * incl.cos()),
        r * u.sin() * incl.sin(),
    ]
}

/// Earth's heliocentric position, taken in the ecliptic plane.
fn earth_xy(jd: f64) -> [f64; 2] {
    let el = EARTH.at(julian_centuries(jd));
    let (nu, r) = orbit_point(&el);
    let lon = nu + el.perihelion.to_radians();
    [r * lon.cos(), r * lon.sin()]
}

/// Geocentric ecliptic position of a planet. Distance is in AU.
pub fn geocentric_position(elements: &OrbitalElements, jd: f64) -> EclipticPosition {
    let [xh, yh, zh] = heliocentric_xyz(elements, jd);
    let [xe, ye] = earth_xy(jd);

    let x = xh - xe;
    let y = yh - ye;
    let z = zh;
    let planar = x.hypot(y);

    EclipticPosition {
        longitude: normalize_degrees(y.atan2(x).to_degrees()),
        latitude: z.atan2(planar).to_degrees(),
        distance: (planar * planar + z * z).sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_orbit_is_identity() {
        let solution = solve_kepler(1.234, 0.0);
        assert!(solution.converged);
        assert!((solution.eccentric_anomaly - 1.234).abs() < 1e-12);
    }

    #[test]
    fn test_kepler_residual_small() {
        for &e in &[0.0067, 0.0934, 0.2056, 0.2488] {
            for step in 0..36 {
                let m = (step as f64 * 10.0).to_radians();
                let solution = solve_kepler(m, e);
                assert!(solution.converged);
                let residual = solution.eccentric_anomaly - e * solution.eccentric_anomaly.sin() - m;
                assert!(residual.abs() < 1e-9, "e = {e}, M = {m}, residual = {residual}");
            }
        }
    }

    #[test]
    fn test_kepler_reports_non_convergence() {
        // Near-parabolic orbits at tiny M do not settle in 20 steps from this seed.
        let solution = solve_kepler(1e-3, 0.999_999);
        assert!(solution.iterations <= KEPLER_MAX_ITERATIONS);
        if !solution.converged {
            assert_eq!(solution.iterations, KEPLER_MAX_ITERATIONS);
        }
        assert!(solution.eccentric_anomaly.is_finite());
    }

    #[test]
    fn test_venus_meeus_example_33a() {
        // 1992 December 20.0 TD, apparent longitude 313°.08 (Meeus 33.a)
        let venus = geocentric_position(&VENUS, 2_448_976.5);
        assert!((venus.longitude - 313.08).abs() < 0.2, "venus = {}", venus.longitude);
        assert!((venus.distance - 0.911).abs() < 0.01);
    }

    #[test]
    fn test_earth_radius_vector_near_one_au() {
        let [x, y] = earth_xy(2_451_545.0);
        let r = x.hypot(y);
        assert!((r - 0.983).abs() < 0.01, "r = {r}");
    }

    #[test]
    fn test_sun_and_moon_have_no_elements() {
        assert_eq!(theory_for(Body::Sun), Theory::Sun);
        assert_eq!(theory_for(Body::Moon), Theory::Moon);
        assert_eq!(theory_for(Body::Mars), Theory::Orbit(&MARS));
        assert_eq!(theory_for(Body::Pluto), Theory::Orbit(&PLUTO));
    }
}

//! Chiron on a fixed osculating orbit.
//!
//! The elements are osculating values near J2000 with only the mean motion
//! propagated (perihelion 1996 February 14, period about 50.4 years).
//! Saturn and Uranus perturb the real orbit, so the position drifts by a
//! degree or more several decades away from the epoch.

use crate::ephemeris::model::unwrap_delta;
use crate::ephemeris::planets::{geocentric_position, OrbitalElements};
use crate::ephemeris::types::{BodyMotion, ChironPosition};

#[rustfmt::skip]
pub const CHIRON: OrbitalElements = OrbitalElements::new(
    13.65, 0.383, 6.935, 216.39, 188.69, 209.38,
    0.0, 0.0, 0.0, 713.86, 0.0, 0.0,
);

pub fn chiron_position(jd: f64) -> ChironPosition {
    let before = geocentric_position(&CHIRON, jd - 1.0).longitude;
    let after = geocentric_position(&CHIRON, jd + 1.0).longitude;
    let speed = unwrap_delta(before, after) / 2.0;

    ChironPosition {
        position: geocentric_position(&CHIRON, jd),
        motion: BodyMotion {
            speed,
            retrograde: speed < 0.0,
        },
    }
}

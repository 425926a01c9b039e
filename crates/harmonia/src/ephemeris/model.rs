//! Position models: which theory places each body.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ephemeris::planets::{geocentric_position, theory_for, Theory};
use crate::ephemeris::types::{Body, BodyMotion, EclipticPosition};
use crate::ephemeris::{moon, sun};
use crate::error::ChartError;

/// Step used for the central difference, in days
const MOTION_STEP_DAYS: f64 = 1.0;

/// Accuracy tier of the Sun and Moon theories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyTier {
    /// VSOP87 Sun with FK5, nutation and aberration; full lunar tables
    #[default]
    Almanac,
    /// Equation-of-centre Sun; leading lunar terms
    Truncated,
}

impl AccuracyTier {
    pub const ALL: [AccuracyTier; 2] = [AccuracyTier::Almanac, AccuracyTier::Truncated];

    pub fn name(&self) -> &'static str {
        match self {
            AccuracyTier::Almanac => "almanac",
            AccuracyTier::Truncated => "truncated",
        }
    }

    pub fn model(&self) -> &'static dyn PositionModel {
        match self {
            AccuracyTier::Almanac => &AlmanacModel,
            AccuracyTier::Truncated => &TruncatedModel,
        }
    }
}

impl fmt::Display for AccuracyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccuracyTier {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|tier| tier.name() == wanted)
            .copied()
            .ok_or_else(|| ChartError::UnknownTier {
                name: s.to_string(),
                valid: Self::ALL.iter().map(|tier| tier.name().to_string()).collect(),
            })
    }
}

/// Geocentric ecliptic position of a body at a Julian Day.
///
/// Implementations are pure; the same `(body, jd)` always yields the same
/// position.
pub trait PositionModel: Send + Sync {
    fn tier(&self) -> AccuracyTier;

    fn position(&self, body: Body, jd: f64) -> EclipticPosition;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlmanacModel;

#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatedModel;

impl PositionModel for AlmanacModel {
    fn tier(&self) -> AccuracyTier {
        AccuracyTier::Almanac
    }

    fn position(&self, body: Body, jd: f64) -> EclipticPosition {
        match theory_for(body) {
            Theory::Sun => sun::almanac_position(jd),
            Theory::Moon => moon::almanac_position(jd),
            Theory::Orbit(elements) => geocentric_position(elements, jd),
        }
    }
}

impl PositionModel for TruncatedModel {
    fn tier(&self) -> AccuracyTier {
        AccuracyTier::Truncated
    }

    fn position(&self, body: Body, jd: f64) -> EclipticPosition {
        match theory_for(body) {
            Theory::Sun => sun::truncated_position(jd),
            Theory::Moon => moon::truncated_position(jd),
            Theory::Orbit(elements) => geocentric_position(elements, jd),
        }
    }
}

/// Longitude change from `from` to `to`, taking the short way round.
pub fn unwrap_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta
}

/// Speed in longitude by central difference over ±1 day.
pub fn motion(model: &dyn PositionModel, body: Body, jd: f64) -> BodyMotion {
    let before = model.position(body, jd - MOTION_STEP_DAYS).longitude;
    let after = model.position(body, jd + MOTION_STEP_DAYS).longitude;
    let speed = unwrap_delta(before, after) / (2.0 * MOTION_STEP_DAYS);

    BodyMotion {
        speed,
        retrograde: speed < 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::J2000_JD;

    #[test]
    fn test_tier_parse() {
        assert_eq!("Almanac".parse::<AccuracyTier>().unwrap(), AccuracyTier::Almanac);
        assert_eq!("truncated".parse::<AccuracyTier>().unwrap(), AccuracyTier::Truncated);
        assert!(matches!(
            "vsop2013".parse::<AccuracyTier>(),
            Err(ChartError::UnknownTier { .. })
        ));
    }

    #[test]
    fn test_model_reports_its_tier() {
        for tier in AccuracyTier::ALL {
            assert_eq!(tier.model().tier(), tier);
        }
    }

    #[test]
    fn test_unwrap_delta_across_zero() {
        assert!((unwrap_delta(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((unwrap_delta(1.0, 359.0) + 2.0).abs() < 1e-12);
        assert!((unwrap_delta(10.0, 20.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sun_and_moon_are_never_retrograde() {
        let model = AccuracyTier::Almanac.model();
        for day in 0..40 {
            let jd = J2000_JD + day as f64 * 9.0;
            assert!(!motion(model, Body::Sun, jd).retrograde);
            assert!(!motion(model, Body::Moon, jd).retrograde);
        }
    }

    #[test]
    fn test_planets_never_sit_on_the_sun() {
        let jd = 2_451_545.0;
        for tier in AccuracyTier::ALL {
            let model = tier.model();
            let sun = model.position(Body::Sun, jd).longitude;
            for &body in &crate::ephemeris::ALL_BODIES[2..] {
                let planet = model.position(body, jd);
                assert!(planet.distance > 0.0 && planet.distance < 60.0, "{body}");
                if !matches!(body, Body::Mercury | Body::Venus) {
                    assert!(unwrap_delta(sun, planet.longitude).abs() > 1.0, "{body} on the Sun");
                }
            }
        }
    }

    #[test]
    fn test_mercury_retrograde_march_2000() {
        // Mercury stationed retrograde on 2000-02-21 and direct on 2000-03-14
        let m = motion(&AlmanacModel, Body::Mercury, 2_451_605.5);
        assert!(m.retrograde, "speed = {}", m.speed);
        let direct = motion(&AlmanacModel, Body::Mercury, 2_451_545.0);
        assert!(!direct.retrograde);
    }
}

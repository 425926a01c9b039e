use log::debug;

use crate::ephemeris::chiron::chiron_position;
use crate::ephemeris::houses::compute_houses;
use crate::ephemeris::model::{motion, AccuracyTier, PositionModel};
use crate::ephemeris::nodes::mean_lunar_nodes;
use crate::ephemeris::types::{Body, ChartPositions, GeoLocation, PlanetPosition, ALL_BODIES};
use crate::time::Instant;

/// Computes every chart body, the houses, the lunar nodes and Chiron for an instant
/// with one position model.
#[derive(Clone, Copy)]
pub struct EphemerisAdapter {
    model: &'static dyn PositionModel,
}

impl EphemerisAdapter {
    pub fn new(tier: AccuracyTier) -> Self {
        Self { model: tier.model() }
    }

    pub fn with_model(model: &'static dyn PositionModel) -> Self {
        Self { model }
    }

    pub fn tier(&self) -> AccuracyTier {
        self.model.tier()
    }

    /// Position and motion of a single body
    pub fn calc_planet_position(&self, body: Body, jd: f64) -> PlanetPosition {
        PlanetPosition {
            body,
            position: self.model.position(body, jd),
            motion: motion(self.model, body, jd),
        }
    }

    /// Calculate body positions, plus house cusps when a location is given
    pub fn calc_positions(&self, instant: &Instant, location: Option<GeoLocation>) -> ChartPositions {
        let jd = instant.julian_day();
        debug!("Computing positions at JD {jd} with the {} model", self.tier());

        let planets = ALL_BODIES
            .iter()
            .map(|&body| self.calc_planet_position(body, jd))
            .collect();
        let houses = location.map(|loc| compute_houses(jd, &loc));

        ChartPositions {
            tier: self.tier(),
            julian_day: jd,
            planets,
            houses,
            nodes: mean_lunar_nodes(jd),
            chiron: chiron_position(jd),
        }
    }
}

impl Default for EphemerisAdapter {
    fn default() -> Self {
        Self::new(AccuracyTier::default())
    }
}

impl std::fmt::Debug for EphemerisAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemerisAdapter")
            .field("tier", &self.tier())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn j2000() -> Instant {
        Instant::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_positions_without_location_have_no_houses() {
        let positions = EphemerisAdapter::default().calc_positions(&j2000(), None);
        assert!(positions.houses.is_none());
        assert_eq!(positions.planets.len(), ALL_BODIES.len());
        assert_eq!(positions.tier, AccuracyTier::Almanac);
    }

    #[test]
    fn test_positions_follow_body_order() {
        let positions = EphemerisAdapter::new(AccuracyTier::Truncated)
            .calc_positions(&j2000(), Some(GeoLocation { lat: 51.5, lon: -0.1 }));
        let order: Vec<Body> = positions.planets.iter().map(|p| p.body).collect();
        assert_eq!(order, ALL_BODIES.to_vec());
        assert!(positions.houses.is_some());
    }

    #[test]
    fn test_sun_at_j2000() {
        let sun = EphemerisAdapter::default().calc_planet_position(Body::Sun, 2_451_545.0);
        assert!((sun.position.longitude - 280.37).abs() < 0.05);
        assert!((sun.motion.speed - 1.019).abs() < 0.01);
    }
}

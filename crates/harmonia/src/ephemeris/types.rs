use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ephemeris::houses::HouseSystem;
use crate::ephemeris::model::AccuracyTier;
use crate::error::ChartError;

/// Geographic location coordinates (decimal degrees, east and north positive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Geocentric ecliptic position of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Distance (AU for the Sun and planets, km for the Moon)
    pub distance: f64,
}

/// Bodies placed in a natal chart, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    pub fn is_luminary(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

lazy_static::lazy_static! {
    static ref BODIES_BY_NAME: std::collections::HashMap<String, Body> = ALL_BODIES
        .iter()
        .map(|body| (body.name().to_lowercase(), *body))
        .collect();
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BODIES_BY_NAME
            .get(&s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| ChartError::UnknownBody {
                name: s.to_string(),
                valid: ALL_BODIES.iter().map(|b| b.name().to_string()).collect(),
            })
    }
}

/// Longitude motion of a body around an instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMotion {
    /// Speed in longitude (degrees per day)
    pub speed: f64,
    pub retrograde: bool,
}

/// Position plus motion for one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    pub position: EclipticPosition,
    pub motion: BodyMotion,
}

/// Mean lunar nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarNodes {
    #[serde(rename = "northNode")]
    pub north_node: f64,
    #[serde(rename = "southNode")]
    pub south_node: f64,
}

/// Chiron's place; see [`crate::ephemeris::chiron`] for the orbit used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChironPosition {
    pub position: EclipticPosition,
    pub motion: BodyMotion,
}

/// Everything the ephemeris produces for one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPositions {
    pub tier: AccuracyTier,
    pub julian_day: f64,
    pub planets: Vec<PlanetPosition>,
    pub houses: Option<HouseSystem>,
    pub nodes: LunarNodes,
    pub chiron: ChironPosition,
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(-1e-18), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn test_body_from_str() {
        assert_eq!("sun".parse::<Body>().unwrap(), Body::Sun);
        assert_eq!(" Pluto ".parse::<Body>().unwrap(), Body::Pluto);
        assert!("chiron".parse::<Body>().is_err());
    }
}

//! Western chart value types.

use serde::{Deserialize, Serialize};

use crate::ephemeris::types::{normalize_degrees, Body, BodyMotion};
use crate::western::signs::Sign;

/// One body placed in the zodiac
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBody {
    pub name: String,
    pub longitude: f64,
    pub sign: Sign,
    /// Whole degrees within the sign (0-29)
    #[serde(rename = "degreeInSign")]
    pub degree: u8,
    /// Arc minutes past `degree` (0-59)
    pub minutes: u8,
    pub retrograde: bool,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
    /// House 1-12, when houses were computed
    pub house: Option<u8>,
}

impl ChartBody {
    /// Body at rest at the given longitude.
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        let in_sign = longitude - 30.0 * Sign::index_of(longitude) as f64;
        let degree = (in_sign.floor() as u8).min(29);
        let minutes = (((in_sign - degree as f64) * 60.0).floor() as u8).min(59);

        Self {
            name: name.into(),
            longitude,
            sign: Sign::from_longitude(longitude),
            degree,
            minutes,
            retrograde: false,
            speed: 0.0,
            house: None,
        }
    }

    pub fn with_motion(mut self, motion: BodyMotion) -> Self {
        self.speed = motion.speed;
        self.retrograde = motion.retrograde;
        self
    }

    pub fn with_house(mut self, house: u8) -> Self {
        self.house = Some(house);
        self
    }

    /// The chart body this entry names, if it is one of the known bodies
    pub fn body(&self) -> Option<Body> {
        self.name.parse().ok()
    }

    pub fn is_luminary(&self) -> bool {
        self.body().is_some_and(|body| body.is_luminary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_and_minutes() {
        let body = ChartBody::new("Sun", 45.51);
        assert_eq!(body.sign, Sign::Taurus);
        assert_eq!(body.degree, 15);
        assert_eq!(body.minutes, 30);
    }

    #[test]
    fn test_wraps_longitude() {
        let body = ChartBody::new("Moon", 365.0);
        assert_eq!(body.sign, Sign::Aries);
        assert_eq!(body.degree, 5);
        assert!(body.is_luminary());
    }

    #[test]
    fn test_unknown_name_is_not_luminary() {
        assert!(!ChartBody::new("Chiron", 10.0).is_luminary());
        assert_eq!(ChartBody::new("Chiron", 10.0).body(), None);
    }
}

//! Weighted element and modality balance of a chart.

use serde::{Deserialize, Serialize};

use crate::ephemeris::types::Body;
use crate::tally::largest_remainder_percentages;
use crate::western::signs::{Element, Modality};
use crate::western::types::ChartBody;

/// Element percentages (sum to 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTally {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

/// Modality percentages (sum to 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalityTally {
    pub cardinal: u32,
    pub fixed: u32,
    pub mutable: u32,
}

impl ElementTally {
    pub const UNIFORM: ElementTally = ElementTally { fire: 25, earth: 25, air: 25, water: 25 };

    pub fn new(fire: u32, earth: u32, air: u32, water: u32) -> Self {
        Self { fire, earth, air, water }
    }

    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    pub fn total(&self) -> u32 {
        self.fire + self.earth + self.air + self.water
    }

    /// Element with the highest share; ties go to the earlier of Fire, Earth, Air, Water
    pub fn dominant(&self) -> Element {
        Element::ALL
            .iter()
            .copied()
            .fold(Element::Fire, |best, e| if self.get(e) > self.get(best) { e } else { best })
    }
}

impl ModalityTally {
    pub const UNIFORM: ModalityTally = ModalityTally { cardinal: 33, fixed: 33, mutable: 34 };

    pub fn get(&self, modality: Modality) -> u32 {
        match modality {
            Modality::Cardinal => self.cardinal,
            Modality::Fixed => self.fixed,
            Modality::Mutable => self.mutable,
        }
    }

    pub fn total(&self) -> u32 {
        self.cardinal + self.fixed + self.mutable
    }
}

/// Weight of a body in the balance. Unknown names count as a personal planet.
pub fn body_weight(name: &str) -> f64 {
    match name.parse::<Body>() {
        Ok(Body::Sun | Body::Moon) => 2.0,
        Ok(Body::Uranus | Body::Neptune | Body::Pluto) => 0.5,
        _ => 1.0,
    }
}

pub fn element_tally(bodies: &[ChartBody]) -> ElementTally {
    let mut weights = [0.0; 4];
    for body in bodies {
        weights[body.sign.element() as usize] += body_weight(&body.name);
    }

    match largest_remainder_percentages(weights) {
        Some([fire, earth, air, water]) => ElementTally { fire, earth, air, water },
        None => ElementTally::UNIFORM,
    }
}

pub fn modality_tally(bodies: &[ChartBody]) -> ModalityTally {
    let mut weights = [0.0; 3];
    for body in bodies {
        weights[body.sign.modality() as usize] += body_weight(&body.name);
    }

    match largest_remainder_percentages(weights) {
        Some([cardinal, fixed, mutable]) => ModalityTally { cardinal, fixed, mutable },
        None => ModalityTally::UNIFORM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chart_falls_back_to_uniform() {
        assert_eq!(element_tally(&[]), ElementTally::UNIFORM);
        assert_eq!(modality_tally(&[]), ModalityTally::UNIFORM);
    }

    #[test]
    fn test_luminaries_weigh_double() {
        let bodies = vec![ChartBody::new("Sun", 5.0), ChartBody::new("Mars", 35.0)];
        let tally = element_tally(&bodies);
        assert_eq!(tally, ElementTally::new(67, 33, 0, 0));
        assert_eq!(tally.dominant(), Element::Fire);
    }

    #[test]
    fn test_outer_planets_weigh_half() {
        let bodies = vec![ChartBody::new("Pluto", 95.0), ChartBody::new("Venus", 125.0)];
        let tally = modality_tally(&bodies);
        assert_eq!(tally.cardinal, 33);
        assert_eq!(tally.fixed, 67);
        assert_eq!(tally.total(), 100);
    }

    #[test]
    fn test_body_weight() {
        assert_eq!(body_weight("Moon"), 2.0);
        assert_eq!(body_weight("Saturn"), 1.0);
        assert_eq!(body_weight("Neptune"), 0.5);
        assert_eq!(body_weight("Chiron"), 1.0);
    }
}

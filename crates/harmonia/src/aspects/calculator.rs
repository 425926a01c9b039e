use log::debug;

use crate::aspects::types::{Aspect, AspectCore, AspectSettings};
use crate::western::types::ChartBody;

/// Angular separation folded into [0, 180]
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let raw = (lon1 - lon2).abs() % 360.0;
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    pub fn new(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// First aspect in table order whose orb admits the separation.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64, involves_luminary: bool) -> Option<AspectCore> {
        let angle = separation(lon1, lon2);

        self.settings.active_kinds().find_map(|kind| {
            let exact_angle = kind.exact_angle();
            let orb = (angle - exact_angle).abs();
            (orb <= self.settings.max_orb(kind, involves_luminary)).then_some(AspectCore {
                kind,
                exact_angle,
                orb,
                applying: angle < exact_angle,
            })
        })
    }

    fn aspect_between(&self, a: &ChartBody, b: &ChartBody) -> Option<Aspect> {
        let luminary = a.is_luminary() || b.is_luminary();
        self.calculate_aspect(a.longitude, b.longitude, luminary)
            .map(|core| Aspect::new(a.name.clone(), b.name.clone(), core))
    }

    /// Aspects within one chart, one per unordered pair, in body order
    pub fn compute_aspects(&self, bodies: &[ChartBody]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                if let Some(aspect) = self.aspect_between(a, b) {
                    aspects.push(aspect);
                }
            }
        }
        debug!("Found {} aspects among {} bodies", aspects.len(), bodies.len());
        aspects
    }

    /// Aspects from every body of one chart to every body of another
    pub fn compute_cross_aspects(&self, chart_a: &[ChartBody], chart_b: &[ChartBody]) -> Vec<Aspect> {
        chart_a
            .iter()
            .flat_map(|a| chart_b.iter().filter_map(move |b| self.aspect_between(a, b)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::AspectKind;

    #[test]
    fn test_separation_wraps() {
        assert!((separation(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((separation(10.0, 190.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_trine_within_orb() {
        let calc = AspectCalculator::default();
        let aspect = calc.calculate_aspect(10.0, 127.0, false).unwrap();
        assert_eq!(aspect.kind, AspectKind::Trine);
        assert!((aspect.orb - 3.0).abs() < 1e-9);
        assert!(aspect.applying);
    }

    #[test]
    fn test_luminary_widens_orb() {
        let calc = AspectCalculator::default();
        assert!(calc.calculate_aspect(0.0, 9.0, false).is_none());
        let aspect = calc.calculate_aspect(0.0, 9.0, true).unwrap();
        assert_eq!(aspect.kind, AspectKind::Conjunction);
    }

    #[test]
    fn test_minor_aspect() {
        let calc = AspectCalculator::default();
        let aspect = calc.calculate_aspect(0.0, 151.0, false).unwrap();
        assert_eq!(aspect.kind, AspectKind::Quincunx);
        assert!(!aspect.applying);
    }

    #[test]
    fn test_no_aspect_in_gap() {
        let calc = AspectCalculator::default();
        assert!(calc.calculate_aspect(0.0, 105.0, false).is_none());
    }

    #[test]
    fn test_cross_aspects_include_same_body() {
        let calc = AspectCalculator::default();
        let a = vec![ChartBody::new("Sun", 100.0)];
        let b = vec![ChartBody::new("Sun", 102.0), ChartBody::new("Mars", 40.0)];
        let cross = calc.compute_cross_aspects(&a, &b);
        assert_eq!(cross.len(), 2);
        assert_eq!(cross[0].kind, AspectKind::Conjunction);
        assert_eq!(cross[1].kind, AspectKind::Sextile);
    }
}

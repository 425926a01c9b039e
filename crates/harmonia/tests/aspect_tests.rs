use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use harmonia::aspects::{AspectCalculator, AspectKind, AspectSettings};
use harmonia::western::ChartBody;
use harmonia::{compute_natal_chart, BirthData, ChartSettings};

fn birth(days: i64) -> BirthData {
    let local = NaiveDate::from_ymd_opt(1950, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
        + Duration::days(days);
    BirthData::new(local, 60)
}

#[test]
fn test_one_aspect_per_pair_within_orb() {
    let settings = ChartSettings::default();
    for i in 0..60 {
        let chart = compute_natal_chart(&birth(i * 457), &settings).unwrap();
        let mut pairs = BTreeSet::new();
        for aspect in &chart.aspects {
            let key = if aspect.body_a < aspect.body_b {
                (aspect.body_a.clone(), aspect.body_b.clone())
            } else {
                (aspect.body_b.clone(), aspect.body_a.clone())
            };
            assert!(pairs.insert(key), "duplicate aspect {aspect:?}");

            let luminary = ["Sun", "Moon"]
                .iter()
                .any(|name| aspect.involves(name));
            let max = settings.aspects.max_orb(aspect.kind, luminary);
            assert!(aspect.orb <= max, "{aspect:?} exceeds {max}");
        }
    }
}

#[test]
fn test_luminary_widens_orb() {
    let calculator = AspectCalculator::default();
    let sun = ChartBody::new("Sun", 10.0);
    let mars = ChartBody::new("Mars", 10.0 + 120.0 + 8.5);
    let venus = ChartBody::new("Venus", 10.0);

    let with_sun = calculator.compute_aspects(&[sun, mars.clone()]);
    assert_eq!(with_sun.len(), 1);
    assert_eq!(with_sun[0].kind, AspectKind::Trine);

    assert!(calculator.compute_aspects(&[venus, mars]).is_empty());
}

#[test]
fn test_minor_aspects_can_be_disabled() {
    let settings = AspectSettings {
        include_minor: false,
        ..AspectSettings::default()
    };
    let calculator = AspectCalculator::new(settings);
    assert!(calculator.calculate_aspect(0.0, 30.0, false).is_none());
    assert!(AspectCalculator::default()
        .calculate_aspect(0.0, 30.0, false)
        .is_some());
}

#[test]
fn test_orb_override() {
    let mut settings = AspectSettings::default();
    settings.orbs.insert(AspectKind::Square, 1.0);
    let calculator = AspectCalculator::new(settings);
    assert!(calculator.calculate_aspect(0.0, 92.0, false).is_none());
    assert!(calculator.calculate_aspect(0.0, 90.5, false).is_some());
}

use chrono::{Duration, TimeZone, Utc};
use harmonia::ephemeris::{solve_kepler, AccuracyTier, Body, EphemerisAdapter, GeoLocation, ALL_BODIES};
use harmonia::Instant;

fn sample_instants() -> Vec<Instant> {
    let start = Utc.with_ymd_and_hms(1920, 3, 1, 0, 0, 0).unwrap();
    (0..120)
        .map(|i| Instant::from_utc(start + Duration::days(i * 311) + Duration::minutes(i * 97)))
        .collect()
}

#[test]
fn test_longitudes_normalized_for_both_tiers() {
    for tier in AccuracyTier::ALL {
        let adapter = EphemerisAdapter::new(tier);
        for instant in sample_instants() {
            let positions = adapter.calc_positions(&instant, None);
            assert_eq!(positions.planets.len(), ALL_BODIES.len());
            for planet in &positions.planets {
                let lon = planet.position.longitude;
                assert!((0.0..360.0).contains(&lon), "{} at {lon}", planet.body);
            }
            assert!((0.0..360.0).contains(&positions.nodes.north_node));
            assert!((0.0..360.0).contains(&positions.nodes.south_node));
            assert!((0.0..360.0).contains(&positions.chiron.position.longitude));
        }
    }
}

#[test]
fn test_tiers_agree_closely() {
    let almanac = EphemerisAdapter::new(AccuracyTier::Almanac);
    let truncated = EphemerisAdapter::new(AccuracyTier::Truncated);
    for instant in sample_instants() {
        let jd = instant.julian_day();
        for body in [Body::Sun, Body::Moon] {
            let a = almanac.calc_planet_position(body, jd).position.longitude;
            let b = truncated.calc_planet_position(body, jd).position.longitude;
            let diff = (a - b + 540.0).rem_euclid(360.0) - 180.0;
            assert!(diff.abs() < 0.6, "{body} differs by {diff} at JD {jd}");
        }
    }
}

#[test]
fn test_moon_faster_than_sun() {
    let adapter = EphemerisAdapter::default();
    for instant in sample_instants() {
        let jd = instant.julian_day();
        let sun = adapter.calc_planet_position(Body::Sun, jd).motion.speed;
        let moon = adapter.calc_planet_position(Body::Moon, jd).motion.speed;
        assert!((0.9..1.1).contains(&sun), "sun speed {sun}");
        assert!((11.0..16.0).contains(&moon), "moon speed {moon}");
    }
}

#[test]
fn test_kepler_residual_property() {
    for e_step in 0..=25 {
        let e = e_step as f64 / 100.0;
        for m_step in -36..=36 {
            let m = m_step as f64 * 10.0_f64.to_radians();
            let solution = solve_kepler(m, e);
            let residual = solution.eccentric_anomaly - e * solution.eccentric_anomaly.sin() - m;
            assert!(residual.abs() < 1e-6, "e = {e}, M = {m}");
        }
    }
}

#[test]
fn test_houses_only_with_location() {
    let adapter = EphemerisAdapter::default();
    let instant = sample_instants()[7];
    assert!(adapter.calc_positions(&instant, None).houses.is_none());

    let houses = adapter
        .calc_positions(&instant, Some(GeoLocation { lat: -33.87, lon: 151.21 }))
        .houses
        .unwrap();
    for cusp in houses.cusps {
        assert!((0.0..360.0).contains(&cusp));
    }
}

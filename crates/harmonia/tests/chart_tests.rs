use chrono::NaiveDate;
use harmonia::ephemeris::{AccuracyTier, GeoLocation};
use harmonia::{compute_report, BirthData, ChartSettings};

fn birth() -> BirthData {
    let local = NaiveDate::from_ymd_opt(1988, 11, 3)
        .unwrap()
        .and_hms_opt(21, 40, 0)
        .unwrap();
    BirthData::new(local, 540).at(GeoLocation { lat: 35.68, lon: 139.69 })
}

#[test]
fn test_report_json_is_byte_identical() {
    let settings = ChartSettings::default();
    let first = serde_json::to_string(&compute_report(&birth(), &settings).unwrap()).unwrap();
    for _ in 0..5 {
        let again = serde_json::to_string(&compute_report(&birth(), &settings).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_report_shape() {
    let report = compute_report(&birth(), &ChartSettings::default()).unwrap();
    let natal = &report.natal;

    assert_eq!(natal.bodies.len(), 10);
    assert_eq!(natal.pattern_labels.len(), natal.patterns.len());
    for body in &natal.bodies {
        assert!((0.0..360.0).contains(&body.longitude));
        assert!(body.degree <= 29);
        assert!(body.minutes <= 59);
        assert_eq!(body.sign.index(), (body.longitude / 30.0).floor() as usize);
        assert!(body.house.is_some());
    }
    assert!(report.harmony.score <= 100);
    assert_eq!(report.bazi.elements.total(), 100);
}

#[test]
fn test_unknown_time_uses_noon_for_both_charts() {
    let birth = birth().with_unknown_time();
    let settings = ChartSettings::default();
    let report = compute_report(&birth, &settings).unwrap();

    let mut at_noon = birth;
    at_noon.time_known = true;
    at_noon.local = at_noon.local.date().and_hms_opt(12, 0, 0).unwrap();
    let expected = compute_report(&at_noon, &settings).unwrap();

    assert_eq!(report, expected);
    assert_eq!(report.bazi.hour.label(), expected.bazi.hour.label());
}

#[test]
fn test_tier_is_recorded() {
    let settings = ChartSettings::default().with_tier(AccuracyTier::Truncated);
    let report = compute_report(&birth(), &settings).unwrap();
    assert_eq!(report.natal.tier, AccuracyTier::Truncated);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["natal"]["tier"], "truncated");
    assert!(json["natal"]["bodies"][0].get("degreeInSign").is_some());
}

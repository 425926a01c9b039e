use chrono::NaiveDate;
use harmonia::aspects::{AspectCalculator, AspectKind};
use harmonia::{compute_compatibility, compute_report, BirthData, ChartReport, ChartSettings};

fn report(y: i32, m: u32, d: u32, hour: u32) -> ChartReport {
    let local = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap();
    compute_report(&BirthData::new(local, 0), &ChartSettings::default()).unwrap()
}

#[test]
fn test_self_compatibility() {
    let a = report(1979, 4, 12, 6);
    let result = compute_compatibility(&a, &a, &AspectCalculator::default());

    assert_eq!(result.western.attraction, 80);
    assert_eq!(result.western.emotional, 90);
    assert_eq!(result.western.communication, 85);
    assert_eq!(result.western.longevity, 77);
    assert_eq!(result.bazi.day_master_harmony, 70);
    assert_eq!(result.bazi.branch_combinations, 75);
    assert_eq!(result.bazi.element_complement, 50);
    assert_eq!(result.overall_score, 74);
    assert_eq!(result.strengths.len(), 2);
    assert_eq!(result.challenges.len(), 1);

    let conjunctions = result
        .cross_aspects
        .iter()
        .filter(|aspect| aspect.body_a == aspect.body_b && aspect.kind == AspectKind::Conjunction)
        .count();
    assert_eq!(conjunctions, 10);
}

#[test]
fn test_scores_bounded_and_symmetric() {
    let people = [
        report(1962, 8, 30, 10),
        report(1975, 1, 3, 22),
        report(1991, 12, 19, 4),
        report(2003, 6, 6, 15),
    ];
    let calculator = AspectCalculator::default();
    for a in &people {
        for b in &people {
            let ab = compute_compatibility(a, b, &calculator);
            let ba = compute_compatibility(b, a, &calculator);
            assert!(ab.overall_score <= 100);
            assert_eq!(ab.overall_score, ba.overall_score);
            assert_eq!(ab.western, ba.western);
            assert_eq!(ab.bazi, ba.bazi);
            assert_eq!(ab.cross_aspects.len(), ba.cross_aspects.len());
        }
    }
}

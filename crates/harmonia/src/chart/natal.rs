use log::debug;
use serde::{Deserialize, Serialize};

use crate::aspects::{Aspect, AspectCalculator};
use crate::bazi::{compute_bazi, BaziChart};
use crate::chart::birth::BirthData;
use crate::chart::settings::ChartSettings;
use crate::ephemeris::{
    AccuracyTier, ChartPositions, ChironPosition, EphemerisAdapter, HouseSystem, LunarNodes,
};
use crate::error::ChartError;
use crate::harmony::{score_harmony, HarmonyResult};
use crate::time::Instant;
use crate::western::{
    detect_patterns, element_tally, modality_tally, ChartBody, ElementTally, ModalityTally, Pattern,
};

/// Western natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub instant: Instant,
    pub tier: AccuracyTier,
    #[serde(rename = "julianDay")]
    pub julian_day: f64,
    pub bodies: Vec<ChartBody>,
    pub houses: Option<HouseSystem>,
    pub nodes: LunarNodes,
    pub chiron: ChironPosition,
    pub aspects: Vec<Aspect>,
    pub patterns: Vec<Pattern>,
    #[serde(rename = "patternLabels")]
    pub pattern_labels: Vec<String>,
    pub elements: ElementTally,
    pub modalities: ModalityTally,
}

impl NatalChart {
    pub fn body(&self, name: &str) -> Option<&ChartBody> {
        self.bodies.iter().find(|body| body.name == name)
    }
}

/// Natal chart together with the Bazi chart and their harmony
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReport {
    pub natal: NatalChart,
    pub bazi: BaziChart,
    pub harmony: HarmonyResult,
}

/// Turn raw positions into placed chart bodies
pub fn chart_bodies(positions: &ChartPositions) -> Vec<ChartBody> {
    positions
        .planets
        .iter()
        .map(|planet| {
            let body = ChartBody::new(planet.body.name(), planet.position.longitude)
                .with_motion(planet.motion);
            match &positions.houses {
                Some(houses) => {
                    let house = houses.house_of(body.longitude);
                    body.with_house(house)
                }
                None => body,
            }
        })
        .collect()
}

pub fn compute_natal_chart(birth: &BirthData, settings: &ChartSettings) -> Result<NatalChart, ChartError> {
    let instant = birth.instant()?;
    let adapter = EphemerisAdapter::new(settings.tier);
    let positions = adapter.calc_positions(&instant, birth.location);

    let bodies = chart_bodies(&positions);
    let aspects = AspectCalculator::new(settings.aspects.clone()).compute_aspects(&bodies);
    let patterns = detect_patterns(&bodies, &aspects);
    let pattern_labels = patterns.iter().map(Pattern::label).collect();

    debug!(
        "Natal chart at {}: {} aspects, {} patterns",
        instant.utc(),
        aspects.len(),
        patterns.len()
    );

    Ok(NatalChart {
        instant,
        tier: positions.tier,
        julian_day: positions.julian_day,
        elements: element_tally(&bodies),
        modalities: modality_tally(&bodies),
        houses: positions.houses,
        nodes: positions.nodes,
        chiron: positions.chiron,
        bodies,
        aspects,
        patterns,
        pattern_labels,
    })
}

/// Bazi chart from the birthplace wall-clock time
pub fn compute_bazi_chart(birth: &BirthData) -> BaziChart {
    compute_bazi(birth.effective_local())
}

pub fn compute_report(birth: &BirthData, settings: &ChartSettings) -> Result<ChartReport, ChartError> {
    let natal = compute_natal_chart(birth, settings)?;
    let bazi = compute_bazi_chart(birth);
    let harmony = score_harmony(&natal.elements, &bazi.elements, &settings.harmony);

    Ok(ChartReport { natal, bazi, harmony })
}

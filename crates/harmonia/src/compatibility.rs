//! Two-person compatibility from both charts.

use serde::{Deserialize, Serialize};

use crate::aspects::{Aspect, AspectCalculator};
use crate::bazi::{BaziChart, FiveElement, FiveElementTally};
use crate::chart::{ChartReport, NatalChart};
use crate::ephemeris::Body;
use crate::western::Element;

const ELEMENT_GAP_LOW: u32 = 10;
const ELEMENT_GAP_HIGH: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WesternSynastry {
    pub emotional: u32,
    pub attraction: u32,
    pub communication: u32,
    pub longevity: u32,
}

impl WesternSynastry {
    fn average(&self) -> f64 {
        (self.emotional + self.attraction + self.communication + self.longevity) as f64 / 4.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziSynastry {
    #[serde(rename = "dayMasterHarmony")]
    pub day_master_harmony: u32,
    #[serde(rename = "branchCombinations")]
    pub branch_combinations: u32,
    #[serde(rename = "elementComplement")]
    pub element_complement: u32,
}

impl BaziSynastry {
    fn average(&self) -> f64 {
        (self.day_master_harmony + self.branch_combinations + self.element_complement) as f64 / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    #[serde(rename = "overallScore")]
    pub overall_score: u32,
    pub western: WesternSynastry,
    pub bazi: BaziSynastry,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    #[serde(rename = "crossAspects")]
    pub cross_aspects: Vec<Aspect>,
}

fn sign_element(chart: &NatalChart, body: Body) -> Option<Element> {
    chart.body(body.name()).map(|b| b.sign.element())
}

pub fn western_synastry(a: &NatalChart, b: &NatalChart) -> WesternSynastry {
    let attraction = match (sign_element(a, Body::Sun), sign_element(b, Body::Sun)) {
        (Some(x), Some(y)) if x.is_compatible_with(y) => 80,
        _ => 55,
    };
    let emotional = match (sign_element(a, Body::Moon), sign_element(b, Body::Moon)) {
        (Some(x), Some(y)) if x == y => 90,
        (Some(x), Some(y)) if x.is_compatible_with(y) => 75,
        _ => 55,
    };
    let communication = ((attraction + emotional) as f64 / 2.0).round() as u32;
    let longevity = ((attraction + emotional + 60) as f64 / 3.0).round() as u32;

    WesternSynastry {
        emotional,
        attraction,
        communication,
        longevity,
    }
}

/// Day masters feeding each other score highest, then equals, then control.
pub fn day_master_harmony(a: FiveElement, b: FiveElement) -> u32 {
    if a.produces() == b || b.produces() == a {
        90
    } else if a == b {
        70
    } else if a.controls() == b || b.controls() == a {
        45
    } else {
        60
    }
}

/// 50 plus 10 for every element one chart lacks and the other has in plenty.
pub fn element_complement(a: &FiveElementTally, b: &FiveElementTally) -> u32 {
    let filled = FiveElement::ALL
        .iter()
        .filter(|&&element| {
            let (x, y) = (a.get(element), b.get(element));
            (x < ELEMENT_GAP_LOW && y > ELEMENT_GAP_HIGH) || (y < ELEMENT_GAP_LOW && x > ELEMENT_GAP_HIGH)
        })
        .count() as u32;
    (50 + 10 * filled).min(100)
}

pub fn bazi_synastry(a: &BaziChart, b: &BaziChart) -> BaziSynastry {
    BaziSynastry {
        day_master_harmony: day_master_harmony(a.day_master_element, b.day_master_element),
        // branch combinations are not evaluated; neutral score
        branch_combinations: 75,
        element_complement: element_complement(&a.elements, &b.elements),
    }
}

fn notes(western: &WesternSynastry, bazi: &BaziSynastry) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut challenges = Vec::new();

    if western.emotional > 80 {
        strengths.push("Moons in harmony".to_string());
    }
    if western.attraction > 75 {
        strengths.push("Suns in compatible elements".to_string());
    }
    if bazi.day_master_harmony > 80 {
        strengths.push("Day Masters in the productive cycle".to_string());
    }
    if bazi.branch_combinations > 80 {
        strengths.push("Favourable branch combinations".to_string());
    }

    if western.communication < 70 {
        challenges.push("Different communication styles".to_string());
    }
    if bazi.element_complement < 60 {
        challenges.push("Shared elemental gaps".to_string());
    }
    if bazi.day_master_harmony < 50 {
        challenges.push("Day Masters in the control cycle".to_string());
    }

    (strengths, challenges)
}

pub fn compute_compatibility(a: &ChartReport, b: &ChartReport, calculator: &AspectCalculator) -> CompatibilityResult {
    let western = western_synastry(&a.natal, &b.natal);
    let bazi = bazi_synastry(&a.bazi, &b.bazi);
    let overall_score = (0.5 * western.average() + 0.5 * bazi.average()).round() as u32;
    let (strengths, challenges) = notes(&western, &bazi);

    CompatibilityResult {
        overall_score,
        western,
        bazi,
        strengths,
        challenges,
        cross_aspects: calculator.compute_cross_aspects(&a.natal.bodies, &b.natal.bodies),
    }
}

use serde::{Deserialize, Serialize};

use crate::bazi::cycles::FiveElement;
use crate::bazi::types::FiveElementTally;
use crate::tally::largest_remainder_percentages;
use crate::western::elements::ElementTally;
use crate::western::signs::Element;

/// Share of each Western element passed to the Chinese elements
pub const ELEMENT_MAPPING: [(Element, &[(FiveElement, f64)]); 4] = [
    (Element::Fire, &[(FiveElement::Fire, 1.0), (FiveElement::Wood, 0.2)]),
    (Element::Earth, &[(FiveElement::Earth, 1.0)]),
    (Element::Air, &[(FiveElement::Metal, 0.6), (FiveElement::Wood, 0.4)]),
    (Element::Water, &[(FiveElement::Water, 1.0)]),
];

/// Thresholds (percent) and score weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonySettings {
    /// Both systems at or above this share reinforce each other
    pub reinforcing_min: u32,
    /// One system at or above this share ...
    pub balancing_high: u32,
    /// ... while the other is at or below this one
    pub balancing_low: u32,
    /// Differences above this are in conflict
    pub conflicting_diff: u32,
    pub base_score: i32,
    pub reinforcing_weight: i32,
    pub balancing_weight: i32,
    pub conflicting_weight: i32,
}

impl Default for HarmonySettings {
    fn default() -> Self {
        Self {
            reinforcing_min: 20,
            balancing_high: 25,
            balancing_low: 10,
            conflicting_diff: 25,
            base_score: 50,
            reinforcing_weight: 12,
            balancing_weight: 5,
            conflicting_weight: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Reinforcing,
    Balancing,
    Conflicting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNote {
    pub element: FiveElement,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyResult {
    /// 0-100
    pub score: u32,
    /// Western balance expressed in the five elements
    #[serde(rename = "mappedWestern")]
    pub mapped_western: FiveElementTally,
    pub reinforcing: Vec<ElementNote>,
    pub balancing: Vec<ElementNote>,
    pub conflicting: Vec<ElementNote>,
}

/// Western percentages through [`ELEMENT_MAPPING`], renormalized to 100.
pub fn map_western_to_chinese(western: &ElementTally) -> FiveElementTally {
    let mut weights = [0.0; 5];
    for (element, targets) in ELEMENT_MAPPING.iter() {
        let share = western.get(*element) as f64;
        for (target, factor) in targets.iter() {
            weights[*target as usize] += share * factor;
        }
    }
    largest_remainder_percentages(weights)
        .map(FiveElementTally::from_array)
        .unwrap_or(FiveElementTally::UNIFORM)
}

/// Theme of one element, checked in order reinforcing, balancing, conflicting.
pub fn classify(western: u32, bazi: u32, settings: &HarmonySettings) -> Option<Theme> {
    let high = settings.balancing_high;
    let low = settings.balancing_low;

    if western >= settings.reinforcing_min && bazi >= settings.reinforcing_min {
        Some(Theme::Reinforcing)
    } else if (western >= high && bazi <= low) || (bazi >= high && western <= low) {
        Some(Theme::Balancing)
    } else if western.abs_diff(bazi) > settings.conflicting_diff {
        Some(Theme::Conflicting)
    } else {
        None
    }
}

fn note_for(theme: Theme, element: FiveElement, western: u32, bazi: u32) -> String {
    match theme {
        Theme::Reinforcing => {
            format!("{element} strong in both systems (Western {western}%, Bazi {bazi}%)")
        }
        Theme::Balancing if western > bazi => {
            format!("Western chart supplies {element} ({western}%) that the Bazi chart lacks ({bazi}%)")
        }
        Theme::Balancing => {
            format!("Bazi chart supplies {element} ({bazi}%) that the Western chart lacks ({western}%)")
        }
        Theme::Conflicting => {
            format!("{element} diverges between systems (Western {western}%, Bazi {bazi}%)")
        }
    }
}

pub fn score_harmony(
    western: &ElementTally,
    bazi: &FiveElementTally,
    settings: &HarmonySettings,
) -> HarmonyResult {
    let mapped = map_western_to_chinese(western);

    let mut reinforcing = Vec::new();
    let mut balancing = Vec::new();
    let mut conflicting = Vec::new();

    for element in FiveElement::ALL {
        let w = mapped.get(element);
        let b = bazi.get(element);
        let Some(theme) = classify(w, b, settings) else {
            continue;
        };
        let note = ElementNote {
            element,
            note: note_for(theme, element, w, b),
        };
        match theme {
            Theme::Reinforcing => reinforcing.push(note),
            Theme::Balancing => balancing.push(note),
            Theme::Conflicting => conflicting.push(note),
        }
    }

    // weights come from user configuration
    let weighted = |weight: i32, notes: &[ElementNote]| weight.saturating_mul(notes.len() as i32);
    let raw = settings
        .base_score
        .saturating_add(weighted(settings.reinforcing_weight, &reinforcing))
        .saturating_add(weighted(settings.balancing_weight, &balancing))
        .saturating_sub(weighted(settings.conflicting_weight, &conflicting));

    HarmonyResult {
        score: raw.clamp(0, 100) as u32,
        mapped_western: mapped,
        reinforcing,
        balancing,
        conflicting,
    }
}

//! Ten Gods and the strength analysis around the Day Master.

use crate::bazi::cycles::{FiveElement, HeavenlyStem};
use crate::bazi::types::{BaziAnalysis, FiveElementTally, TenGod};

/// Share at or above which an element counts as strong
pub const STRONG_THRESHOLD: u32 = 25;
/// Share at or below which an element counts as weak
pub const WEAK_THRESHOLD: u32 = 10;

/// Relation of `other` to `day_master` through the element cycles and polarity.
pub fn ten_god(day_master: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    let me = day_master.element();
    let them = other.element();
    let same_polarity = day_master.polarity() == other.polarity();

    let (same, different) = if them == me {
        (TenGod::Friend, TenGod::RobWealth)
    } else if me.produces() == them {
        (TenGod::EatingGod, TenGod::HurtingOfficer)
    } else if me.controls() == them {
        (TenGod::IndirectWealth, TenGod::DirectWealth)
    } else if them.controls() == me {
        (TenGod::SevenKillings, TenGod::DirectOfficer)
    } else {
        // the only relation left: `them` produces `me`
        (TenGod::IndirectResource, TenGod::DirectResource)
    };

    if same_polarity {
        same
    } else {
        different
    }
}

/// Strong and weak elements, and the elements that balance the Day Master.
///
/// A strong Day Master is drained by what it produces and what it controls;
/// a weak one is fed by the element producing it and by its own. Otherwise
/// the chart's weak elements are the favorable ones.
pub fn analyze(day_master: FiveElement, elements: &FiveElementTally) -> BaziAnalysis {
    let strong: Vec<FiveElement> = FiveElement::ALL
        .iter()
        .copied()
        .filter(|&e| elements.get(e) >= STRONG_THRESHOLD)
        .collect();
    let weak: Vec<FiveElement> = FiveElement::ALL
        .iter()
        .copied()
        .filter(|&e| elements.get(e) <= WEAK_THRESHOLD)
        .collect();

    let share = elements.get(day_master);
    let favorable = if share >= STRONG_THRESHOLD {
        vec![day_master.produces(), day_master.controls()]
    } else if share <= WEAK_THRESHOLD {
        vec![day_master.produced_by(), day_master]
    } else {
        weak.clone()
    };

    BaziAnalysis { strong, weak, favorable }
}

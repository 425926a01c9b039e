//! Bazi chart value types.

use serde::{Deserialize, Serialize};

use crate::bazi::cycles::{EarthlyBranch, FiveElement, HeavenlyStem, Polarity};

/// One stem/branch pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    #[serde(rename = "stemElement")]
    pub stem_element: FiveElement,
    #[serde(rename = "stemPolarity")]
    pub stem_polarity: Polarity,
    pub branch: EarthlyBranch,
    #[serde(rename = "branchAnimal")]
    pub branch_animal: String,
    #[serde(rename = "branchElement")]
    pub branch_element: FiveElement,
}

impl Pillar {
    /// Pillar at cycle positions; indices wrap modulo 10 and 12.
    pub fn new(stem_index: i64, branch_index: i64) -> Self {
        let stem = HeavenlyStem::from_index(stem_index);
        let branch = EarthlyBranch::from_index(branch_index);
        Self {
            stem,
            stem_element: stem.element(),
            stem_polarity: stem.polarity(),
            branch,
            branch_animal: branch.animal().to_string(),
            branch_element: branch.element(),
        }
    }

    /// e.g. "甲子 Jia-Zi"
    pub fn label(&self) -> String {
        format!(
            "{}{} {}-{}",
            self.stem.chinese(),
            self.branch.chinese(),
            self.stem.pinyin(),
            self.branch.pinyin()
        )
    }
}

/// Five-element percentages (sum to 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveElementTally {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl FiveElementTally {
    pub const UNIFORM: FiveElementTally = FiveElementTally {
        wood: 20,
        fire: 20,
        earth: 20,
        metal: 20,
        water: 20,
    };

    pub fn new(wood: u32, fire: u32, earth: u32, metal: u32, water: u32) -> Self {
        Self { wood, fire, earth, metal, water }
    }

    pub fn from_array([wood, fire, earth, metal, water]: [u32; 5]) -> Self {
        Self { wood, fire, earth, metal, water }
    }

    pub fn get(&self, element: FiveElement) -> u32 {
        match element {
            FiveElement::Wood => self.wood,
            FiveElement::Fire => self.fire,
            FiveElement::Earth => self.earth,
            FiveElement::Metal => self.metal,
            FiveElement::Water => self.water,
        }
    }

    pub fn total(&self) -> u32 {
        FiveElement::ALL.iter().map(|&e| self.get(e)).sum()
    }
}

/// Relation of a stem to the Day Master
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    Friend,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    pub fn name(&self) -> &'static str {
        match self {
            TenGod::Friend => "Friend",
            TenGod::RobWealth => "Rob Wealth",
            TenGod::EatingGod => "Eating God",
            TenGod::HurtingOfficer => "Hurting Officer",
            TenGod::IndirectWealth => "Indirect Wealth",
            TenGod::DirectWealth => "Direct Wealth",
            TenGod::SevenKillings => "Seven Killings",
            TenGod::DirectOfficer => "Direct Officer",
            TenGod::IndirectResource => "Indirect Resource",
            TenGod::DirectResource => "Direct Resource",
        }
    }

    pub fn chinese(&self) -> &'static str {
        match self {
            TenGod::Friend => "比肩",
            TenGod::RobWealth => "劫财",
            TenGod::EatingGod => "食神",
            TenGod::HurtingOfficer => "伤官",
            TenGod::IndirectWealth => "偏财",
            TenGod::DirectWealth => "正财",
            TenGod::SevenKillings => "七杀",
            TenGod::DirectOfficer => "正官",
            TenGod::IndirectResource => "偏印",
            TenGod::DirectResource => "正印",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Ten God of one pillar's stem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodEntry {
    pub pillar: PillarPosition,
    pub stem: HeavenlyStem,
    pub god: TenGod,
}

/// Element strengths relative to the Day Master
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziAnalysis {
    pub strong: Vec<FiveElement>,
    pub weak: Vec<FiveElement>,
    pub favorable: Vec<FiveElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    #[serde(rename = "dayMaster")]
    pub day_master: HeavenlyStem,
    #[serde(rename = "dayMasterElement")]
    pub day_master_element: FiveElement,
    pub elements: FiveElementTally,
    #[serde(rename = "tenGods")]
    pub ten_gods: Vec<TenGodEntry>,
    pub analysis: BaziAnalysis,
}

impl BaziChart {
    pub fn pillars(&self) -> [&Pillar; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }
}

//! The Five Elements, the ten Heavenly Stems and the twelve Earthly Branches.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl FiveElement {
    pub const ALL: [FiveElement; 5] = [
        FiveElement::Wood,
        FiveElement::Fire,
        FiveElement::Earth,
        FiveElement::Metal,
        FiveElement::Water,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FiveElement::Wood => "Wood",
            FiveElement::Fire => "Fire",
            FiveElement::Earth => "Earth",
            FiveElement::Metal => "Metal",
            FiveElement::Water => "Water",
        }
    }

    fn step(&self, n: usize) -> FiveElement {
        Self::ALL[(*self as usize + n) % 5]
    }

    /// Productive cycle: Wood feeds Fire, Fire makes Earth, ...
    pub fn produces(&self) -> FiveElement {
        self.step(1)
    }

    pub fn produced_by(&self) -> FiveElement {
        self.step(4)
    }

    /// Control cycle: Wood parts Earth, Fire melts Metal, ...
    pub fn controls(&self) -> FiveElement {
        self.step(2)
    }

    pub fn controlled_by(&self) -> FiveElement {
        self.step(3)
    }
}

impl fmt::Display for FiveElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

// (stem, chinese, pinyin)
const STEMS: [(HeavenlyStem, &str, &str); 10] = [
    (HeavenlyStem::Jia, "甲", "Jia"),
    (HeavenlyStem::Yi, "乙", "Yi"),
    (HeavenlyStem::Bing, "丙", "Bing"),
    (HeavenlyStem::Ding, "丁", "Ding"),
    (HeavenlyStem::Wu, "戊", "Wu"),
    (HeavenlyStem::Ji, "己", "Ji"),
    (HeavenlyStem::Geng, "庚", "Geng"),
    (HeavenlyStem::Xin, "辛", "Xin"),
    (HeavenlyStem::Ren, "壬", "Ren"),
    (HeavenlyStem::Gui, "癸", "Gui"),
];

impl HeavenlyStem {
    /// Stem for any integer position in the 10-cycle
    pub fn from_index(index: i64) -> Self {
        STEMS[index.rem_euclid(10) as usize].0
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn chinese(&self) -> &'static str {
        STEMS[self.index()].1
    }

    pub fn pinyin(&self) -> &'static str {
        STEMS[self.index()].2
    }

    /// Stems pair up per element: Jia/Yi Wood, Bing/Ding Fire, ...
    pub fn element(&self) -> FiveElement {
        FiveElement::ALL[self.index() / 2]
    }

    pub fn polarity(&self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.chinese(), self.pinyin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

// (branch, chinese, pinyin, animal, element)
const BRANCHES: [(EarthlyBranch, &str, &str, &str, FiveElement); 12] = [
    (EarthlyBranch::Zi, "子", "Zi", "Rat", FiveElement::Water),
    (EarthlyBranch::Chou, "丑", "Chou", "Ox", FiveElement::Earth),
    (EarthlyBranch::Yin, "寅", "Yin", "Tiger", FiveElement::Wood),
    (EarthlyBranch::Mao, "卯", "Mao", "Rabbit", FiveElement::Wood),
    (EarthlyBranch::Chen, "辰", "Chen", "Dragon", FiveElement::Earth),
    (EarthlyBranch::Si, "巳", "Si", "Snake", FiveElement::Fire),
    (EarthlyBranch::Wu, "午", "Wu", "Horse", FiveElement::Fire),
    (EarthlyBranch::Wei, "未", "Wei", "Goat", FiveElement::Earth),
    (EarthlyBranch::Shen, "申", "Shen", "Monkey", FiveElement::Metal),
    (EarthlyBranch::You, "酉", "You", "Rooster", FiveElement::Metal),
    (EarthlyBranch::Xu, "戌", "Xu", "Dog", FiveElement::Earth),
    (EarthlyBranch::Hai, "亥", "Hai", "Pig", FiveElement::Water),
];

impl EarthlyBranch {
    /// Branch for any integer position in the 12-cycle
    pub fn from_index(index: i64) -> Self {
        BRANCHES[index.rem_euclid(12) as usize].0
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn chinese(&self) -> &'static str {
        BRANCHES[self.index()].1
    }

    pub fn pinyin(&self) -> &'static str {
        BRANCHES[self.index()].2
    }

    pub fn animal(&self) -> &'static str {
        BRANCHES[self.index()].3
    }

    pub fn element(&self) -> FiveElement {
        BRANCHES[self.index()].4
    }
}

impl fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.chinese(), self.pinyin(), self.animal())
    }
}

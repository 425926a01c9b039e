//! Reconciles the Western element balance with the Bazi five-element tally.

pub mod scorer;

pub use scorer::{
    classify, map_western_to_chinese, score_harmony, ElementNote, HarmonyResult, HarmonySettings,
    Theme, ELEMENT_MAPPING,
};

use serde::{Deserialize, Serialize};

use crate::aspects::AspectSettings;
use crate::ephemeris::AccuracyTier;
use crate::harmony::HarmonySettings;

/// Everything that tunes a chart computation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub tier: AccuracyTier,
    pub aspects: AspectSettings,
    pub harmony: HarmonySettings,
}

impl ChartSettings {
    pub fn with_tier(mut self, tier: AccuracyTier) -> Self {
        self.tier = tier;
        self
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    SemiSextile,
    SemiSquare,
    Sesquiquadrate,
    Quintile,
    BiQuintile,
}

/// Aspect kinds in matching order, majors first
pub const ASPECT_TABLE: [AspectKind; 11] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
    AspectKind::Quincunx,
    AspectKind::SemiSextile,
    AspectKind::SemiSquare,
    AspectKind::Sesquiquadrate,
    AspectKind::Quintile,
    AspectKind::BiQuintile,
];

impl AspectKind {
    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
            AspectKind::Quincunx => "Quincunx",
            AspectKind::SemiSextile => "Semi-sextile",
            AspectKind::SemiSquare => "Semi-square",
            AspectKind::Sesquiquadrate => "Sesquiquadrate",
            AspectKind::Quintile => "Quintile",
            AspectKind::BiQuintile => "Bi-quintile",
        }
    }

    /// Angle in degrees
    pub fn exact_angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::SemiSextile => 30.0,
            AspectKind::SemiSquare => 45.0,
            AspectKind::Sesquiquadrate => 135.0,
            AspectKind::Quintile => 72.0,
            AspectKind::BiQuintile => 144.0,
        }
    }

    /// Maximum orb in degrees, before any luminary widening
    pub fn default_orb(&self) -> f64 {
        match self {
            AspectKind::Conjunction | AspectKind::Opposition | AspectKind::Trine => 8.0,
            AspectKind::Square => 7.0,
            AspectKind::Sextile => 6.0,
            AspectKind::Quincunx => 3.0,
            _ => 2.0,
        }
    }

    pub fn is_major(&self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction
                | AspectKind::Opposition
                | AspectKind::Trine
                | AspectKind::Square
                | AspectKind::Sextile
        )
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectKind {
    type Err = ChartError;

    /// Accepts display names and snake_case ids ("Semi-sextile", "semi_sextile").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        ASPECT_TABLE
            .iter()
            .find(|kind| kind.name().to_lowercase().replace('-', "_") == wanted)
            .copied()
            .ok_or_else(|| ChartError::UnknownAspect {
                name: s.to_string(),
                valid: ASPECT_TABLE.iter().map(|k| k.name().to_string()).collect(),
            })
    }
}

/// Core aspect information
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectCore {
    pub kind: AspectKind,
    /// Exact angle for this aspect
    pub exact_angle: f64,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Separation still short of the exact angle
    pub applying: bool,
}

/// An aspect between two named bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    #[serde(rename = "bodyA")]
    pub body_a: String,
    #[serde(rename = "bodyB")]
    pub body_b: String,
    pub kind: AspectKind,
    pub exact_angle: f64,
    pub orb: f64,
    pub applying: bool,
}

impl Aspect {
    pub fn new(body_a: impl Into<String>, body_b: impl Into<String>, core: AspectCore) -> Self {
        Self {
            body_a: body_a.into(),
            body_b: body_b.into(),
            kind: core.kind,
            exact_angle: core.exact_angle,
            orb: core.orb,
            applying: core.applying,
        }
    }

    pub fn involves(&self, name: &str) -> bool {
        self.body_a == name || self.body_b == name
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectSettings {
    /// Orb overrides per aspect kind
    pub orbs: BTreeMap<AspectKind, f64>,
    /// Extra orb for major aspects involving the Sun or Moon
    pub luminary_bonus_major: f64,
    /// Extra orb for minor aspects involving the Sun or Moon
    pub luminary_bonus_minor: f64,
    pub include_minor: bool,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            orbs: BTreeMap::new(),
            luminary_bonus_major: 2.0,
            luminary_bonus_minor: 1.0,
            include_minor: true,
        }
    }
}

impl AspectSettings {
    /// Maximum orb for a kind, widened when a luminary takes part
    pub fn max_orb(&self, kind: AspectKind, involves_luminary: bool) -> f64 {
        let base = self.orbs.get(&kind).copied().unwrap_or_else(|| kind.default_orb());
        if !involves_luminary {
            base
        } else if kind.is_major() {
            base + self.luminary_bonus_major
        } else {
            base + self.luminary_bonus_minor
        }
    }

    /// Aspect kinds considered, in matching order
    pub fn active_kinds(&self) -> impl Iterator<Item = AspectKind> + '_ {
        ASPECT_TABLE
            .iter()
            .copied()
            .filter(move |kind| self.include_minor || kind.is_major())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aspect_names() {
        assert_eq!("trine".parse::<AspectKind>().unwrap(), AspectKind::Trine);
        assert_eq!("Semi-sextile".parse::<AspectKind>().unwrap(), AspectKind::SemiSextile);
        assert_eq!("bi_quintile".parse::<AspectKind>().unwrap(), AspectKind::BiQuintile);
        assert!("septile".parse::<AspectKind>().is_err());
    }

    #[test]
    fn test_luminary_orbs() {
        let settings = AspectSettings::default();
        assert_eq!(settings.max_orb(AspectKind::Conjunction, false), 8.0);
        assert_eq!(settings.max_orb(AspectKind::Conjunction, true), 10.0);
        assert_eq!(settings.max_orb(AspectKind::Quincunx, true), 4.0);
    }

    #[test]
    fn test_orb_override() {
        let mut settings = AspectSettings::default();
        settings.orbs.insert(AspectKind::Square, 5.0);
        assert_eq!(settings.max_orb(AspectKind::Square, false), 5.0);
        assert_eq!(settings.max_orb(AspectKind::Square, true), 7.0);
    }

    #[test]
    fn test_majors_only() {
        let settings = AspectSettings {
            include_minor: false,
            ..AspectSettings::default()
        };
        assert_eq!(settings.active_kinds().count(), 5);
    }
}

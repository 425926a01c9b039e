use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use harmonia::aspects::{AspectKind, AspectSettings};
use harmonia::ephemeris::AccuracyTier;
use harmonia::harmony::HarmonySettings;
use harmonia::ChartSettings;

#[derive(Debug, Clone, Default, Deserialize)]
struct ChartToml {
    #[serde(default)]
    tier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AspectsToml {
    /// aspect name -> orb in degrees
    #[serde(default)]
    orbs: BTreeMap<String, f64>,
    #[serde(default)]
    luminary_bonus_major: Option<f64>,
    #[serde(default)]
    luminary_bonus_minor: Option<f64>,
    #[serde(default)]
    include_minor: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HarmonyToml {
    #[serde(default)]
    reinforcing_min: Option<u32>,
    #[serde(default)]
    balancing_high: Option<u32>,
    #[serde(default)]
    balancing_low: Option<u32>,
    #[serde(default)]
    conflicting_diff: Option<u32>,
    #[serde(default)]
    base_score: Option<i32>,
    #[serde(default)]
    reinforcing_weight: Option<i32>,
    #[serde(default)]
    balancing_weight: Option<i32>,
    #[serde(default)]
    conflicting_weight: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    aspects: AspectsToml,
    #[serde(default)]
    harmony: HarmonyToml,
}

/// Try the usual relative locations of `configs/harmonia.toml`.
pub fn read_settings_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/harmonia.toml", "../../configs/harmonia.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load harmonia.toml from {:?}", paths);
}

pub fn load_chart_settings() -> anyhow::Result<ChartSettings> {
    let text = read_settings_toml_text()?;
    parse_chart_settings(&text)
}

pub fn load_chart_settings_from(path: &Path) -> anyhow::Result<ChartSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    parse_chart_settings(&text).with_context(|| format!("Invalid settings in {}", path.display()))
}

pub fn parse_chart_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse harmonia.toml: {e}"))?;
    let RootConfigToml { chart, aspects, harmony } = root;

    let tier = match chart.tier {
        Some(name) => name.parse::<AccuracyTier>()?,
        None => AccuracyTier::default(),
    };

    Ok(ChartSettings {
        tier,
        aspects: aspect_settings(aspects)?,
        harmony: harmony_settings(harmony),
    })
}

fn aspect_settings(cfg: AspectsToml) -> anyhow::Result<AspectSettings> {
    let defaults = AspectSettings::default();
    let mut orbs = BTreeMap::new();
    for (name, orb) in cfg.orbs {
        let kind: AspectKind = name.parse()?;
        if !(orb.is_finite() && orb >= 0.0) {
            anyhow::bail!("aspects.orbs.{name} must be a non-negative number of degrees, got {orb}");
        }
        orbs.insert(kind, orb);
    }

    Ok(AspectSettings {
        orbs,
        luminary_bonus_major: cfg.luminary_bonus_major.unwrap_or(defaults.luminary_bonus_major),
        luminary_bonus_minor: cfg.luminary_bonus_minor.unwrap_or(defaults.luminary_bonus_minor),
        include_minor: cfg.include_minor.unwrap_or(defaults.include_minor),
    })
}

fn harmony_settings(cfg: HarmonyToml) -> HarmonySettings {
    let d = HarmonySettings::default();
    HarmonySettings {
        reinforcing_min: cfg.reinforcing_min.unwrap_or(d.reinforcing_min),
        balancing_high: cfg.balancing_high.unwrap_or(d.balancing_high),
        balancing_low: cfg.balancing_low.unwrap_or(d.balancing_low),
        conflicting_diff: cfg.conflicting_diff.unwrap_or(d.conflicting_diff),
        base_score: cfg.base_score.unwrap_or(d.base_score),
        reinforcing_weight: cfg.reinforcing_weight.unwrap_or(d.reinforcing_weight),
        balancing_weight: cfg.balancing_weight.unwrap_or(d.balancing_weight),
        conflicting_weight: cfg.conflicting_weight.unwrap_or(d.conflicting_weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(parse_chart_settings("").unwrap(), ChartSettings::default());
    }

    #[test]
    fn test_full_document() {
        let text = r#"
            [chart]
            tier = "truncated"

            [aspects]
            include_minor = false
            luminary_bonus_major = 3.0
            orbs = { trine = 6.5, "semi-sextile" = 1.0 }

            [harmony]
            conflicting_weight = 10
        "#;
        let settings = parse_chart_settings(text).unwrap();
        assert_eq!(settings.tier, AccuracyTier::Truncated);
        assert!(!settings.aspects.include_minor);
        assert_eq!(settings.aspects.luminary_bonus_major, 3.0);
        assert_eq!(settings.aspects.luminary_bonus_minor, 1.0);
        assert_eq!(settings.aspects.orbs.get(&AspectKind::Trine), Some(&6.5));
        assert_eq!(settings.aspects.orbs.get(&AspectKind::SemiSextile), Some(&1.0));
        assert_eq!(settings.harmony.conflicting_weight, 10);
        assert_eq!(settings.harmony.reinforcing_weight, 12);
    }

    #[test]
    fn test_unknown_names_rejected() {
        let err = parse_chart_settings("[chart]\ntier = \"de441\"").unwrap_err();
        assert!(err.to_string().contains("de441"));

        let err = parse_chart_settings("[aspects]\norbs = { septile = 1.0 }").unwrap_err();
        assert!(err.to_string().contains("septile"));

        assert!(parse_chart_settings("[aspects]\norbs = { trine = -1.0 }").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[harmony]\nbase_score = 40").unwrap();

        let settings = load_chart_settings_from(file.path()).unwrap();
        assert_eq!(settings.harmony.base_score, 40);

        let missing = file.path().with_extension("missing");
        assert!(load_chart_settings_from(&missing).is_err());
    }
}

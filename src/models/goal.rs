//! Goal settings, presets and macro styles
//!
//! Base settings come straight from the user. Presets and styles are closed
//! sets that layer overrides on top; see `nutrition::goals` for the merge.

use serde::{Deserialize, Serialize};

/// Named bundle of goal settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Base settings are used as-is
    #[default]
    Custom,
    Cut,
    Recomp,
    LeanBulk,
}

impl Preset {
    /// Every preset, in selector order
    pub const ALL: [Preset; 4] = [Preset::Custom, Preset::Cut, Preset::Recomp, Preset::LeanBulk];

    /// Short name for tool inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Custom => "custom",
            Preset::Cut => "cut",
            Preset::Recomp => "recomp",
            Preset::LeanBulk => "lean_bulk",
        }
    }

    /// Display label, as written to exports
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Custom => "Custom",
            Preset::Cut => "Cut (-20%)",
            Preset::Recomp => "Recomp (0%)",
            Preset::LeanBulk => "Lean Bulk (+10%)",
        }
    }

    /// Parse from the short name or the label
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase().replace(['-', ' '], "_");
        if lower == "custom" {
            Some(Preset::Custom)
        } else if lower.starts_with("cut") {
            Some(Preset::Cut)
        } else if lower.starts_with("recomp") {
            Some(Preset::Recomp)
        } else if lower.starts_with("lean_bulk") || lower.starts_with("leanbulk") {
            Some(Preset::LeanBulk)
        } else {
            None
        }
    }
}

/// Named fat-percentage profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroStyle {
    #[default]
    Balanced,
    LowCarb,
    HighCarb,
}

impl MacroStyle {
    /// Every style, in selector order
    pub const ALL: [MacroStyle; 3] = [MacroStyle::Balanced, MacroStyle::LowCarb, MacroStyle::HighCarb];

    /// Short name for tool inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            MacroStyle::Balanced => "balanced",
            MacroStyle::LowCarb => "low_carb",
            MacroStyle::HighCarb => "high_carb",
        }
    }

    /// Display label, as written to exports
    pub fn label(&self) -> &'static str {
        match self {
            MacroStyle::Balanced => "Balanced (30% fat)",
            MacroStyle::LowCarb => "Low-carb (35% fat)",
            MacroStyle::HighCarb => "High-carb (25% fat)",
        }
    }

    /// Fat percent this style sets, regardless of the base value
    pub fn fat_percent(&self) -> u32 {
        match self {
            MacroStyle::Balanced => 30,
            MacroStyle::LowCarb => 35,
            MacroStyle::HighCarb => 25,
        }
    }

    /// Parse from the short name or the label
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase().replace(['-', ' '], "_");
        if lower.starts_with("balanced") {
            Some(MacroStyle::Balanced)
        } else if lower.starts_with("low_carb") || lower.starts_with("lowcarb") {
            Some(MacroStyle::LowCarb)
        } else if lower.starts_with("high_carb") || lower.starts_with("highcarb") {
            Some(MacroStyle::HighCarb)
        } else {
            None
        }
    }
}

/// Goal inputs before presets and styles are applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSettings {
    /// -30..=20
    pub base_calorie_delta_pct: i32,
    /// Replaces TDEE x goal when set and positive
    pub override_calories: Option<f64>,
    /// 0.6..=1.2 grams per pound of the protein basis
    pub base_protein_per_lb: f64,
    pub use_lean_mass: bool,
    /// 20..=40
    pub base_fat_percent: u32,
    pub meals: u32,
    pub preset: Preset,
    pub style: MacroStyle,
}

/// Settings actually used for calculation, built fresh for every run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveGoal {
    pub calorie_delta_pct: i32,
    pub protein_per_lb: f64,
    pub fat_percent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing_accepts_labels() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_str(preset.label()), Some(preset));
            assert_eq!(Preset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(Preset::from_str("Lean Bulk"), Some(Preset::LeanBulk));
        assert_eq!(Preset::from_str("bulk"), None);
    }

    #[test]
    fn test_style_parsing_accepts_labels() {
        for style in MacroStyle::ALL {
            assert_eq!(MacroStyle::from_str(style.label()), Some(style));
            assert_eq!(MacroStyle::from_str(style.as_str()), Some(style));
        }
        assert_eq!(MacroStyle::from_str("keto"), None);
    }
}

//! Goal resolution
//!
//! Layers a macro style and then a preset over the base settings. Order
//! matters: the style always overwrites fat percent, and the preset then
//! adjusts what the style left behind.

use crate::models::{EffectiveGoal, GoalSettings, MacroStyle, Preset};

/// Fat percent band presets keep, and the value used when outside it
const FAT_BAND: (u32, u32) = (25, 35);
const FAT_RESET: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
enum FatRule {
    AtLeast(u32),
    WithinBandOrReset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PresetRule {
    calorie_delta_pct: i32,
    min_protein_per_lb: f64,
    fat: FatRule,
}

fn preset_rule(preset: Preset) -> Option<PresetRule> {
    match preset {
        Preset::Custom => None,
        Preset::Cut => Some(PresetRule {
            calorie_delta_pct: -20,
            min_protein_per_lb: 1.0,
            fat: FatRule::AtLeast(25),
        }),
        Preset::Recomp => Some(PresetRule {
            calorie_delta_pct: 0,
            min_protein_per_lb: 0.9,
            fat: FatRule::WithinBandOrReset,
        }),
        Preset::LeanBulk => Some(PresetRule {
            calorie_delta_pct: 10,
            min_protein_per_lb: 0.8,
            fat: FatRule::WithinBandOrReset,
        }),
    }
}

pub fn apply_style(goal: EffectiveGoal, style: MacroStyle) -> EffectiveGoal {
    EffectiveGoal {
        fat_percent: style.fat_percent(),
        ..goal
    }
}

/// Presets only ever raise protein; Custom leaves the goal untouched
pub fn apply_preset(goal: EffectiveGoal, preset: Preset) -> EffectiveGoal {
    let Some(rule) = preset_rule(preset) else {
        return goal;
    };

    let fat_percent = match rule.fat {
        FatRule::AtLeast(min) => goal.fat_percent.max(min),
        FatRule::WithinBandOrReset => {
            let (low, high) = FAT_BAND;
            if (low..=high).contains(&goal.fat_percent) {
                goal.fat_percent
            } else {
                FAT_RESET
            }
        }
    };

    EffectiveGoal {
        calorie_delta_pct: rule.calorie_delta_pct,
        protein_per_lb: goal.protein_per_lb.max(rule.min_protein_per_lb),
        fat_percent,
    }
}

/// Base settings -> style -> preset
pub fn resolve_effective_goal(settings: &GoalSettings) -> EffectiveGoal {
    let base = EffectiveGoal {
        calorie_delta_pct: settings.base_calorie_delta_pct,
        protein_per_lb: settings.base_protein_per_lb,
        fat_percent: settings.base_fat_percent,
    };
    apply_preset(apply_style(base, settings.style), settings.preset)
}

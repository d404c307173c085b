//! Plan result model
//!
//! Output of one pipeline run. Values are unrounded; rounding happens at
//! display/export time.

use serde::{Deserialize, Serialize};

use super::goal::EffectiveGoal;

/// Which BMR equation produced the estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmrMethod {
    KatchMcArdle,
    MifflinStJeor,
}

impl BmrMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            BmrMethod::KatchMcArdle => "Katch–McArdle",
            BmrMethod::MifflinStJeor => "Mifflin–St Jeor",
        }
    }
}

/// Where the target calories came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalSource {
    Override,
    TdeeTimesGoal,
}

impl GoalSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalSource::Override => "Override",
            GoalSource::TdeeTimesGoal => "TDEE × goal",
        }
    }
}

/// Mass that protein grams are scaled against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProteinBasis {
    LeanMass,
    BodyWeight,
}

impl ProteinBasis {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProteinBasis::LeanMass => "Lean mass",
            ProteinBasis::BodyWeight => "Body weight",
        }
    }
}

/// One macronutrient's daily amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroAmount {
    pub grams: f64,
    pub kcal: f64,
    /// Share of target calories, 0 when target is not positive
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: MacroAmount,
    pub fat: MacroAmount,
    pub carbs: MacroAmount,
}

impl MacroBreakdown {
    pub fn total_kcal(&self) -> f64 {
        self.protein.kcal + self.fat.kcal + self.carbs.kcal
    }
}

/// Daily grams divided across meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerMeal {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Everything one computation produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub bmr_method: BmrMethod,
    pub goal_source: GoalSource,
    pub lean_mass_kg: Option<f64>,
    pub protein_basis: ProteinBasis,
    pub effective_goal: EffectiveGoal,
    pub macros: MacroBreakdown,
    pub per_meal: PerMeal,
}

impl PlanResult {
    /// Target relative to TDEE in percent, 0 when TDEE is not positive
    pub fn delta_vs_tdee_pct(&self) -> f64 {
        if self.tdee > 0.0 {
            (self.target_calories - self.tdee) / self.tdee * 100.0
        } else {
            0.0
        }
    }
}

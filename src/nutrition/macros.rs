//! Target calories and macro split
//!
//! Protein is sized from body mass, fat from a share of calories, and carbs
//! take whatever is left. When protein and fat already exceed the target,
//! carbs clamp to zero and protein/fat are left as computed, so the plan's
//! total can sit above the target.

use crate::models::{EffectiveGoal, GoalSource, MacroAmount, MacroBreakdown, PerMeal, ProteinBasis};

use super::units::kg_to_lb;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Override wins when set and positive, otherwise TDEE scaled by the goal delta
pub fn target_calories(
    tdee: f64,
    override_calories: Option<f64>,
    calorie_delta_pct: i32,
) -> (f64, GoalSource) {
    match override_calories {
        Some(calories) if calories > 0.0 => (calories, GoalSource::Override),
        _ => (
            tdee * (1.0 + f64::from(calorie_delta_pct) / 100.0),
            GoalSource::TdeeTimesGoal,
        ),
    }
}

/// Pounds that protein grams are scaled against
pub fn protein_basis_lb(
    weight_kg: f64,
    lean_mass_kg: Option<f64>,
    use_lean_mass: bool,
) -> (f64, ProteinBasis) {
    match lean_mass_kg {
        Some(lean) if use_lean_mass => (kg_to_lb(lean), ProteinBasis::LeanMass),
        _ => (kg_to_lb(weight_kg), ProteinBasis::BodyWeight),
    }
}

fn percent_of(kcal: f64, target_calories: f64) -> f64 {
    if target_calories > 0.0 {
        kcal / target_calories * 100.0
    } else {
        0.0
    }
}

/// Split target calories into protein, fat and carbs
pub fn split_macros(target_calories: f64, basis_lb: f64, goal: &EffectiveGoal) -> MacroBreakdown {
    let protein_g = basis_lb * goal.protein_per_lb;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = target_calories * (f64::from(goal.fat_percent) / 100.0);
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let remainder = target_calories - (protein_kcal + fat_kcal);
    if remainder < 0.0 {
        tracing::warn!(
            "Protein and fat exceed target by {:.1} kcal; carbs clamped to zero",
            -remainder
        );
    }
    let carbs_kcal = remainder.max(0.0);
    let carbs_g = carbs_kcal / KCAL_PER_G_CARBS;

    MacroBreakdown {
        protein: MacroAmount {
            grams: protein_g,
            kcal: protein_kcal,
            percent: percent_of(protein_kcal, target_calories),
        },
        fat: MacroAmount {
            grams: fat_g,
            kcal: fat_kcal,
            percent: percent_of(fat_kcal, target_calories),
        },
        carbs: MacroAmount {
            grams: carbs_g,
            kcal: carbs_kcal,
            percent: percent_of(carbs_kcal, target_calories),
        },
    }
}

/// Divide daily grams across meals; zero meals yields zeros
pub fn per_meal(macros: &MacroBreakdown, meals: u32) -> PerMeal {
    if meals == 0 {
        return PerMeal::default();
    }
    let meals = f64::from(meals);
    PerMeal {
        protein_g: macros.protein.grams / meals,
        fat_g: macros.fat.grams / meals,
        carbs_g: macros.carbs.grams / meals,
    }
}

//! Plan pipeline
//!
//! Single pass: lean mass -> BMR -> TDEE -> effective goal -> target
//! calories -> macro split -> per-meal amounts.

use crate::models::{GoalSettings, PlanResult, UserProfile};

use super::body::lean_mass_kg;
use super::energy::{calculate_bmr, calculate_tdee};
use super::goals::resolve_effective_goal;
use super::macros::{per_meal, protein_basis_lb, split_macros, target_calories};

/// Compute a plan. Pure: identical inputs give identical results.
pub fn compute_plan(profile: &UserProfile, settings: &GoalSettings) -> PlanResult {
    let lean_mass_kg = lean_mass_kg(profile.weight_kg, profile.body_fat_pct);
    let (bmr, bmr_method) = calculate_bmr(profile, lean_mass_kg);
    let tdee = calculate_tdee(bmr, profile.activity);

    let effective_goal = resolve_effective_goal(settings);
    let (target_calories, goal_source) =
        target_calories(tdee, settings.override_calories, effective_goal.calorie_delta_pct);

    let (basis_lb, protein_basis) =
        protein_basis_lb(profile.weight_kg, lean_mass_kg, settings.use_lean_mass);
    let macros = split_macros(target_calories, basis_lb, &effective_goal);
    let per_meal = per_meal(&macros, settings.meals);

    tracing::debug!(
        bmr,
        tdee,
        target_calories,
        method = bmr_method.display_name(),
        source = goal_source.display_name(),
        "Computed plan"
    );

    PlanResult {
        bmr,
        tdee,
        target_calories,
        bmr_method,
        goal_source,
        lean_mass_kg,
        protein_basis,
        effective_goal,
        macros,
        per_meal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, BmrMethod, GoalSource, MacroStyle, Preset, ProteinBasis, Sex,
    };

    fn profile(body_fat_pct: Option<f64>) -> UserProfile {
        UserProfile {
            sex: Sex::Male,
            age: 30,
            height_cm: 178.0,
            weight_kg: 77.1,
            body_fat_pct,
            activity: ActivityLevel::Moderate,
        }
    }

    fn settings() -> GoalSettings {
        GoalSettings {
            base_calorie_delta_pct: 0,
            override_calories: None,
            base_protein_per_lb: 0.9,
            use_lean_mass: true,
            base_fat_percent: 30,
            meals: 3,
            preset: Preset::Custom,
            style: MacroStyle::Balanced,
        }
    }

    #[test]
    fn test_plan_without_body_fat() {
        let plan = compute_plan(&profile(None), &settings());
        assert_eq!(plan.bmr_method, BmrMethod::MifflinStJeor);
        assert!((plan.bmr - 1738.5).abs() < 1e-9);
        assert!((plan.tdee - 1738.5 * 1.55).abs() < 1e-9);
        assert!((plan.target_calories - plan.tdee).abs() < 1e-9);
        assert_eq!(plan.protein_basis, ProteinBasis::BodyWeight);
        assert_eq!(plan.lean_mass_kg, None);
    }

    #[test]
    fn test_plan_with_body_fat() {
        let plan = compute_plan(&profile(Some(18.0)), &settings());
        assert_eq!(plan.bmr_method, BmrMethod::KatchMcArdle);
        assert!((plan.bmr - 1735.5952).abs() < 1e-6);
        assert_eq!(plan.protein_basis, ProteinBasis::LeanMass);
        let expected_protein = 63.222 / 0.45359237 * 0.9;
        assert!((plan.macros.protein.grams - expected_protein).abs() < 1e-6);
    }

    #[test]
    fn test_cut_preset_ignores_base_delta() {
        let mut s = settings();
        s.base_calorie_delta_pct = 15;
        s.preset = Preset::Cut;
        let plan = compute_plan(&profile(None), &s);
        assert_eq!(plan.effective_goal.calorie_delta_pct, -20);
        assert!((plan.target_calories - plan.tdee * 0.8).abs() < 1e-9);
        assert!((plan.delta_vs_tdee_pct() + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_override_ignores_tdee() {
        let mut s = settings();
        s.override_calories = Some(2000.0);
        let plan = compute_plan(&profile(Some(18.0)), &s);
        assert_eq!(plan.goal_source, GoalSource::Override);
        assert_eq!(plan.target_calories, 2000.0);
    }

    #[test]
    fn test_macros_non_negative_and_sum_to_target() {
        for preset in Preset::ALL {
            for style in MacroStyle::ALL {
                let mut s = settings();
                s.preset = preset;
                s.style = style;
                let plan = compute_plan(&profile(Some(25.0)), &s);
                let m = &plan.macros;
                assert!(m.protein.grams >= 0.0 && m.fat.grams >= 0.0 && m.carbs.grams >= 0.0);
                assert!((m.total_kcal() - plan.target_calories).abs() < 1e-6);
                let pct = m.protein.percent + m.fat.percent + m.carbs.percent;
                assert!((pct - 100.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_plan_is_idempotent() {
        let a = compute_plan(&profile(Some(18.0)), &settings());
        let b = compute_plan(&profile(Some(18.0)), &settings());
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        let mut p = profile(Some(70.0));
        p.weight_kg = 0.0;
        let plan = compute_plan(&p, &settings());
        // Katch-McArdle floor of 370 keeps BMR positive even at zero mass
        assert!((plan.bmr - 370.0).abs() < 1e-9);

        let mut s = settings();
        s.meals = 0;
        let plan = compute_plan(&profile(None), &s);
        assert_eq!(plan.per_meal.protein_g, 0.0);
    }

    #[test]
    fn test_zero_tdee_yields_zero_target_and_percentages() {
        // 10*0 + 6.25*0 - 5*1 + 5 = 0
        let p = UserProfile {
            sex: Sex::Male,
            age: 1,
            height_cm: 0.0,
            weight_kg: 0.0,
            body_fat_pct: None,
            activity: ActivityLevel::Moderate,
        };
        let mut s = settings();
        s.preset = Preset::Cut;
        let plan = compute_plan(&p, &s);
        assert_eq!(plan.bmr_method, BmrMethod::MifflinStJeor);
        assert_eq!(plan.tdee, 0.0);
        assert_eq!(plan.target_calories, 0.0);
        assert_eq!(plan.goal_source, GoalSource::TdeeTimesGoal);
        assert_eq!(plan.macros.protein.percent, 0.0);
        assert_eq!(plan.macros.fat.percent, 0.0);
        assert_eq!(plan.macros.carbs.percent, 0.0);
        assert_eq!(plan.delta_vs_tdee_pct(), 0.0);
    }
}

//! Plan calculation tools
//!
//! Runs the pipeline for a form input and shapes the result for display.

use serde::Serialize;

use crate::models::{
    ActivityLevel, GoalSource, MacroAmount, MacroStyle, PlanInput, PlanRequest, PlanResult, Preset,
};
use crate::nutrition::{compute_plan, round_n};

/// Headline numbers
#[derive(Debug, Serialize)]
pub struct PlanMetrics {
    pub bmr: f64,
    pub bmr_method: &'static str,
    pub tdee: f64,
    pub activity: &'static str,
    pub target_calories: f64,
    /// Target vs TDEE, one decimal
    pub delta_vs_tdee_pct: f64,
}

/// Settings after presets and styles were applied
#[derive(Debug, Serialize)]
pub struct AppliedSettings {
    pub preset: &'static str,
    pub style: &'static str,
    pub calorie_change_pct: i32,
    /// True when an override replaced the calorie change
    pub calorie_change_overridden: bool,
    pub protein_per_lb: f64,
    pub fat_percent: u32,
    pub protein_basis: &'static str,
    pub goal_source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MacroRow {
    #[serde(rename = "macro")]
    pub name: &'static str,
    pub grams: f64,
    pub calories: f64,
    pub percent: f64,
}

impl MacroRow {
    fn new(name: &'static str, amount: &MacroAmount) -> Self {
        Self {
            name,
            grams: round_n(amount.grams, 0),
            calories: round_n(amount.kcal, 0),
            percent: round_n(amount.percent, 0),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PerMealView {
    pub meals: u32,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Response for calculate_plan
#[derive(Debug, Serialize)]
pub struct PlanView {
    pub metrics: PlanMetrics,
    pub applied_settings: AppliedSettings,
    pub macros: Vec<MacroRow>,
    pub per_meal: PerMealView,
}

pub fn build_plan_view(request: &PlanRequest, plan: &PlanResult) -> PlanView {
    let goal = &plan.effective_goal;
    PlanView {
        metrics: PlanMetrics {
            bmr: round_n(plan.bmr, 0),
            bmr_method: plan.bmr_method.display_name(),
            tdee: round_n(plan.tdee, 0),
            activity: request.activity.label(),
            target_calories: round_n(plan.target_calories, 0),
            delta_vs_tdee_pct: round_n(plan.delta_vs_tdee_pct(), 1),
        },
        applied_settings: AppliedSettings {
            preset: request.goal.preset.label(),
            style: request.goal.style.label(),
            calorie_change_pct: goal.calorie_delta_pct,
            calorie_change_overridden: plan.goal_source == GoalSource::Override,
            protein_per_lb: round_n(goal.protein_per_lb, 2),
            fat_percent: goal.fat_percent,
            protein_basis: plan.protein_basis.display_name(),
            goal_source: plan.goal_source.display_name(),
        },
        macros: vec![
            MacroRow::new("Protein", &plan.macros.protein),
            MacroRow::new("Fat", &plan.macros.fat),
            MacroRow::new("Carbs", &plan.macros.carbs),
        ],
        per_meal: PerMealView {
            meals: request.goal.meals,
            protein_g: round_n(plan.per_meal.protein_g, 1),
            fat_g: round_n(plan.per_meal.fat_g, 1),
            carbs_g: round_n(plan.per_meal.carbs_g, 1),
        },
    }
}

/// Validate the input and run the pipeline
pub fn run_plan(input: &PlanInput) -> Result<(PlanRequest, PlanResult), String> {
    let request = input.validate().map_err(|e| e.to_string())?;
    let plan = compute_plan(&request.profile(), &request.goal);
    Ok((request, plan))
}

pub fn calculate_plan(input: &PlanInput) -> Result<PlanView, String> {
    let (request, plan) = run_plan(input)?;
    Ok(build_plan_view(&request, &plan))
}

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ActivityOption {
    pub value: &'static str,
    pub label: &'static str,
    pub multiplier: f64,
}

#[derive(Debug, Serialize)]
pub struct PresetOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StyleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub fat_percent: u32,
}

/// Response for list_options
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub activity_levels: Vec<ActivityOption>,
    pub presets: Vec<PresetOption>,
    pub styles: Vec<StyleOption>,
}

pub fn list_options() -> OptionsResponse {
    OptionsResponse {
        activity_levels: ActivityLevel::ALL
            .iter()
            .map(|a| ActivityOption {
                value: a.as_str(),
                label: a.label(),
                multiplier: a.multiplier(),
            })
            .collect(),
        presets: Preset::ALL
            .iter()
            .map(|p| PresetOption { value: p.as_str(), label: p.label() })
            .collect(),
        styles: MacroStyle::ALL
            .iter()
            .map(|s| StyleOption {
                value: s.as_str(),
                label: s.label(),
                fat_percent: s.fat_percent(),
            })
            .collect(),
    }
}

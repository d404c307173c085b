//! Plan export
//!
//! Serializes normalized inputs and computed results into the downloadable
//! plan document. Field names and rounding follow the published document
//! format, so the export reconstructs exactly what was displayed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::models::{MacroAmount, PlanInput, PlanRequest, PlanResult};
use crate::nutrition::{compute_plan, round_n};

/// File name used for written exports
pub const EXPORT_FILE_NAME: &str = "macro-plan.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportInputs {
    pub units: String,
    pub sex: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(rename = "bodyFatPct")]
    pub body_fat_pct: Option<f64>,
    pub activity: String,
    #[serde(rename = "calorieDeltaPct_applied")]
    pub calorie_delta_pct_applied: i32,
    #[serde(rename = "overrideCalories")]
    pub override_calories: f64,
    #[serde(rename = "proteinPerLb_applied")]
    pub protein_per_lb_applied: f64,
    #[serde(rename = "useLeanMassForProtein")]
    pub use_lean_mass_for_protein: bool,
    #[serde(rename = "fatPercent_applied")]
    pub fat_percent_applied: u32,
    pub meals: u32,
    pub preset: String,
    pub style: String,
}

/// Rounded macro amount: grams, kcal, percent of target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportMacro {
    pub g: f64,
    pub kcal: f64,
    pub pct: f64,
}

impl From<&MacroAmount> for ExportMacro {
    fn from(amount: &MacroAmount) -> Self {
        Self {
            g: round_n(amount.grams, 0),
            kcal: round_n(amount.kcal, 0),
            pct: round_n(amount.percent, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportMacros {
    pub protein: ExportMacro,
    pub fat: ExportMacro,
    pub carbs: ExportMacro,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportPerMeal {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResults {
    pub bmr: f64,
    pub tdee: f64,
    #[serde(rename = "targetCalories")]
    pub target_calories: f64,
    pub macros: ExportMacros,
    #[serde(rename = "perMeal")]
    pub per_meal: ExportPerMeal,
}

/// The full plan document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub inputs: ExportInputs,
    pub results: ExportResults,
}

pub fn build_export(request: &PlanRequest, plan: &PlanResult) -> ExportDocument {
    let profile = request.profile();
    let goal = &plan.effective_goal;

    let inputs = ExportInputs {
        units: request.units().as_str().to_string(),
        sex: request.sex.as_str().to_string(),
        age: request.age,
        height_cm: round_n(profile.height_cm, 1),
        weight_kg: round_n(profile.weight_kg, 1),
        body_fat_pct: request.body_fat_pct,
        activity: request.activity.label().to_string(),
        calorie_delta_pct_applied: goal.calorie_delta_pct,
        override_calories: request.goal.override_calories.unwrap_or(0.0),
        protein_per_lb_applied: round_n(goal.protein_per_lb, 2),
        use_lean_mass_for_protein: request.goal.use_lean_mass,
        fat_percent_applied: goal.fat_percent,
        meals: request.goal.meals,
        preset: request.goal.preset.label().to_string(),
        style: request.goal.style.label().to_string(),
    };

    let results = ExportResults {
        bmr: round_n(plan.bmr, 0),
        tdee: round_n(plan.tdee, 0),
        target_calories: round_n(plan.target_calories, 0),
        macros: ExportMacros {
            protein: ExportMacro::from(&plan.macros.protein),
            fat: ExportMacro::from(&plan.macros.fat),
            carbs: ExportMacro::from(&plan.macros.carbs),
        },
        per_meal: ExportPerMeal {
            protein_g: round_n(plan.per_meal.protein_g, 1),
            fat_g: round_n(plan.per_meal.fat_g, 1),
            carbs_g: round_n(plan.per_meal.carbs_g, 1),
        },
    };

    ExportDocument { inputs, results }
}

impl ExportDocument {
    /// Validate the input, run the pipeline and package the document
    pub fn from_input(input: &PlanInput) -> CalcResult<Self> {
        let request = input.validate()?;
        let plan = compute_plan(&request.profile(), &request.goal);
        Ok(build_export(&request, &plan))
    }

    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write as pretty JSON, creating parent directories as needed
    pub fn write_to(&self, path: &Path) -> CalcResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        tracing::info!("Wrote plan export to {}", path.display());
        Ok(())
    }
}

/// Response for export_plan
#[derive(Debug, Serialize)]
pub struct ExportPlanResponse {
    pub document: ExportDocument,
    /// Where the document was written, if it was
    pub written_to: Option<String>,
}

/// Build the export and optionally write it into `export_dir`
pub fn export_plan(input: &PlanInput, export_dir: Option<&Path>) -> Result<ExportPlanResponse, String> {
    let document = ExportDocument::from_input(input).map_err(|e| e.to_string())?;

    let written_to = match export_dir {
        Some(dir) => {
            let path: PathBuf = dir.join(EXPORT_FILE_NAME);
            document
                .write_to(&path)
                .map_err(|e| format!("Failed to write export: {}", e))?;
            Some(path.display().to_string())
        }
        None => None,
    };

    Ok(ExportPlanResponse { document, written_to })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_input() -> PlanInput {
        PlanInput {
            units: "metric".to_string(),
            height_cm: Some(178.0),
            weight_kg: Some(77.1),
            body_fat_pct: Some(18.0),
            ..PlanInput::default()
        }
    }

    #[test]
    fn test_export_values() {
        let doc = ExportDocument::from_input(&metric_input()).unwrap();
        assert_eq!(doc.inputs.units, "metric");
        assert_eq!(doc.inputs.sex, "Male");
        assert_eq!(doc.inputs.height_cm, 178.0);
        assert_eq!(doc.inputs.body_fat_pct, Some(18.0));
        assert_eq!(doc.inputs.preset, "Custom");
        assert_eq!(doc.inputs.style, "Balanced (30% fat)");
        assert_eq!(doc.results.bmr, 1736.0);
        assert_eq!(doc.results.tdee, 2690.0);
        assert_eq!(doc.results.target_calories, 2690.0);
        assert_eq!(doc.results.macros.protein, ExportMacro { g: 125.0, kcal: 502.0, pct: 19.0 });
        assert_eq!(doc.results.macros.fat, ExportMacro { g: 90.0, kcal: 807.0, pct: 30.0 });
        assert_eq!(doc.results.macros.carbs, ExportMacro { g: 345.0, kcal: 1381.0, pct: 51.0 });
        assert_eq!(doc.results.per_meal, ExportPerMeal { protein_g: 41.8, fat_g: 29.9, carbs_g: 115.1 });
    }

    #[test]
    fn test_export_field_names() {
        let doc = ExportDocument::from_input(&metric_input()).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        let inputs = value["inputs"].as_object().unwrap();
        for key in [
            "units", "sex", "age", "height_cm", "weight_kg", "bodyFatPct", "activity",
            "calorieDeltaPct_applied", "overrideCalories", "proteinPerLb_applied",
            "useLeanMassForProtein", "fatPercent_applied", "meals", "preset", "style",
        ] {
            assert!(inputs.contains_key(key), "missing inputs.{}", key);
        }
        assert_eq!(inputs.len(), 15);
        assert!(value["results"]["targetCalories"].is_number());
        assert!(value["results"]["perMeal"]["protein_g"].is_number());
        assert!(value["results"]["macros"]["carbs"]["pct"].is_number());
    }

    #[test]
    fn test_absent_body_fat_exports_null() {
        let input = PlanInput { body_fat_pct: None, ..metric_input() };
        let value = serde_json::to_value(ExportDocument::from_input(&input).unwrap()).unwrap();
        assert!(value["inputs"]["bodyFatPct"].is_null());
        assert_eq!(value["inputs"]["overrideCalories"], 0.0);
    }

    #[test]
    fn test_export_plan_without_dir_does_not_write() {
        let response = export_plan(&metric_input(), None).unwrap();
        assert!(response.written_to.is_none());
    }
}

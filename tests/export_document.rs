//! End-to-end plan export tests: input document -> pipeline -> export JSON

use macro_calc::models::PlanInput;
use macro_calc::tools::export::{export_plan, ExportDocument, EXPORT_FILE_NAME};

fn imperial_input() -> PlanInput {
    serde_json::from_str(
        r#"{
            "units": "Imperial (lb, ft/in)",
            "sex": "Male",
            "age": 30,
            "height_ft": 5,
            "height_in": 10,
            "weight_lb": 170,
            "activity": "Moderate (1.55)",
            "preset": "Custom",
            "style": "Balanced (30% fat)"
        }"#,
    )
    .unwrap()
}

#[test]
fn test_imperial_export_normalizes_inputs() {
    let doc = ExportDocument::from_input(&imperial_input()).unwrap();
    assert_eq!(doc.inputs.units, "imperial");
    assert_eq!(doc.inputs.height_cm, 177.8);
    assert_eq!(doc.inputs.weight_kg, 77.1);
    assert_eq!(doc.inputs.activity, "Moderate (1.55)");
    assert_eq!(doc.results.bmr, 1737.0);
    assert_eq!(doc.results.tdee, 2693.0);
    assert_eq!(doc.results.macros.protein.g, 153.0);
    assert_eq!(doc.results.per_meal.protein_g, 51.0);
}

#[test]
fn test_export_is_idempotent() {
    let input = imperial_input();
    let first = ExportDocument::from_input(&input).unwrap().to_json().unwrap();
    let second = ExportDocument::from_input(&input).unwrap().to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_export_round_trips_through_json() {
    let doc = ExportDocument::from_input(&imperial_input()).unwrap();
    let parsed: ExportDocument = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn test_lean_bulk_export_applies_preset() {
    let mut input = imperial_input();
    input.preset = "lean_bulk".to_string();
    input.calorie_delta_pct = -30;
    input.protein_per_lb = 0.6;
    let doc = ExportDocument::from_input(&input).unwrap();
    assert_eq!(doc.inputs.calorie_delta_pct_applied, 10);
    assert_eq!(doc.inputs.protein_per_lb_applied, 0.8);
    assert_eq!(doc.inputs.preset, "Lean Bulk (+10%)");
    assert!(doc.results.target_calories > doc.results.tdee);
}

#[test]
fn test_export_plan_writes_file() {
    let dir = std::env::temp_dir().join(format!("macro_calc_export_{}", std::process::id()));
    let response = export_plan(&imperial_input(), Some(&dir)).unwrap();
    let path = dir.join(EXPORT_FILE_NAME);
    assert_eq!(response.written_to, Some(path.display().to_string()));

    let written: ExportDocument =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, response.document);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_invalid_input_is_rejected() {
    let mut input = imperial_input();
    input.weight_lb = Some(20.0);
    assert!(ExportDocument::from_input(&input).is_err());
    assert!(export_plan(&input, None).is_err());
}

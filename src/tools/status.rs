//! Macro Calculator Status Tool
//!
//! Runtime status and usage instructions.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Plan calculation instructions for AI assistants
pub const PLAN_INSTRUCTIONS: &str = r#"
# Macro Calculator Instructions

Computes BMR, TDEE and daily macro targets from body metrics, activity and goal.

## Pipeline

1. Height/weight are converted to cm/kg (1 lb = 0.45359237 kg, 1 in = 2.54 cm).
2. If body fat % is given, lean mass = weight x (1 - bf/100).
3. BMR: **Katch–McArdle** (370 + 21.6 x lean kg) when lean mass is known,
   otherwise **Mifflin–St Jeor** (10w + 6.25h - 5a, +5 male / -161 female).
4. TDEE = BMR x activity multiplier.
5. Style sets fat %, then a preset (if not Custom) sets the calorie change,
   raises protein to its minimum and keeps fat % sensible.
6. Target calories = override (if > 0) or TDEE x (1 + change/100).
7. Protein and fat are set by rule; carbs fill the rest (never below zero).

## Inputs (calculate_plan / export_plan)

| Field | Range | Default |
|-------|-------|---------|
| units | imperial, metric | imperial |
| sex | male, female | male |
| age | 14-90 | 30 |
| height_ft / height_in / weight_lb | 3-8 / 0-11 / 60-600 | 5 / 10 / 170 |
| height_cm / weight_kg | 120-230 / 30-250 | 178 / 77.1 |
| body_fat_pct | 0-70, 0 = not provided | not provided |
| activity | sedentary, light, moderate, very, athlete | moderate |
| calorie_delta_pct | -30 to 20 | 0 |
| override_calories | 0-10000, 0 = off | 0 |
| protein_per_lb | 0.6-1.2 | 0.9 |
| use_lean_mass | true/false | true |
| fat_percent | 20-40 | 30 |
| meals | 1-8 | 3 |
| preset | custom, cut, recomp, lean_bulk | custom |
| style | balanced, low_carb, high_carb | balanced |

Call `list_options` for labels and multipliers.

## Presets

- **Cut**: -20% calories, protein >= 1.0 g/lb, fat >= 25%
- **Recomp**: 0% calories, protein >= 0.9 g/lb, fat reset to 30% if outside 25-35%
- **Lean Bulk**: +10% calories, protein >= 0.8 g/lb, fat reset to 30% if outside 25-35%

Presets override the calorie change slider; base values stay as entered.

## Notes

- Protein range of 0.6–1.2 g/lb (≈1.3–2.6 g/kg) of bodyweight or **lean mass** is commonly used.
- Fat at ~20–40% of calories helps cover essential fatty acids.
- Carbs fill remaining calories after protein & fat.
- If protein and fat alone exceed the target (aggressive override), carbs are
  zero and the plan total is above the target. Protein and fat are not scaled down.
- Activity multipliers estimate expenditure, so adjust calories based on progress over 2–3 weeks.
"#;

/// Status response
#[derive(Debug, Serialize)]
pub struct CalcStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub export_dir: String,
    pub export_dir_exists: bool,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks process start for uptime reporting
pub struct StatusTracker {
    start_time: Instant,
    export_dir: PathBuf,
}

impl StatusTracker {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            export_dir,
        }
    }

    pub fn get_status(&self) -> CalcStatus {
        let build_info = BuildInfo::CURRENT;

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            export_dir: self.export_dir.display().to_string(),
            export_dir_exists: self.export_dir.is_dir(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

//! Plan input boundary
//!
//! `PlanInput` is the flat, form-style document a caller sends. Validation
//! turns it into a `PlanRequest` whose values are all within the accepted
//! ranges; only a `PlanRequest` is ever handed to the pipeline.

use std::fmt::Display;

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::goal::{GoalSettings, MacroStyle, Preset};
use super::profile::{ActivityLevel, Sex, UnitSystem, UserProfile};
use crate::error::{CalcError, CalcResult};
use crate::nutrition::units;

/// Raw plan inputs as entered in a form
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PlanInput {
    /// Unit system: "imperial" (ft/in, lb) or "metric" (cm, kg). Default imperial
    #[serde(default = "default_units")]
    pub units: String,
    /// "male" or "female"
    #[serde(default = "default_sex")]
    pub sex: String,
    /// Age in years (14-90)
    #[serde(default = "default_age")]
    pub age: u32,
    /// Height feet, imperial only (3-8, default 5)
    pub height_ft: Option<u32>,
    /// Height inches, imperial only (0-11, default 10)
    pub height_in: Option<u32>,
    /// Weight in pounds, imperial only (60-600, default 170)
    pub weight_lb: Option<f64>,
    /// Height in cm, metric only (120-230, default 178)
    pub height_cm: Option<f64>,
    /// Weight in kg, metric only (30-250, default 77.1)
    pub weight_kg: Option<f64>,
    /// Body fat percent (0-70). Enables Katch-McArdle; 0 or missing means not provided
    pub body_fat_pct: Option<f64>,
    /// sedentary, light, moderate, very, athlete (or labels like "Moderate (1.55)")
    #[serde(default = "default_activity")]
    pub activity: String,
    /// Calorie change vs TDEE in percent (-30 to 20)
    #[serde(default)]
    pub calorie_delta_pct: i32,
    /// Fixed daily calories (0-10000). 0 disables the override
    #[serde(default)]
    pub override_calories: f64,
    /// Protein grams per lb of body weight or lean mass (0.6-1.2)
    #[serde(default = "default_protein_per_lb")]
    pub protein_per_lb: f64,
    /// Use lean mass as protein basis when body fat is provided
    #[serde(default = "default_true")]
    pub use_lean_mass: bool,
    /// Fat as percent of calories (20-40)
    #[serde(default = "default_fat_percent")]
    pub fat_percent: u32,
    /// Meals per day (1-8)
    #[serde(default = "default_meals")]
    pub meals: u32,
    /// custom, cut, recomp, lean_bulk
    #[serde(default = "default_preset")]
    pub preset: String,
    /// balanced, low_carb, high_carb
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_units() -> String { "imperial".to_string() }
fn default_sex() -> String { "male".to_string() }
fn default_age() -> u32 { 30 }
fn default_activity() -> String { "moderate".to_string() }
fn default_protein_per_lb() -> f64 { 0.9 }
fn default_true() -> bool { true }
fn default_fat_percent() -> u32 { 30 }
fn default_meals() -> u32 { 3 }
fn default_preset() -> String { "custom".to_string() }
fn default_style() -> String { "balanced".to_string() }

const DEFAULT_HEIGHT_FT: u32 = 5;
const DEFAULT_HEIGHT_IN: u32 = 10;
const DEFAULT_WEIGHT_LB: f64 = 170.0;
const DEFAULT_HEIGHT_CM: f64 = 178.0;
const DEFAULT_WEIGHT_KG: f64 = 77.1;

impl Default for PlanInput {
    fn default() -> Self {
        Self {
            units: default_units(),
            sex: default_sex(),
            age: default_age(),
            height_ft: None,
            height_in: None,
            weight_lb: None,
            height_cm: None,
            weight_kg: None,
            body_fat_pct: None,
            activity: default_activity(),
            calorie_delta_pct: 0,
            override_calories: 0.0,
            protein_per_lb: default_protein_per_lb(),
            use_lean_mass: default_true(),
            fat_percent: default_fat_percent(),
            meals: default_meals(),
            preset: default_preset(),
            style: default_style(),
        }
    }
}

/// Height and weight as entered, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "units", rename_all = "lowercase")]
pub enum Measurements {
    Imperial { feet: u32, inches: u32, pounds: f64 },
    Metric { height_cm: f64, weight_kg: f64 },
}

impl Measurements {
    pub fn units(&self) -> UnitSystem {
        match self {
            Measurements::Imperial { .. } => UnitSystem::Imperial,
            Measurements::Metric { .. } => UnitSystem::Metric,
        }
    }
}

/// Validated inputs for one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub sex: Sex,
    pub age: u32,
    pub measurements: Measurements,
    pub body_fat_pct: Option<f64>,
    pub activity: ActivityLevel,
    pub goal: GoalSettings,
}

impl PlanRequest {
    pub fn units(&self) -> UnitSystem {
        self.measurements.units()
    }

    /// Normalize into the canonical metric profile
    pub fn profile(&self) -> UserProfile {
        let (height_cm, weight_kg) = units::normalize(&self.measurements);
        UserProfile {
            sex: self.sex,
            age: self.age,
            height_cm,
            weight_kg,
            body_fat_pct: self.body_fat_pct,
            activity: self.activity,
        }
    }
}

fn check_range<T>(field: &'static str, value: T, min: T, max: T) -> CalcResult<T>
where
    T: PartialOrd + Display + Copy,
{
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(CalcError::invalid(
            field,
            format!("{} is outside {}..={}", value, min, max),
        ))
    }
}

impl PlanInput {
    /// Validate ranges and parse the enumerated options
    pub fn validate(&self) -> CalcResult<PlanRequest> {
        let units = UnitSystem::from_str(&self.units)
            .ok_or_else(|| CalcError::unknown("units", &self.units))?;
        let sex = Sex::from_str(&self.sex).ok_or_else(|| CalcError::unknown("sex", &self.sex))?;
        let activity = ActivityLevel::from_str(&self.activity)
            .ok_or_else(|| CalcError::unknown("activity", &self.activity))?;
        let preset = Preset::from_str(&self.preset)
            .ok_or_else(|| CalcError::unknown("preset", &self.preset))?;
        let style = MacroStyle::from_str(&self.style)
            .ok_or_else(|| CalcError::unknown("style", &self.style))?;

        let age = check_range("age", self.age, 14, 90)?;

        let measurements = match units {
            UnitSystem::Imperial => Measurements::Imperial {
                feet: check_range("height_ft", self.height_ft.unwrap_or(DEFAULT_HEIGHT_FT), 3, 8)?,
                inches: check_range("height_in", self.height_in.unwrap_or(DEFAULT_HEIGHT_IN), 0, 11)?,
                pounds: check_range("weight_lb", self.weight_lb.unwrap_or(DEFAULT_WEIGHT_LB), 60.0, 600.0)?,
            },
            UnitSystem::Metric => Measurements::Metric {
                height_cm: check_range("height_cm", self.height_cm.unwrap_or(DEFAULT_HEIGHT_CM), 120.0, 230.0)?,
                weight_kg: check_range("weight_kg", self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG), 30.0, 250.0)?,
            },
        };

        let body_fat_pct = match self.body_fat_pct {
            Some(pct) => Some(check_range("body_fat_pct", pct, 0.0, 70.0)?),
            None => None,
        }
        .filter(|pct| *pct > 0.0);

        let override_calories = check_range("override_calories", self.override_calories, 0.0, 10000.0)?;

        let goal = GoalSettings {
            base_calorie_delta_pct: check_range("calorie_delta_pct", self.calorie_delta_pct, -30, 20)?,
            override_calories: (override_calories > 0.0).then_some(override_calories),
            base_protein_per_lb: check_range("protein_per_lb", self.protein_per_lb, 0.6, 1.2)?,
            use_lean_mass: self.use_lean_mass,
            base_fat_percent: check_range("fat_percent", self.fat_percent, 20, 40)?,
            meals: check_range("meals", self.meals, 1, 8)?,
            preset,
            style,
        };

        Ok(PlanRequest {
            sex,
            age,
            measurements,
            body_fat_pct,
            activity,
            goal,
        })
    }
}

//! User profile model
//!
//! Body metrics and activity level in canonical metric units.

use serde::{Deserialize, Serialize};

/// Biological sex, selects the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Display string, as written to exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Unit system the measurements were entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet + inches, pounds
    Imperial,
    /// Centimeters, kilograms
    Metric,
}

impl UnitSystem {
    /// Short name used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }

    /// Label including the unit names
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "Imperial (lb, ft/in)",
            UnitSystem::Metric => "Metric (kg, cm)",
        }
    }

    /// Accepts the short name or the display label
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if lower.starts_with("imperial") {
            Some(UnitSystem::Imperial)
        } else if lower.starts_with("metric") {
            Some(UnitSystem::Metric)
        } else {
            None
        }
    }
}

/// Activity level with its fixed TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Very,
    Athlete,
}

impl ActivityLevel {
    /// Every level, in ascending order
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Very,
        ActivityLevel::Athlete,
    ];

    /// TDEE multiplier
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Very => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }

    /// Short name for tool inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Very => "very",
            ActivityLevel::Athlete => "athlete",
        }
    }

    /// Label including the multiplier, e.g. "Moderate (1.55)"
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (1.2)",
            ActivityLevel::Light => "Light (1.375)",
            ActivityLevel::Moderate => "Moderate (1.55)",
            ActivityLevel::Very => "Very (1.725)",
            ActivityLevel::Athlete => "Athlete (1.9)",
        }
    }

    /// Parse from the short name or the label; the label's first word decides
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let word = lower.split_whitespace().next().unwrap_or("");
        match word {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Some(ActivityLevel::Light),
            "moderate" | "moderately_active" => Some(ActivityLevel::Moderate),
            "very" | "very_active" => Some(ActivityLevel::Very),
            "athlete" | "extra_active" => Some(ActivityLevel::Athlete),
            _ => None,
        }
    }
}

/// Body metrics for one computation, always in kg/cm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// None when no body fat reading was supplied
    pub body_fat_pct: Option<f64>,
    pub activity: ActivityLevel,
}

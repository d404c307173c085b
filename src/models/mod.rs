//! Data models
//!
//! Plain types passed through the calculation pipeline.

mod goal;
mod plan;
mod profile;
mod request;

pub use goal::{EffectiveGoal, GoalSettings, MacroStyle, Preset};
pub use plan::{
    BmrMethod, GoalSource, MacroAmount, MacroBreakdown, PerMeal, PlanResult, ProteinBasis,
};
pub use profile::{ActivityLevel, Sex, UnitSystem, UserProfile};
pub use request::{Measurements, PlanInput, PlanRequest};

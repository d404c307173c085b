//! Nutrition calculation module
//!
//! The pure calculation core: unit normalization, body composition,
//! energy expenditure, goal resolution and the macro split.

pub mod body;
pub mod energy;
pub mod goals;
pub mod macros;
pub mod plan;
pub mod rounding;
pub mod units;

pub use body::lean_mass_kg;
pub use energy::{calculate_bmr, calculate_tdee, katch_mcardle, mifflin_st_jeor};
pub use goals::{apply_preset, apply_style, resolve_effective_goal};
pub use macros::{per_meal, protein_basis_lb, split_macros, target_calories};
pub use plan::compute_plan;
pub use rounding::round_n;
pub use units::{cm_to_in, in_to_cm, kg_to_lb, lb_to_kg, normalize};

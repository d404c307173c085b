//! Macro Calculator Library
//!
//! BMR, TDEE and macronutrient planning from body metrics and goals.

pub mod build_info;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;

pub use error::{CalcError, CalcResult};

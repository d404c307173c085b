//! Macro Calculator tools
//!
//! Tool implementations behind the MCP server and the export CLI.

pub mod export;
pub mod plan;
pub mod status;

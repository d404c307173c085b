//! Macro Calculator MCP Server Implementation
//!
//! Exposes plan calculation and export as MCP tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::PlanInput;
use crate::tools::export;
use crate::tools::plan;
use crate::tools::status::StatusTracker;

/// Macro Calculator MCP Service
#[derive(Clone)]
pub struct MacroCalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    export_dir: PathBuf,
    tool_router: ToolRouter<MacroCalcService>,
}

impl MacroCalcService {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(export_dir.clone()))),
            export_dir,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExportPlanParams {
    #[serde(flatten)]
    pub input: PlanInput,
    /// Also write macro-plan.json to the export directory (default false)
    #[serde(default)]
    pub write_file: bool,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MacroCalcService {
    #[tool(description = "Get the current status of the macro calculator including build info, export directory, and process information")]
    async fn calc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for the plan inputs, presets, styles and how the calculation works. Call this when unsure which values to pass.")]
    fn plan_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLAN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLAN_INSTRUCTIONS)]))
    }

    #[tool(description = "List activity levels (with multipliers), goal presets and macro styles")]
    fn list_options(&self) -> Result<CallToolResult, McpError> {
        to_json(&plan::list_options())
    }

    #[tool(description = "Calculate BMR, TDEE, target calories, daily macros and per-meal amounts from body metrics, activity level and goal settings")]
    fn calculate_plan(&self, Parameters(p): Parameters<PlanInput>) -> Result<CallToolResult, McpError> {
        let result = plan::calculate_plan(&p).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Build the exportable plan document (inputs + results JSON). Set write_file=true to also save macro-plan.json to the export directory.")]
    fn export_plan(&self, Parameters(p): Parameters<ExportPlanParams>) -> Result<CallToolResult, McpError> {
        let dir = p.write_file.then_some(self.export_dir.as_path());
        let result = export::export_plan(&p.input, dir).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MacroCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macro_calc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Macro Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Macro Calculator - BMR (Katch–McArdle or Mifflin–St Jeor), TDEE and macro targets. \
                 Call plan_instructions first if unsure about inputs. \
                 list_options shows activity levels, presets and styles. \
                 calculate_plan returns metrics, applied settings, daily macros and per-meal grams. \
                 export_plan returns the plan document and can write macro-plan.json. \
                 calc_status reports build and process info."
                    .into(),
            ),
        }
    }
}

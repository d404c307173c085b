//! Macro Calculator
//!
//! An MCP server for BMR, TDEE and macronutrient planning.

use macro_calc::build_info;
use macro_calc::config;
use macro_calc::mcp::MacroCalcService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so stdout stays free for MCP
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config::DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let export_dir = config::get_export_dir();
    eprintln!("Export directory: {}", export_dir.display());

    let service = MacroCalcService::new(export_dir);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}

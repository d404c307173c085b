//! Compute a plan from an input JSON file and write the export document
//! Usage: cargo run --bin export_plan -- <input.json> [output.json]
//!
//! Without an output path the document is printed to stdout.

use std::path::PathBuf;

use macro_calc::models::PlanInput;
use macro_calc::tools::export::ExportDocument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(macro_calc::config::DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(input_path) = args.get(1) else {
        eprintln!("Usage: export_plan <input.json> [output.json]");
        std::process::exit(2);
    };

    let raw = std::fs::read_to_string(input_path)?;
    let input: PlanInput = serde_json::from_str(&raw)?;
    let document = ExportDocument::from_input(&input)?;

    match args.get(2).map(PathBuf::from) {
        Some(output) => {
            document.write_to(&output)?;
            eprintln!("Plan written to {}", output.display());
        }
        None => println!("{}", document.to_json()?),
    }

    Ok(())
}

//! Runtime configuration
//!
//! Environment-driven; paths default relative to the project root.

use std::path::PathBuf;

/// Overrides the directory plan exports are written to
pub const EXPORT_DIR_ENV: &str = "MACRO_CALC_EXPORT_DIR";

/// Default tracing directive when RUST_LOG does not set one
pub const DEFAULT_LOG_DIRECTIVE: &str = "macro_calc=info";

/// Project root, found by stepping out of target/release or target/debug
pub fn project_root() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }
    path
}

/// Get the export directory from environment or use `<root>/exports`
pub fn get_export_dir() -> PathBuf {
    std::env::var(EXPORT_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| project_root().join("exports"))
}

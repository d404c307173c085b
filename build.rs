//! Build script for Macro Calculator
//!
//! Increments build number on each recompilation and embeds build metadata.

use std::fs;
use std::path::Path;

fn main() {
    // Only rerun when src/ changes
    println!("cargo:rerun-if-changed=src");

    // Read the previous build number, starting at 0
    let build_number_path = Path::new("build_number.txt");

    let current_build: u64 = fs::read_to_string(build_number_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let new_build = current_build + 1;

    // Persist the incremented number
    fs::write(build_number_path, new_build.to_string())
        .expect("Failed to write build number file");

    // Embed number and UTC timestamp for build_info.rs
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=MACRO_CALC_BUILD_NUMBER={}", new_build);
    println!("cargo:rustc-env=MACRO_CALC_BUILD_TIMESTAMP={}", timestamp);
}

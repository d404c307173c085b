//! Build information module
//!
//! Build number and timestamp embedded by `build.rs`, reported by
//! `calc_status` and the startup banner.

use serde::Serialize;

/// Build number, 0 when built without the build script's env
pub const BUILD_NUMBER: u64 = match option_env!("MACRO_CALC_BUILD_NUMBER") {
    Some(s) => parse_build_number(s),
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("MACRO_CALC_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Digits only; anything else yields 0
const fn parse_build_number(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return 0;
        }
        result = result * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    result
}

/// Version and build stamp of the running binary
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub const CURRENT: BuildInfo = BuildInfo {
        version: VERSION,
        build_number: BUILD_NUMBER,
        build_timestamp: BUILD_TIMESTAMP,
    };

    /// e.g. "v1.0.0 build 12"
    pub fn short_label(&self) -> String {
        format!("v{} build {}", self.version, self.build_number)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::CURRENT;
    eprintln!("-----------------------------------------------");
    eprintln!("  Macro Calculator {}", info.short_label());
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("-----------------------------------------------");
}

//! Build metadata
//!
//! Stamped in by `build.rs` and attached to every report so a figure can be
//! traced back to the binary that produced it.

use serde::Serialize;

/// Running build number, 0 when built without the build script
pub const BUILD_NUMBER: u64 = match option_env!("LARDER_BUILD_NUMBER") {
    Some(s) => parse_u64(s),
    None => 0,
};

/// UTC time of the build
pub const BUILT_AT: &str = match option_env!("LARDER_BUILT_AT") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Non-digit input yields 0
const fn parse_u64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return 0;
        }
        value = value * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    value
}

/// Version and build stamp of the running binary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub built_at: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: VERSION,
            build_number: BUILD_NUMBER,
            built_at: BUILT_AT,
        }
    }

    /// One-line banner for stderr
    pub fn banner(&self) -> String {
        format!(
            "Larder {} (build {}, {})",
            self.version, self.build_number, self.built_at
        )
    }
}

//! Build script for Larder
//!
//! Stamps each build with a running build number and a UTC timestamp.

use std::fs;
use std::io;
use std::path::PathBuf;

fn next_build_number(counter: &PathBuf) -> io::Result<u64> {
    let previous = match fs::read_to_string(counter) {
        Ok(text) => text.trim().parse().unwrap_or(0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
        Err(e) => return Err(e),
    };
    let next = previous + 1;
    fs::write(counter, next.to_string())?;
    Ok(next)
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src");

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let counter = PathBuf::from(manifest_dir).join("build_number.txt");

    let build_number = next_build_number(&counter)?;
    let built_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=LARDER_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=LARDER_BUILT_AT={}", built_at);
    Ok(())
}

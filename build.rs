//! Build script for BestiNut
//!
//! Bumps the local build counter and embeds build metadata.

use std::fs;
use std::path::Path;

const BUILD_NUMBER_FILE: &str = "build_number.txt";

fn previous_build(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let path = Path::new(BUILD_NUMBER_FILE);
    let build = previous_build(path) + 1;

    if let Err(e) = fs::write(path, build.to_string()) {
        println!("cargo:warning=Could not record build number: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=BESTINUT_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=BESTINUT_BUILD_TIMESTAMP={}", timestamp);
}

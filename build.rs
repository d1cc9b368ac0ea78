//! Build script for TDA
//!
//! Bumps the local build counter and embeds build metadata together with the
//! version of the reference tables compiled into the binary.

use std::fs;
use std::path::Path;

const BUILD_NUMBER_FILE: &str = "build_number.txt";
const REFERENCE_FILE: &str = "data/reference.json";

fn next_build_number(path: &Path) -> u64 {
    let current: u64 = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    current + 1
}

/// Version string of the embedded tables; a malformed asset fails the build
fn reference_version(path: &Path) -> String {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    let value: serde_json::Value = serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", path.display(), e));
    value
        .get("version")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string()
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed={}", REFERENCE_FILE);

    let build_number_path = Path::new(BUILD_NUMBER_FILE);
    let build_number = next_build_number(build_number_path);
    fs::write(build_number_path, build_number.to_string())
        .expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let reference = reference_version(Path::new(REFERENCE_FILE));

    println!("cargo:rustc-env=TDA_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=TDA_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=TDA_REFERENCE_VERSION={}", reference);
}

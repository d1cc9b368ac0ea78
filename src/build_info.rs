//! Build information module
//!
//! Compile-time metadata: build counter, timestamp and the version of the
//! embedded reference tables.

use serde::Serialize;

/// Local build counter
pub const BUILD_NUMBER: u64 = match option_env!("TDA_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("TDA_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Version of `data/reference.json` at compile time
pub const EMBEDDED_REFERENCE_VERSION: &str = match option_env!("TDA_REFERENCE_VERSION") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Build metadata as reported by tda_status
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub embedded_reference_version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            embedded_reference_version: EMBEDDED_REFERENCE_VERSION,
        }
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  Therapeutic Diet Assistant (TDA)");
    eprintln!("  Version: {} | Build: {}", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("  Embedded reference tables: {}", info.embedded_reference_version);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64("42"), Some(42));
        assert_eq!(parse_u64("0"), Some(0));
        assert_eq!(parse_u64("4a"), None);
        assert_eq!(parse_u64(""), None);
    }

    #[test]
    fn test_embedded_reference_version_matches_asset() {
        let data = ReferenceData::embedded().unwrap();
        assert_eq!(EMBEDDED_REFERENCE_VERSION, data.version);
        assert_eq!(BuildInfo::current().name, "tda");
    }
}

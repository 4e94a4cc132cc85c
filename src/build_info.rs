//! Build metadata embedded by build.rs

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Local build counter, 0 when built without build.rs output
pub const BUILD_NUMBER: u64 = match option_env!("BESTINUT_BUILD_NUMBER") {
    Some(s) => digits_to_u64(s.as_bytes()),
    None => 0,
};

/// ISO 8601 UTC compile time
pub const BUILD_TIMESTAMP: &str = match option_env!("BESTINUT_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Decimal digits to u64; anything malformed reads as 0
const fn digits_to_u64(bytes: &[u8]) -> u64 {
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

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// e.g. "bestinut v1.0.0 (build 12, compiled 2026-01-01T00:00:00Z)"
    pub fn summary(&self) -> String {
        format!(
            "{} v{} (build {}, compiled {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Startup banner on stderr (stdout is the MCP channel)
pub fn print_startup_banner() {
    eprintln!("===============================================");
    eprintln!("  BestiNut Diet & Nutrition Server");
    eprintln!("  {}", BuildInfo::current().summary());
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_to_u64() {
        assert_eq!(digits_to_u64(b"0"), 0);
        assert_eq!(digits_to_u64(b"1234"), 1234);
        assert_eq!(digits_to_u64(b"12a"), 0);
        assert_eq!(digits_to_u64(b""), 0);
    }

    #[test]
    fn test_summary_mentions_package() {
        let info = BuildInfo::current();
        let summary = info.summary();
        assert!(summary.starts_with("bestinut v"));
        assert!(summary.contains(&info.build_number.to_string()));
    }
}

//! Version output parsing with regex extraction.

use crate::ProbeError;
use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // major.minor with optional patch; toolchains are less disciplined than semver
    RE.get_or_init(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("Invalid regex pattern"))
}

/// Parse a semantic version from a version banner.
///
/// Handles the usual shapes:
///
/// - `go version go1.21.5 linux/amd64` -> 1.21.5
/// - `Python 3.12.1` -> 3.12.1
/// - `v20.10.0` -> 20.10.0
/// - `Lua 5.4` -> 5.4.0
///
/// # Returns
///
/// `Ok(Version)` for the first `major.minor[.patch]` group in the text,
/// `Err(ProbeError::ParseFailure)` when there is none.
pub fn parse_version(output: &str) -> Result<Version, ProbeError> {
    let caps = version_regex()
        .captures(output)
        .ok_or_else(|| ProbeError::parse("version banner", "no version number found"))?;

    let part = |idx: usize| -> Result<u64, ProbeError> {
        match caps.get(idx) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|e| ProbeError::parse("version banner", e)),
            None => Ok(0),
        }
    };

    Ok(Version::new(part(1)?, part(2)?, part(3)?))
}

/// First non-empty line of a command's output, trimmed.
///
/// Used as the human-readable version string: several tools (`java -version`,
/// `php --version`, `gcc --version`) print multi-line banners.
pub fn first_line(output: &str) -> String {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

//! Parsers for package-manager listings.
//!
//! All of them are tolerant: a malformed line is skipped, and only a document
//! that cannot be read at all (invalid JSON) is an error.

use crate::{PackageInfo, ProbeError};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Decode the leading JSON document, ignoring whatever the tool printed
/// after it (stderr notices land behind stdout).
fn leading_json<T: DeserializeOwned>(output: &str, source_name: &str) -> Result<T, ProbeError> {
    serde_json::Deserializer::from_str(output)
        .into_iter::<T>()
        .next()
        .unwrap_or_else(|| Err(serde::de::Error::custom("no JSON document")))
        .map_err(|e| ProbeError::parse(source_name, e))
}

/// `pip list --format=json`
pub fn parse_pip_json(output: &str) -> Result<Vec<PackageInfo>, ProbeError> {
    #[derive(Deserialize)]
    struct Entry {
        name: String,
        #[serde(default)]
        version: String,
    }

    let entries: Vec<Entry> = leading_json(output, "pip list")?;
    Ok(entries
        .into_iter()
        .map(|e| PackageInfo::installed(e.name, e.version))
        .collect())
}

/// `npm list --global --json --depth=0`
pub fn parse_npm_list_json(output: &str) -> Result<Vec<PackageInfo>, ProbeError> {
    #[derive(Deserialize)]
    struct Dependency {
        #[serde(default)]
        version: String,
    }

    #[derive(Deserialize)]
    struct Listing {
        #[serde(default)]
        dependencies: BTreeMap<String, Dependency>,
    }

    let listing: Listing = leading_json(output, "npm list")?;
    Ok(listing
        .dependencies
        .into_iter()
        .map(|(name, dep)| PackageInfo::installed(name, dep.version))
        .collect())
}

/// `composer global show --format=json`
pub fn parse_composer_json(output: &str) -> Result<Vec<PackageInfo>, ProbeError> {
    #[derive(Deserialize)]
    struct Entry {
        name: String,
        #[serde(default)]
        version: String,
        #[serde(default)]
        description: String,
    }

    #[derive(Deserialize)]
    struct Listing {
        #[serde(default)]
        installed: Vec<Entry>,
    }

    let listing: Listing = leading_json(output, "composer show")?;
    Ok(listing
        .installed
        .into_iter()
        .map(|e| PackageInfo {
            description: e.description,
            ..PackageInfo::installed(e.name, e.version)
        })
        .collect())
}

fn gem_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\S+)\s+\((.+)\)$").expect("Invalid regex pattern"))
}

/// `gem list --local`
///
/// Lines look like `rake (13.1.0, 13.0.6)` or `json (default: 2.7.1)`;
/// the first listed version is kept.
pub fn parse_gem_list(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .filter_map(|line| gem_line_regex().captures(line.trim()))
        .map(|caps| {
            let versions = &caps[2];
            let first = versions.split(',').next().unwrap_or_default();
            let version = first.trim().trim_start_matches("default:").trim();
            PackageInfo::installed(&caps[1], version)
        })
        .collect()
}

/// `cargo install --list`
///
/// Crate lines are unindented (`ripgrep v14.0.3:`), the binaries they
/// provide follow indented and are ignored.
pub fn parse_cargo_install_list(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| {
            let line = line.trim().strip_suffix(':')?;
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            let version = fields.next()?.trim_start_matches('v');
            Some(PackageInfo::installed(name, version))
        })
        .collect()
}

/// `dotnet tool list --global`
///
/// Two header lines (column titles and a dashed rule) precede the rows.
pub fn parse_dotnet_tools(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .skip(2)
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            Some(PackageInfo::installed(fields.next()?, fields.next()?))
        })
        .collect()
}

fn nimble_bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\S+)\s+\[(.+?)\]").expect("Invalid regex pattern"))
}

/// `nimble list --installed`
///
/// Accepts both `jester  [0.6.0]` and the older `jester -> 0.5.0 # desc`.
pub fn parse_nimble_installed(output: &str) -> Vec<PackageInfo> {
    let mut packages = Vec::new();
    for line in output.lines().map(str::trim) {
        if line.is_empty() || line.starts_with("Installed packages") || line.contains("====") {
            continue;
        }

        if let Some(caps) = nimble_bracket_regex().captures(line) {
            let version = caps[2].split(',').next().unwrap_or_default().trim();
            packages.push(PackageInfo::installed(&caps[1], version));
        } else if let Some((name, rest)) = line.split_once("->") {
            let (version, description) = match rest.split_once('#') {
                Some((v, d)) => (v.trim(), d.trim()),
                None => (rest.trim(), ""),
            };
            packages.push(PackageInfo {
                description: description.to_string(),
                ..PackageInfo::installed(name.trim(), version)
            });
        }
    }
    packages
}

/// `luarocks list --porcelain` (tab separated: name, version, status, tree)
pub fn parse_luarocks_porcelain(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let name = fields.next()?.trim();
            let version = fields.next()?.trim();
            (!name.is_empty()).then(|| PackageInfo::installed(name, version))
        })
        .collect()
}

/// Whitespace separated `name version` rows, `#` comment lines ignored.
///
/// Covers `opam list --columns=name,version`, `dart pub global list` and
/// the R `installed.packages()` dump.
pub fn parse_name_version_rows(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            let version = fields.next()?;
            Some(PackageInfo::installed(name, version))
        })
        .collect()
}

/// `ghc-pkg list --simple-output` (space separated `name-version` ids)
pub fn parse_ghc_pkg_simple(output: &str) -> Vec<PackageInfo> {
    output
        .split_whitespace()
        .filter_map(|id| {
            let (name, version) = id.rsplit_once('-')?;
            version
                .starts_with(|c: char| c.is_ascii_digit())
                .then(|| PackageInfo::installed(name, version))
        })
        .collect()
}

/// `php -m` (module names grouped under bracketed section headers)
pub fn parse_php_modules(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('['))
        .map(|line| PackageInfo::installed(line, ""))
        .collect()
}

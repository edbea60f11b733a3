//! Parsers for package-manager search output.

use crate::{PackageInfo, ProbeError};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

fn name_paren_version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\S+)\s+\(([^)]*)\)(?:\s+-?\s*(.*))?$").expect("Invalid regex pattern")
    })
}

fn cargo_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(\S+)\s*=\s*"([^"]*)"\s*(?:#\s*(.*))?$"#).expect("Invalid regex pattern")
    })
}

fn column_gap_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("Invalid regex pattern"))
}

/// `npm search --json`, falling back to the plain-text table.
pub fn parse_npm_search(output: &str, query: &str) -> Vec<PackageInfo> {
    #[derive(Deserialize)]
    struct Hit {
        name: String,
        #[serde(default)]
        version: String,
        #[serde(default)]
        description: Option<String>,
    }

    match serde_json::from_str::<Vec<Hit>>(output) {
        Ok(hits) => hits
            .into_iter()
            .map(|h| PackageInfo::listed(h.name, h.version, h.description.unwrap_or_default()))
            .collect(),
        Err(_) => output
            .lines()
            .filter(|line| line.contains(query))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                let name = fields.next()?;
                let version = fields.next()?;
                let description = fields.collect::<Vec<_>>().join(" ");
                Some(PackageInfo::listed(name, version, description))
            })
            .collect(),
    }
}

/// `pip index versions <name>`: the first line is `name (latest)`.
pub fn parse_pip_index(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| name_paren_version_regex().captures(line))
        .take(1)
        .map(|caps| PackageInfo::listed(&caps[1], &caps[2], ""))
        .collect()
}

/// `gem search -r`: `name (version)` per line.
pub fn parse_gem_search(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| name_paren_version_regex().captures(line))
        .map(|caps| {
            let description = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
            PackageInfo::listed(&caps[1], &caps[2], description.trim())
        })
        .collect()
}

/// `cargo search`: `name = "version"    # description`.
pub fn parse_cargo_search(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| cargo_line_regex().captures(line))
        .map(|caps| {
            let description = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
            PackageInfo::listed(&caps[1], &caps[2], description.trim())
        })
        .collect()
}

/// `composer search`: `vendor/package description`.
pub fn parse_composer_search(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            let (name, description) = match line.split_once(char::is_whitespace) {
                Some((name, rest)) => (name, rest.trim()),
                None => (line, ""),
            };
            name.contains('/')
                .then(|| PackageInfo::listed(name, "", description))
        })
        .collect()
}

/// `dotnet package search`: a table after a dashed rule, either
/// `|`-delimited or whitespace-separated.
pub fn parse_nuget_search(output: &str) -> Vec<PackageInfo> {
    let mut packages = Vec::new();
    let mut in_results = false;

    for line in output.lines() {
        let trimmed = line.trim();
        if trimmed.contains("----") {
            in_results = true;
            continue;
        }
        if !in_results || trimmed.is_empty() {
            continue;
        }

        if trimmed.contains('|') {
            let cells: Vec<&str> = trimmed
                .split('|')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .collect();
            if let [name, version, ..] = cells.as_slice() {
                packages.push(PackageInfo::listed(*name, *version, ""));
            }
        } else {
            let mut fields = trimmed.split_whitespace();
            if let (Some(name), Some(version)) = (fields.next(), fields.next()) {
                let description = fields.collect::<Vec<_>>().join(" ");
                packages.push(PackageInfo::listed(name, version, description));
            }
        }
    }
    packages
}

/// `go list -m -versions <module>`: module path then its versions, oldest first.
pub fn parse_go_list_versions(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let module = fields.next()?;
            let latest = fields.last().unwrap_or_default();
            Some(PackageInfo::listed(module, latest, ""))
        })
        .collect()
}

/// `dub search`: `name (version) - description`, or `name (version)`.
pub fn parse_dub_search(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            if let Some(caps) = name_paren_version_regex().captures(line) {
                let description = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
                return Some(PackageInfo::listed(&caps[1], &caps[2], description.trim()));
            }
            let (head, description) = line.split_once(" - ")?;
            let name = head.split_whitespace().next()?;
            Some(PackageInfo::listed(name, "", description.trim()))
        })
        .collect()
}

/// `mix hex.search`: columns separated by runs of spaces
/// (package, description, version, url), header row skipped.
pub fn parse_hex_search(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("Package"))
        .filter_map(|line| {
            if let Some((name, description)) = line.split_once(" - ") {
                return Some(PackageInfo::listed(name.trim(), "", description.trim()));
            }
            let columns: Vec<&str> = column_gap_regex().split(line).collect();
            match columns.as_slice() {
                [name, description, version, ..] => {
                    Some(PackageInfo::listed(*name, *version, *description))
                }
                [name, description] => Some(PackageInfo::listed(*name, "", *description)),
                _ => None,
            }
        })
        .collect()
}

/// `nimble search`: one block per package, an unindented `name:` header
/// followed by indented `key: value` lines.
pub fn parse_nimble_search(output: &str) -> Vec<PackageInfo> {
    let mut packages: Vec<PackageInfo> = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indented = line.starts_with(char::is_whitespace);
        let trimmed = line.trim();

        if !indented {
            if let Some(name) = trimmed.strip_suffix(':') {
                packages.push(PackageInfo::listed(name, "", ""));
            }
            continue;
        }

        let Some(current) = packages.last_mut() else {
            continue;
        };
        if let Some((key, value)) = trimmed.split_once(':') {
            match key.trim() {
                "description" => current.description = value.trim().to_string(),
                "version" => current.version = value.trim().to_string(),
                _ => {}
            }
        }
    }
    packages
}

/// `brew search`: one formula or cask per line, `==>` section headers.
pub fn parse_brew_search(output: &str) -> Vec<PackageInfo> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("==>"))
        .map(|name| PackageInfo::listed(name, "", ""))
        .collect()
}

/// `brew info --json=v1 <formula>`: stable version and description.
pub fn parse_brew_info(output: &str) -> Result<Option<(String, String)>, ProbeError> {
    #[derive(Deserialize, Default)]
    struct Versions {
        #[serde(default)]
        stable: Option<String>,
    }

    #[derive(Deserialize)]
    struct Formula {
        #[serde(default)]
        desc: Option<String>,
        #[serde(default)]
        versions: Versions,
    }

    let formulae: Vec<Formula> =
        serde_json::from_str(output).map_err(|e| ProbeError::parse("brew info", e))?;
    Ok(formulae.into_iter().next().map(|f| {
        (
            f.versions.stable.unwrap_or_default(),
            f.desc.unwrap_or_default(),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_npm_search_json() {
        let output = r#"[
            {"name": "left-pad", "version": "1.3.0", "description": "String left pad"},
            {"name": "left-pad-cli", "version": "0.1.0", "description": null}
        ]"#;
        let packages = parse_npm_search(output, "left-pad");
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].description, "String left pad");
        assert_eq!(packages[1].description, "");
        assert!(!packages[0].installed);
    }

    #[test]
    fn test_parse_npm_search_text_fallback() {
        let output = "NAME  | VERSION\nexpress 4.18.2 Fast web framework\nunrelated 1.0.0 nope";
        let packages = parse_npm_search(output, "express");
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].version, "4.18.2");
        assert_eq!(packages[0].description, "Fast web framework");
    }

    #[test]
    fn test_parse_pip_index() {
        let output = "requests (2.31.0)\nAvailable versions: 2.31.0, 2.30.0\n  INSTALLED: 2.28.1";
        let packages = parse_pip_index(output);
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "requests");
        assert_eq!(packages[0].version, "2.31.0");
    }

    #[test]
    fn test_parse_gem_search() {
        let output = "\n*** REMOTE GEMS ***\n\nrails (7.1.2)\nrails-html-sanitizer (1.6.0)\n";
        let packages = parse_gem_search(output);
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].name, "rails-html-sanitizer");
        assert_eq!(packages[1].version, "1.6.0");
    }

    #[test]
    fn test_parse_cargo_search() {
        let output = "serde = \"1.0.193\"    # A generic serialization/deserialization framework\nserde_json = \"1.0.108\"\n... and 4020 crates more (use --limit N to see more)";
        let packages = parse_cargo_search(output);
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name, "serde");
        assert_eq!(packages[0].version, "1.0.193");
        assert_eq!(packages[0].description, "A generic serialization/deserialization framework");
        assert_eq!(packages[1].description, "");
    }

    #[test]
    fn test_parse_composer_search() {
        let output = "monolog/monolog Sends your logs to files\nWarning: something\nsymfony/console";
        let packages = parse_composer_search(output);
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].description, "Sends your logs to files");
        assert_eq!(packages[1].name, "symfony/console");
    }

    #[test]
    fn test_parse_nuget_search_pipe_table() {
        let output = "Source: nuget.org\n| Package ID      | Latest Version | Owners |\n| --------------- | -------------- | ------ |\n| Newtonsoft.Json | 13.0.3         | jamesnk |\n";
        let packages = parse_nuget_search(output);
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "Newtonsoft.Json");
        assert_eq!(packages[0].version, "13.0.3");
    }

    #[test]
    fn test_parse_nuget_search_plain_table() {
        let output = "Name  Version  Description\n-----------------------\nSerilog 3.1.1 Simple logging\n";
        let packages = parse_nuget_search(output);
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].description, "Simple logging");
    }

    #[test]
    fn test_parse_go_list_versions() {
        let output = "github.com/gin-gonic/gin v1.8.0 v1.9.0 v1.9.1";
        let packages = parse_go_list_versions(output);
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "github.com/gin-gonic/gin");
        assert_eq!(packages[0].version, "v1.9.1");

        let bare = parse_go_list_versions("example.com/tool");
        assert_eq!(bare[0].version, "");
    }

    #[test]
    fn test_parse_dub_search() {
        let output = "==== packages ====\nvibe-d (0.9.7) - Event driven web framework\nmir (3.2.3)\n";
        let packages = parse_dub_search(output);
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].description, "Event driven web framework");
        assert_eq!(packages[1].version, "3.2.3");
    }

    #[test]
    fn test_parse_hex_search() {
        let output = "Package  Description                         Version  URL\nphoenix  Peace of mind from prototype to production  1.7.10   https://hex.pm/packages/phoenix\n";
        let packages = parse_hex_search(output);
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "phoenix");
        assert_eq!(packages[0].version, "1.7.10");
        assert_eq!(packages[0].description, "Peace of mind from prototype to production");
    }

    #[test]
    fn test_parse_nimble_search() {
        let output = "jester:\n  url:         https://github.com/dom96/jester (git)\n  tags:        web, http\n  description: A sinatra-like web framework for Nim.\n  license:     MIT\n\nkarax:\n  description: Single page applications for Nim.\n";
        let packages = parse_nimble_search(output);
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name, "jester");
        assert_eq!(packages[0].description, "A sinatra-like web framework for Nim.");
        assert_eq!(packages[1].name, "karax");
    }

    #[test]
    fn test_parse_brew_search() {
        let output = "==> Formulae\nwget\nwget2\n\n==> Casks\nwgetgui\n";
        let names: Vec<_> = parse_brew_search(output).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["wget", "wget2", "wgetgui"]);
    }

    #[test]
    fn test_parse_brew_info() {
        let output = r#"[{"name": "wget", "desc": "Internet file retriever", "versions": {"stable": "1.21.4", "head": "HEAD"}}]"#;
        let (version, desc) = parse_brew_info(output).unwrap().unwrap();
        assert_eq!(version, "1.21.4");
        assert_eq!(desc, "Internet file retriever");

        assert!(parse_brew_info("[]").unwrap().is_none());
        assert!(parse_brew_info("Error: No available formula").is_err());
    }
}

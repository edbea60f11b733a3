//! Report types produced by probes.

use crate::detection::parse_version;
use semver::Version;
use serde::{Deserialize, Serialize};

/// One package: installed, recommended or found by a search.
///
/// The link fields are only filled in for search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    /// Package name as the package manager spells it.
    pub name: String,

    /// Version string, possibly empty.
    #[serde(default)]
    pub version: String,

    /// Short description, possibly empty.
    #[serde(default)]
    pub description: String,

    /// Whether the package is present on this machine.
    #[serde(default)]
    pub installed: bool,

    /// Command or snippet that installs the package.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub install_link: String,

    /// Registry page for the package.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub download_url: String,
}

impl PackageInfo {
    /// A package found on this machine.
    pub fn installed(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            installed: true,
            ..Default::default()
        }
    }

    /// A package known from a registry or a static list, not necessarily present.
    pub fn listed(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Result of probing one language toolchain.
///
/// Exactly one report is produced per registered probe. A probe that finds
/// nothing, or fails internally, still yields a report with
/// `installed == false` and its static suggestions filled in.
///
/// # Example
///
/// ```rust
/// use toolchain_scout::LanguageReport;
///
/// let report = LanguageReport::not_installed("Zig");
/// assert!(!report.installed);
/// assert!(report.parsed_version().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageReport {
    /// Display name of the language.
    pub name: String,

    /// Whether a working toolchain was found.
    pub installed: bool,

    /// First line of the version banner, empty when not installed.
    pub version: String,

    /// Companion tools that are expected but absent (e.g. "pip", "Cargo").
    pub missing_deps: Vec<String>,

    /// Where to download the toolchain.
    pub download_url: String,

    /// Installation guide.
    pub install_tutorial: String,

    /// Name of the package manager used by the ecosystem.
    pub package_manager: String,

    /// Installed packages.
    pub packages: Vec<PackageInfo>,

    /// Installed extensions/modules (e.g. PHP extensions).
    pub extensions: Vec<PackageInfo>,

    /// Suggested packages; `installed` is set for the ones already present.
    #[serde(rename = "recommendedPkgs")]
    pub recommended: Vec<PackageInfo>,
}

impl LanguageReport {
    /// An empty "not installed" report carrying only a name.
    pub fn not_installed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Semantic version extracted from the version banner, if any.
    pub fn parsed_version(&self) -> Option<Version> {
        if !self.installed {
            return None;
        }
        parse_version(&self.version).ok()
    }

    /// Whether a package with this name is installed (case-insensitive).
    pub fn has_package(&self, name: &str) -> bool {
        self.packages
            .iter()
            .any(|pkg| pkg.name.eq_ignore_ascii_case(name))
    }

    /// Recommended packages that are not installed yet.
    pub fn missing_recommended(&self) -> Vec<&PackageInfo> {
        self.recommended
            .iter()
            .filter(|pkg| !self.has_package(&pkg.name))
            .collect()
    }

    /// Flag recommendations that already appear in the installed list.
    pub(crate) fn mark_installed_recommendations(&mut self) {
        let installed: Vec<bool> = self
            .recommended
            .iter()
            .map(|pkg| self.has_package(&pkg.name))
            .collect();
        for (pkg, present) in self.recommended.iter_mut().zip(installed) {
            pkg.installed = present;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> LanguageReport {
        LanguageReport {
            name: "Python".to_string(),
            installed: true,
            version: "Python 3.12.1".to_string(),
            package_manager: "pip".to_string(),
            packages: vec![
                PackageInfo::installed("requests", "2.31.0"),
                PackageInfo::installed("NumPy", "1.26.2"),
            ],
            recommended: vec![
                PackageInfo::listed("numpy", "1.24.3", "Scientific computing"),
                PackageInfo::listed("flask", "2.3.2", "Web framework"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_not_installed_report() {
        let report = LanguageReport::not_installed("Zig");
        assert_eq!(report.name, "Zig");
        assert!(!report.installed);
        assert!(report.version.is_empty());
        assert!(report.packages.is_empty());
        assert!(report.parsed_version().is_none());
    }

    #[test]
    fn test_parsed_version() {
        let report = make_report();
        assert_eq!(report.parsed_version(), Some(Version::new(3, 12, 1)));
    }

    #[test]
    fn test_missing_recommended_is_case_insensitive() {
        let report = make_report();
        let missing: Vec<_> = report
            .missing_recommended()
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(missing, vec!["flask"]);
    }

    #[test]
    fn test_mark_installed_recommendations() {
        let mut report = make_report();
        report.mark_installed_recommendations();
        assert!(report.recommended[0].installed);
        assert!(!report.recommended[1].installed);
    }

    #[test]
    fn test_report_json_uses_camel_case() {
        let mut report = make_report();
        report.missing_deps.push("pip".to_string());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["missingDeps"][0], "pip");
        assert_eq!(json["packageManager"], "pip");
        assert!(json["recommendedPkgs"].is_array());
        assert!(json["packages"][0].get("installLink").is_none());
    }

    #[test]
    fn test_package_links_serialized_when_present() {
        let mut pkg = PackageInfo::listed("serde", "1.0.0", "Serialization");
        pkg.install_link = "cargo add serde".to_string();
        let json = serde_json::to_value(&pkg).unwrap();
        assert_eq!(json["installLink"], "cargo add serde");
        assert_eq!(json["installed"], false);
    }
}

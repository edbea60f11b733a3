//! Static toolchain descriptors.
//!
//! Every supported language is described once, as data, by a [`Toolchain`]:
//! how to find its version, which companion tools it expects, where its
//! installed packages can be listed from, and what to recommend. The
//! generic [`ToolchainProbe`](crate::ToolchainProbe) turns a descriptor into
//! a [`LanguageReport`].

mod catalog;

use crate::detection::{command_exists, first_line};
use crate::packages::PackageSource;
use crate::{CommandRunner, LanguageReport, PackageInfo};
use std::path::Path;

/// Version string reported when a tool is present but prints no version.
pub const UNKNOWN_VERSION: &str = "installed";

/// One way of establishing that a toolchain is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
    /// Run the program; the first non-empty output line is the version.
    Run {
        program: &'static str,
        args: &'static [&'static str],
    },
    /// The program is on PATH; there is no usable version flag.
    Present(&'static str),
    /// A well-known installation directory exists.
    Directory(&'static str),
    /// Always available, with a fixed version label.
    Always(&'static str),
}

impl VersionCheck {
    /// Shorthand for [`VersionCheck::Run`].
    pub const fn run(program: &'static str, args: &'static [&'static str]) -> Self {
        Self::Run { program, args }
    }

    /// Perform the check, returning the version string on success.
    async fn version(&self, runner: &CommandRunner) -> Option<String> {
        match *self {
            Self::Run { program, args } => {
                if !command_exists(program) {
                    return None;
                }
                match runner.run(program, args).await {
                    Ok(out) => {
                        let line = first_line(&out);
                        Some(if line.is_empty() {
                            UNKNOWN_VERSION.to_string()
                        } else {
                            line
                        })
                    }
                    Err(e) => {
                        tracing::debug!(program, error = %e, "version command failed");
                        None
                    }
                }
            }
            Self::Present(program) => {
                command_exists(program).then(|| UNKNOWN_VERSION.to_string())
            }
            Self::Directory(path) => Path::new(path)
                .is_dir()
                .then(|| UNKNOWN_VERSION.to_string()),
            Self::Always(label) => Some(label.to_string()),
        }
    }
}

/// A companion tool the ecosystem expects (e.g. pip next to Python).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    /// Name added to `missing_deps` when none of the commands exist.
    pub display: &'static str,

    /// Alternative executable names.
    pub commands: &'static [&'static str],
}

impl Dependency {
    pub const fn new(display: &'static str, commands: &'static [&'static str]) -> Self {
        Self { display, commands }
    }

    /// Whether any of the alternative commands is on PATH.
    pub fn is_present(&self) -> bool {
        self.commands.iter().any(|c| command_exists(c))
    }
}

/// A package suggested for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl Recommendation {
    pub const fn new(name: &'static str, version: &'static str, description: &'static str) -> Self {
        Self {
            name,
            version,
            description,
        }
    }

    fn to_package(self) -> PackageInfo {
        PackageInfo::listed(self.name, self.version, self.description)
    }
}

/// Static description of one language toolchain.
///
/// Descriptors are built in `const` context:
///
/// ```rust
/// use toolchain_scout::{Toolchain, VersionCheck};
///
/// const ZIG: Toolchain = Toolchain::new("Zig", &[VersionCheck::run("zig", &["version"])])
///     .download_url("https://ziglang.org/download/");
///
/// let report = ZIG.base_report();
/// assert_eq!(report.name, "Zig");
/// assert!(!report.installed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolchain {
    name: &'static str,
    version_checks: &'static [VersionCheck],
    package_manager: &'static str,
    download_url: &'static str,
    install_tutorial: &'static str,
    dependencies: &'static [Dependency],
    sources: &'static [PackageSource],
    extension_sources: &'static [PackageSource],
    recommended: &'static [Recommendation],
}

impl Toolchain {
    /// A descriptor with only a name and its version checks (tried in order).
    pub const fn new(name: &'static str, version_checks: &'static [VersionCheck]) -> Self {
        Self {
            name,
            version_checks,
            package_manager: "",
            download_url: "",
            install_tutorial: "",
            dependencies: &[],
            sources: &[],
            extension_sources: &[],
            recommended: &[],
        }
    }

    pub const fn package_manager(self, package_manager: &'static str) -> Self {
        Self {
            package_manager,
            ..self
        }
    }

    pub const fn download_url(self, download_url: &'static str) -> Self {
        Self {
            download_url,
            ..self
        }
    }

    pub const fn install_tutorial(self, install_tutorial: &'static str) -> Self {
        Self {
            install_tutorial,
            ..self
        }
    }

    pub const fn dependencies(self, dependencies: &'static [Dependency]) -> Self {
        Self {
            dependencies,
            ..self
        }
    }

    pub const fn sources(self, sources: &'static [PackageSource]) -> Self {
        Self { sources, ..self }
    }

    pub const fn extension_sources(self, extension_sources: &'static [PackageSource]) -> Self {
        Self {
            extension_sources,
            ..self
        }
    }

    pub const fn recommended(self, recommended: &'static [Recommendation]) -> Self {
        Self {
            recommended,
            ..self
        }
    }

    /// Display name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version_checks(&self) -> &'static [VersionCheck] {
        self.version_checks
    }

    pub fn package_sources(&self) -> &'static [PackageSource] {
        self.sources
    }

    pub fn recommendations(&self) -> &'static [Recommendation] {
        self.recommended
    }

    /// The report for this language before anything is detected: static
    /// links and recommendations only, `installed == false`.
    pub fn base_report(&self) -> LanguageReport {
        LanguageReport {
            download_url: self.download_url.to_string(),
            install_tutorial: self.install_tutorial.to_string(),
            package_manager: self.package_manager.to_string(),
            recommended: self.recommended.iter().map(|r| r.to_package()).collect(),
            ..LanguageReport::not_installed(self.name)
        }
    }

    /// Run the version checks in order; the first that succeeds wins.
    pub async fn detect_version(&self, runner: &CommandRunner) -> Option<String> {
        for check in self.version_checks {
            if let Some(version) = check.version(runner).await {
                return Some(version);
            }
        }
        None
    }

    /// Display names of expected companion tools that are absent.
    pub fn missing_dependencies(&self) -> Vec<String> {
        self.dependencies
            .iter()
            .filter(|dep| !dep.is_present())
            .map(|dep| dep.display.to_string())
            .collect()
    }

    /// Collect installed packages from every source, skipping failing ones.
    pub async fn list_packages(&self, runner: &CommandRunner) -> Vec<PackageInfo> {
        collect(self.name, self.sources, runner).await
    }

    /// Collect installed extensions (e.g. PHP modules).
    pub async fn list_extensions(&self, runner: &CommandRunner) -> Vec<PackageInfo> {
        collect(self.name, self.extension_sources, runner).await
    }
}

async fn collect(
    language: &str,
    sources: &[PackageSource],
    runner: &CommandRunner,
) -> Vec<PackageInfo> {
    let mut packages = Vec::new();
    for source in sources {
        match source.list(runner).await {
            Ok(found) => packages.extend(found),
            Err(e) => tracing::debug!(
                language,
                source = source.label(),
                error = %e,
                "package listing failed"
            ),
        }
    }
    packages
}

/// The full, immutable list of known toolchains.
pub fn catalog() -> &'static [Toolchain] {
    catalog::CATALOG
}

/// Look up a toolchain by display name (case-insensitive).
pub fn find(name: &str) -> Option<&'static Toolchain> {
    catalog().iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert!(catalog().len() >= 70, "got {}", catalog().len());
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut seen = HashSet::new();
        for toolchain in catalog() {
            assert!(seen.insert(toolchain.name()), "duplicate {}", toolchain.name());
        }
    }

    #[test]
    fn test_catalog_entries_are_probeable() {
        for toolchain in catalog() {
            assert!(!toolchain.name().is_empty());
            assert!(
                !toolchain.version_checks().is_empty(),
                "{} has no version check",
                toolchain.name()
            );
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let python = find("python").unwrap();
        assert_eq!(python.name(), "Python");
        assert!(python.package_sources().contains(&PackageSource::Pip));
        assert!(find("Brainfuck").is_none());
    }

    #[test]
    fn test_base_report() {
        let report = find("Go").unwrap().base_report();
        assert_eq!(report.name, "Go");
        assert!(!report.installed);
        assert_eq!(report.download_url, "https://go.dev/dl/");
        assert!(!report.recommended.is_empty());
        assert!(report.recommended.iter().all(|r| !r.installed));
    }

    #[test]
    fn test_missing_dependencies() {
        const TOOLCHAIN: Toolchain = Toolchain::new("Fake", &[]).dependencies(&[
            Dependency::new("Ghost", &["no_such_tool_a1", "no_such_tool_a2"]),
        ]);
        assert_eq!(TOOLCHAIN.missing_dependencies(), vec!["Ghost".to_string()]);
    }

    #[tokio::test]
    async fn test_detect_version_falls_through() {
        const TOOLCHAIN: Toolchain = Toolchain::new(
            "Fake",
            &[
                VersionCheck::run("no_such_compiler_42", &["--version"]),
                VersionCheck::Present("no_such_compiler_43"),
                VersionCheck::Always("Fake 1.0"),
            ],
        );
        let runner = CommandRunner::default();
        assert_eq!(TOOLCHAIN.detect_version(&runner).await.as_deref(), Some("Fake 1.0"));
    }

    #[tokio::test]
    async fn test_detect_version_none() {
        const TOOLCHAIN: Toolchain = Toolchain::new(
            "Fake",
            &[VersionCheck::Directory("/definitely/not/a/dir/for/fake")],
        );
        let runner = CommandRunner::default();
        assert!(TOOLCHAIN.detect_version(&runner).await.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_detect_version_uses_first_line() {
        const TOOLCHAIN: Toolchain = Toolchain::new(
            "Shell",
            &[VersionCheck::run("sh", &["-c", "echo; echo 'Shell 9.1'; echo tail"])],
        );
        let runner = CommandRunner::default();
        assert_eq!(TOOLCHAIN.detect_version(&runner).await.as_deref(), Some("Shell 9.1"));
    }
}

//! The probe capability and its catalog-driven implementation.

use crate::toolchain::{catalog, Toolchain};
use crate::{CommandRunner, LanguageReport, PackageInfo};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

/// A registry of probes, shared with the tasks that run them.
pub type Registry = Vec<Arc<dyn Probe>>;

/// An independent unit of work that checks for one toolchain and
/// enumerates its packages.
///
/// Implementations absorb their own failures: `detect` always resolves to a
/// report, with `installed == false` when the toolchain is missing or
/// unusable. The dispatcher knows nothing about individual languages.
///
/// # Example
///
/// ```rust
/// use futures::future::{BoxFuture, FutureExt};
/// use toolchain_scout::{CommandRunner, LanguageReport, Probe};
///
/// struct Always;
///
/// impl Probe for Always {
///     fn name(&self) -> &str {
///         "Always"
///     }
///
///     fn detect<'a>(&'a self, _runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
///         async move {
///             LanguageReport {
///                 installed: true,
///                 version: "1.0".to_string(),
///                 ..LanguageReport::not_installed("Always")
///             }
///         }
///         .boxed()
///     }
/// }
/// ```
pub trait Probe: Send + Sync {
    /// Display name; also the name of the report this probe produces.
    fn name(&self) -> &str;

    /// Detect the toolchain and build its complete report.
    fn detect<'a>(&'a self, runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport>;

    /// Installed packages only, without the version check.
    fn list_packages<'a>(&'a self, _runner: &'a CommandRunner) -> BoxFuture<'a, Vec<PackageInfo>> {
        futures::future::ready(Vec::new()).boxed()
    }

    /// Report used when `detect` itself fails (panics).
    fn fallback(&self) -> LanguageReport {
        LanguageReport::not_installed(self.name())
    }
}

/// A [`Probe`] driven entirely by a static [`Toolchain`] descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ToolchainProbe {
    toolchain: &'static Toolchain,
}

impl ToolchainProbe {
    pub fn new(toolchain: &'static Toolchain) -> Self {
        Self { toolchain }
    }

    pub fn toolchain(&self) -> &'static Toolchain {
        self.toolchain
    }

    async fn run(&self, runner: &CommandRunner) -> LanguageReport {
        let toolchain = self.toolchain;
        let mut report = toolchain.base_report();

        // Step 1: version checks, first success wins
        let Some(version) = toolchain.detect_version(runner).await else {
            tracing::debug!(language = toolchain.name(), "not installed");
            return report;
        };
        report.installed = true;
        report.version = version;

        // Step 2: companion tools
        report.missing_deps = toolchain.missing_dependencies();

        // Step 3: installed packages and extensions
        report.packages = toolchain.list_packages(runner).await;
        report.extensions = toolchain.list_extensions(runner).await;
        report.mark_installed_recommendations();

        tracing::debug!(
            language = toolchain.name(),
            version = %report.version,
            packages = report.packages.len(),
            "detected"
        );
        report
    }
}

impl Probe for ToolchainProbe {
    fn name(&self) -> &str {
        self.toolchain.name()
    }

    fn detect<'a>(&'a self, runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
        self.run(runner).boxed()
    }

    fn list_packages<'a>(&'a self, runner: &'a CommandRunner) -> BoxFuture<'a, Vec<PackageInfo>> {
        self.toolchain.list_packages(runner).boxed()
    }

    fn fallback(&self) -> LanguageReport {
        self.toolchain.base_report()
    }
}

/// One [`ToolchainProbe`] per catalog entry.
pub fn default_registry() -> Registry {
    catalog()
        .iter()
        .map(|toolchain| Arc::new(ToolchainProbe::new(toolchain)) as Arc<dyn Probe>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::VersionCheck;

    static MISSING: Toolchain = Toolchain::new(
        "Missing",
        &[VersionCheck::Run {
            program: "definitely_not_a_compiler_314",
            args: &["--version"],
        }],
    )
    .download_url("https://example.invalid/missing");

    static LABELLED: Toolchain = Toolchain::new("Labelled", &[VersionCheck::Always("Labelled 2.0")]);

    #[test]
    fn test_default_registry_covers_catalog() {
        let registry = default_registry();
        assert_eq!(registry.len(), catalog().len());
        assert_eq!(registry[0].name(), catalog()[0].name());
    }

    #[tokio::test]
    async fn test_missing_tool_reports_not_installed() {
        let probe = ToolchainProbe::new(&MISSING);
        let report = probe.detect(&CommandRunner::default()).await;
        assert_eq!(report.name, "Missing");
        assert!(!report.installed);
        assert!(report.version.is_empty());
        assert_eq!(report.download_url, "https://example.invalid/missing");
    }

    #[tokio::test]
    async fn test_installed_report() {
        let probe = ToolchainProbe::new(&LABELLED);
        let report = probe.detect(&CommandRunner::default()).await;
        assert!(report.installed);
        assert_eq!(report.version, "Labelled 2.0");
        assert!(report.missing_deps.is_empty());
        assert!(report.packages.is_empty());
    }

    #[test]
    fn test_fallback_keeps_static_metadata() {
        let probe = ToolchainProbe::new(&MISSING);
        let report = probe.fallback();
        assert!(!report.installed);
        assert_eq!(report.download_url, "https://example.invalid/missing");
    }

    #[tokio::test]
    async fn test_default_list_packages_is_empty() {
        struct Bare;
        impl Probe for Bare {
            fn name(&self) -> &str {
                "Bare"
            }
            fn detect<'a>(&'a self, _runner: &'a CommandRunner) -> BoxFuture<'a, LanguageReport> {
                futures::future::ready(LanguageReport::not_installed("Bare")).boxed()
            }
        }

        let runner = CommandRunner::default();
        assert!(Bare.list_packages(&runner).await.is_empty());
        assert_eq!(Bare.fallback().name, "Bare");
    }
}

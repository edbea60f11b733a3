//! Installed-package discovery per ecosystem.
//!
//! A [`PackageSource`] knows one way of listing what is installed: asking a
//! package manager, walking an on-disk cache, or probing a fixed set of tools.

mod caches;
mod parsers;

pub use parsers::*;

use crate::detection::{command_exists, first_line};
use crate::{CommandRunner, PackageInfo, ProbeError, RunError};

/// Maximum number of entries taken from an on-disk cache walk.
pub const CACHE_LISTING_LIMIT: usize = 10;

/// A tool whose presence is reported as a "package" (HTML/CSS tooling,
/// SQL clients).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolEntry {
    /// Name shown in the report.
    pub name: &'static str,

    /// Executable looked up on PATH.
    pub program: &'static str,

    /// Arguments that print the tool's version.
    pub args: &'static [&'static str],
}

impl ToolEntry {
    pub const fn new(
        name: &'static str,
        program: &'static str,
        args: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            program,
            args,
        }
    }
}

/// Where a toolchain's installed packages come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageSource {
    /// `pip list --format=json` (pip, falling back to pip3)
    Pip,
    /// `npm list --global --json --depth=0`
    NpmGlobal,
    /// `gem list --local`
    Gems,
    /// `cargo install --list`
    CargoInstalls,
    /// `dotnet tool list --global`
    DotnetTools,
    /// `composer global show --format=json`
    ComposerGlobal,
    /// `nimble list --installed`
    Nimble,
    /// `luarocks list --porcelain`
    LuaRocks,
    /// `opam list --columns=name,version`
    Opam,
    /// `ghc-pkg list --simple-output`
    GhcPkg,
    /// `dart pub global list`
    DartGlobal,
    /// `Rscript` dumping `installed.packages()`
    RLibrary,
    /// `php -m`
    PhpModules,
    /// Go module cache walk
    GoModuleCache,
    /// Well-known artifacts in `~/.m2/repository`
    MavenRepository,
    /// Gradle module cache walk
    GradleCache,
    /// Version probes for a fixed set of tools
    Tools(&'static [ToolEntry]),
}

impl PackageSource {
    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pip => "pip",
            Self::NpmGlobal => "npm",
            Self::Gems => "gem",
            Self::CargoInstalls => "cargo",
            Self::DotnetTools => "dotnet tool",
            Self::ComposerGlobal => "composer",
            Self::Nimble => "nimble",
            Self::LuaRocks => "luarocks",
            Self::Opam => "opam",
            Self::GhcPkg => "ghc-pkg",
            Self::DartGlobal => "dart pub",
            Self::RLibrary => "Rscript",
            Self::PhpModules => "php -m",
            Self::GoModuleCache => "go module cache",
            Self::MavenRepository => "maven repository",
            Self::GradleCache => "gradle cache",
            Self::Tools(_) => "tool probes",
        }
    }

    /// List what this source knows to be installed.
    ///
    /// # Errors
    ///
    /// `ToolUnavailable` when the package manager is not on PATH, the
    /// runner's errors converted otherwise, `ParseFailure` for unreadable
    /// JSON listings. Cache walks and tool probes never fail on a missing
    /// directory or tool; they return an empty list.
    pub async fn list(&self, runner: &CommandRunner) -> Result<Vec<PackageInfo>, ProbeError> {
        match self {
            Self::Pip => {
                let pip = first_available(&["pip", "pip3"])?;
                let out = runner.run(pip, &["list", "--format=json"]).await?;
                parse_pip_json(&out)
            }
            Self::NpmGlobal => {
                let out = runner.run("npm", &["list", "--global", "--json", "--depth=0"]).await;
                // npm exits 1 on peer-dependency problems but still prints the tree
                parse_npm_list_json(&keep_output(out)?)
            }
            Self::Gems => {
                let out = runner.run("gem", &["list", "--local"]).await?;
                Ok(parse_gem_list(&out))
            }
            Self::CargoInstalls => {
                let out = runner.run("cargo", &["install", "--list"]).await?;
                Ok(parse_cargo_install_list(&out))
            }
            Self::DotnetTools => {
                let out = runner.run("dotnet", &["tool", "list", "--global"]).await?;
                Ok(parse_dotnet_tools(&out))
            }
            Self::ComposerGlobal => {
                let out = runner
                    .run("composer", &["global", "show", "--format=json", "--no-interaction"])
                    .await;
                parse_composer_json(&keep_output(out)?)
            }
            Self::Nimble => {
                let out = runner.run("nimble", &["list", "--installed"]).await?;
                Ok(parse_nimble_installed(&out))
            }
            Self::LuaRocks => {
                let out = runner.run("luarocks", &["list", "--porcelain"]).await?;
                Ok(parse_luarocks_porcelain(&out))
            }
            Self::Opam => {
                let out = runner
                    .run("opam", &["list", "--columns=name,version", "--color=never"])
                    .await?;
                Ok(parse_name_version_rows(&out))
            }
            Self::GhcPkg => {
                let out = runner.run("ghc-pkg", &["list", "--simple-output"]).await?;
                Ok(parse_ghc_pkg_simple(&out))
            }
            Self::DartGlobal => {
                let out = runner.run("dart", &["pub", "global", "list"]).await?;
                Ok(parse_name_version_rows(&out))
            }
            Self::RLibrary => {
                let script = "ip <- installed.packages()[, c('Package', 'Version')]; \
                              write.table(ip, quote = FALSE, row.names = FALSE, col.names = FALSE)";
                let out = runner.run("Rscript", &["-e", script]).await?;
                Ok(parse_name_version_rows(&out))
            }
            Self::PhpModules => {
                let out = runner.run("php", &["-m"]).await?;
                Ok(parse_php_modules(&out))
            }
            Self::GoModuleCache => {
                let Some(root) = caches::go_module_root() else {
                    return Ok(Vec::new());
                };
                blocking(move || caches::list_go_modules(&root, CACHE_LISTING_LIMIT)).await
            }
            Self::MavenRepository => {
                let Some(root) = caches::maven_repository_root() else {
                    return Ok(Vec::new());
                };
                blocking(move || caches::list_maven_artifacts(&root)).await
            }
            Self::GradleCache => {
                let Some(root) = caches::gradle_cache_root() else {
                    return Ok(Vec::new());
                };
                blocking(move || caches::list_gradle_cache(&root, CACHE_LISTING_LIMIT)).await
            }
            Self::Tools(entries) => Ok(probe_tools(entries, runner).await),
        }
    }
}

/// First candidate present on PATH.
fn first_available(candidates: &[&'static str]) -> Result<&'static str, ProbeError> {
    candidates
        .iter()
        .copied()
        .find(|c| command_exists(c))
        .ok_or_else(|| ProbeError::ToolUnavailable(candidates.join("/")))
}

/// Treat a non-zero exit that still produced output as success.
fn keep_output(result: Result<String, RunError>) -> Result<String, RunError> {
    match result {
        Err(RunError::NonZeroExit { output, .. }) if !output.is_empty() => Ok(output),
        other => other,
    }
}

async fn blocking<F>(walk: F) -> Result<Vec<PackageInfo>, ProbeError>
where
    F: FnOnce() -> Result<Vec<PackageInfo>, ProbeError> + Send + 'static,
{
    tokio::task::spawn_blocking(walk)
        .await
        .map_err(|e| ProbeError::ExecutionFailure(e.to_string()))?
}

async fn probe_tools(entries: &[ToolEntry], runner: &CommandRunner) -> Vec<PackageInfo> {
    let mut found = Vec::new();
    for entry in entries {
        if !command_exists(entry.program) {
            continue;
        }
        match keep_output(runner.run(entry.program, entry.args).await) {
            Ok(out) => found.push(PackageInfo::installed(entry.name, first_line(&out))),
            Err(e) => tracing::debug!(tool = entry.name, error = %e, "tool present but unusable"),
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_output_on_non_zero_exit() {
        let result = keep_output(Err(RunError::NonZeroExit {
            program: "npm".to_string(),
            code: Some(1),
            output: "{}".to_string(),
        }));
        assert_eq!(result.unwrap(), "{}");
    }

    #[test]
    fn test_keep_output_without_output_is_error() {
        let result = keep_output(Err(RunError::NonZeroExit {
            program: "npm".to_string(),
            code: Some(1),
            output: String::new(),
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_first_available_missing() {
        let result = first_available(&["no_such_pip_123", "no_such_pip3_123"]);
        assert!(matches!(result, Err(ProbeError::ToolUnavailable(name)) if name == "no_such_pip_123/no_such_pip3_123"));
    }

    #[tokio::test]
    async fn test_missing_tools_are_skipped() {
        const TOOLS: &[ToolEntry] = &[ToolEntry::new("Nope", "no_such_tool_987", &["--version"])];
        let runner = CommandRunner::default();
        let found = PackageSource::Tools(TOOLS).list(&runner).await.unwrap();
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_present_tool_is_listed_with_first_line() {
        const TOOLS: &[ToolEntry] = &[ToolEntry::new(
            "Shell",
            "sh",
            &["-c", "echo 'shell 1.2.3'; echo more"],
        )];
        let runner = CommandRunner::default();
        let found = PackageSource::Tools(TOOLS).list(&runner).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Shell");
        assert_eq!(found[0].version, "shell 1.2.3");
        assert!(found[0].installed);
    }
}

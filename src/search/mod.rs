//! Package search through the package managers' own command-line tools.

mod parsers;

pub use parsers::*;

use crate::detection::command_exists;
use crate::{CommandRunner, PackageInfo, ProbeError, SearchError};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Maximum number of results returned by a search.
pub const MAX_SEARCH_RESULTS: usize = 20;

/// A package manager that can be searched.
///
/// Parsed from, and displayed as, its lowercase id:
///
/// ```rust
/// use toolchain_scout::PackageManager;
///
/// let manager: PackageManager = "cargo".parse().unwrap();
/// assert_eq!(manager, PackageManager::Cargo);
/// assert_eq!(manager.to_string(), "cargo");
/// assert!("cpan".parse::<PackageManager>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pip,
    Gem,
    Cargo,
    Composer,
    Nuget,
    Maven,
    Go,
    Dub,
    Hex,
    Nimble,
    Brew,
}

impl PackageManager {
    /// All supported managers.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Executables that provide the search, in order of preference.
    pub fn programs(&self) -> &'static [&'static str] {
        match self {
            Self::Npm => &["npm"],
            Self::Pip => &["pip", "pip3"],
            Self::Gem => &["gem"],
            Self::Cargo => &["cargo"],
            Self::Composer => &["composer"],
            Self::Nuget => &["dotnet"],
            Self::Maven => &["mvn"],
            Self::Go => &["go"],
            Self::Dub => &["dub"],
            Self::Hex => &["mix"],
            Self::Nimble => &["nimble"],
            Self::Brew => &["brew"],
        }
    }

    /// Fill in the install command and registry page of a search result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toolchain_scout::{PackageInfo, PackageManager};
    ///
    /// let mut pkg = PackageInfo::listed("serde", "1.0.193", "");
    /// PackageManager::Cargo.decorate(&mut pkg);
    /// assert_eq!(pkg.install_link, "cargo add serde");
    /// assert_eq!(pkg.download_url, "https://crates.io/crates/serde");
    /// ```
    pub fn decorate(&self, pkg: &mut PackageInfo) {
        let name = pkg.name.as_str();
        let (install_link, download_url) = match self {
            Self::Npm => (
                format!("npm install {name}"),
                format!("https://www.npmjs.com/package/{name}"),
            ),
            Self::Pip => (
                format!("pip install {name}"),
                format!("https://pypi.org/project/{name}"),
            ),
            Self::Gem => (
                format!("gem install {name}"),
                format!("https://rubygems.org/gems/{name}"),
            ),
            Self::Cargo => (
                format!("cargo add {name}"),
                format!("https://crates.io/crates/{name}"),
            ),
            Self::Composer => (
                format!("composer require {name}"),
                format!("https://packagist.org/packages/{name}"),
            ),
            Self::Nuget => (
                format!("dotnet add package {name}"),
                format!("https://www.nuget.org/packages/{name}"),
            ),
            Self::Maven => {
                let (group, artifact) = name.split_once(':').unwrap_or((name, ""));
                (
                    format!(
                        "<dependency>\n  <groupId>{group}</groupId>\n  <artifactId>{artifact}</artifactId>\n  <version>{}</version>\n</dependency>",
                        pkg.version
                    ),
                    format!("https://mvnrepository.com/artifact/{group}/{artifact}"),
                )
            }
            Self::Go => (
                format!("go get {name}"),
                format!("https://pkg.go.dev/{name}"),
            ),
            Self::Dub => (
                format!("dub add {name}"),
                format!("https://code.dlang.org/packages/{name}"),
            ),
            Self::Hex => (
                format!("{{:{name}, \"~> {}\"}}", pkg.version),
                format!("https://hex.pm/packages/{name}"),
            ),
            Self::Nimble => (
                format!("nimble install {name}"),
                format!("https://nimble.directory/pkg/{name}"),
            ),
            Self::Brew => (
                format!("brew install {name}"),
                format!("https://formulae.brew.sh/formula/{name}"),
            ),
        };
        pkg.install_link = install_link;
        pkg.download_url = download_url;
    }
}

/// Search a package manager's registry for `name`.
///
/// Results are capped at [`MAX_SEARCH_RESULTS`] and decorated with install
/// links. An empty query, or a manager whose tool is not installed, yields an
/// empty list.
///
/// # Errors
///
/// - `UnsupportedManager` for Maven, which has no command-line search
/// - `Probe` when the search command fails or times out
///
/// # Example
///
/// ```rust,no_run
/// use toolchain_scout::{search_packages, CommandRunner, PackageManager};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let runner = CommandRunner::default();
///     let hits = search_packages(PackageManager::Cargo, "serde", &runner).await;
///     for pkg in hits.unwrap_or_default() {
///         println!("{} {} -> {}", pkg.name, pkg.version, pkg.install_link);
///     }
/// }
/// ```
pub async fn search_packages(
    manager: PackageManager,
    name: &str,
    runner: &CommandRunner,
) -> Result<Vec<PackageInfo>, SearchError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(Vec::new());
    }
    if manager == PackageManager::Maven {
        return Err(SearchError::UnsupportedManager("maven"));
    }

    let Some(program) = manager.programs().iter().copied().find(|p| command_exists(p)) else {
        tracing::debug!(%manager, "search tool not installed");
        return Ok(Vec::new());
    };

    tracing::debug!(%manager, query = name, "searching");

    let limit = MAX_SEARCH_RESULTS.to_string();
    let args: Vec<&str> = match manager {
        PackageManager::Npm => vec!["search", "--json", name],
        PackageManager::Pip => vec!["index", "versions", name],
        PackageManager::Gem => vec!["search", "-r", name],
        PackageManager::Cargo => vec!["search", name, "--limit", limit.as_str()],
        PackageManager::Nuget => vec!["package", "search", name, "--take", limit.as_str()],
        PackageManager::Go => vec!["list", "-m", "-versions", name],
        PackageManager::Hex => vec!["hex.search", name],
        PackageManager::Composer
        | PackageManager::Dub
        | PackageManager::Nimble
        | PackageManager::Brew
        | PackageManager::Maven => vec!["search", name],
    };
    let output = runner.run(program, &args).await.map_err(ProbeError::from)?;

    let mut packages = match manager {
        PackageManager::Npm => parse_npm_search(&output, name),
        PackageManager::Pip => parse_pip_index(&output),
        PackageManager::Gem => parse_gem_search(&output),
        PackageManager::Cargo => parse_cargo_search(&output),
        PackageManager::Composer => parse_composer_search(&output),
        PackageManager::Nuget => parse_nuget_search(&output),
        PackageManager::Go => parse_go_list_versions(&output),
        PackageManager::Dub => parse_dub_search(&output),
        PackageManager::Hex => parse_hex_search(&output),
        PackageManager::Nimble => parse_nimble_search(&output),
        PackageManager::Brew => parse_brew_search(&output),
        PackageManager::Maven => Vec::new(),
    };

    packages.truncate(MAX_SEARCH_RESULTS);

    if manager == PackageManager::Brew {
        enrich_from_brew_info(&mut packages, runner).await;
    }

    for pkg in &mut packages {
        manager.decorate(pkg);
    }
    Ok(packages)
}

/// Fill version and description from `brew info`; failures leave the entry as is.
async fn enrich_from_brew_info(packages: &mut [PackageInfo], runner: &CommandRunner) {
    let infos = join_all(packages.iter().map(|pkg| async move {
        runner
            .run("brew", &["info", "--json=v1", pkg.name.as_str()])
            .await
            .map_err(ProbeError::from)
            .and_then(|out| parse_brew_info(&out))
    }))
    .await;

    for (pkg, info) in packages.iter_mut().zip(infos) {
        match info {
            Ok(Some((version, description))) => {
                pkg.version = version;
                pkg.description = description;
            }
            Ok(None) => {}
            Err(e) => tracing::debug!(formula = %pkg.name, error = %e, "brew info failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_ids_round_trip() {
        for manager in PackageManager::all() {
            let id = manager.to_string();
            assert_eq!(id, id.to_lowercase());
            assert_eq!(id.parse::<PackageManager>().unwrap(), manager);
        }
        assert_eq!(PackageManager::all().count(), 12);
    }

    #[test]
    fn test_decorate_maven_dependency_snippet() {
        let mut pkg = PackageInfo::listed("com.google.guava:guava", "32.1.3-jre", "");
        PackageManager::Maven.decorate(&mut pkg);
        assert!(pkg.install_link.contains("<groupId>com.google.guava</groupId>"));
        assert!(pkg.install_link.contains("<artifactId>guava</artifactId>"));
        assert!(pkg.install_link.contains("<version>32.1.3-jre</version>"));
        assert_eq!(pkg.download_url, "https://mvnrepository.com/artifact/com.google.guava/guava");
    }

    #[test]
    fn test_decorate_hex_deps_tuple() {
        let mut pkg = PackageInfo::listed("phoenix", "1.7.10", "");
        PackageManager::Hex.decorate(&mut pkg);
        assert_eq!(pkg.install_link, "{:phoenix, \"~> 1.7.10\"}");
        assert_eq!(pkg.download_url, "https://hex.pm/packages/phoenix");
    }

    #[test]
    fn test_decorate_links() {
        let cases = [
            (PackageManager::Npm, "npm install left-pad", "https://www.npmjs.com/package/left-pad"),
            (PackageManager::Pip, "pip install left-pad", "https://pypi.org/project/left-pad"),
            (PackageManager::Brew, "brew install left-pad", "https://formulae.brew.sh/formula/left-pad"),
            (PackageManager::Nimble, "nimble install left-pad", "https://nimble.directory/pkg/left-pad"),
        ];
        for (manager, install, url) in cases {
            let mut pkg = PackageInfo::listed("left-pad", "", "");
            manager.decorate(&mut pkg);
            assert_eq!(pkg.install_link, install);
            assert_eq!(pkg.download_url, url);
        }
    }

    #[tokio::test]
    async fn test_empty_query_returns_nothing() {
        let runner = CommandRunner::default();
        let result = search_packages(PackageManager::Npm, "   ", &runner).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_maven_is_unsupported() {
        let runner = CommandRunner::default();
        let result = search_packages(PackageManager::Maven, "guava", &runner).await;
        assert!(matches!(result, Err(SearchError::UnsupportedManager("maven"))));
    }
}

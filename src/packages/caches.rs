//! On-disk package caches (Go module cache, Maven local repository, Gradle).
//!
//! These walks are blocking and are run through `spawn_blocking`.

use crate::{PackageInfo, ProbeError};
use semver::Version;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Artifacts looked up in the Maven local repository.
const MAVEN_ARTIFACTS: &[(&str, &str)] = &[
    ("org.springframework", "spring-core"),
    ("org.springframework.boot", "spring-boot"),
    ("org.hibernate", "hibernate-core"),
    ("org.hibernate.orm", "hibernate-core"),
    ("junit", "junit"),
    ("org.junit.jupiter", "junit-jupiter-api"),
    ("com.fasterxml.jackson.core", "jackson-databind"),
    ("com.google.guava", "guava"),
    ("org.apache.commons", "commons-lang3"),
    ("org.slf4j", "slf4j-api"),
    ("org.projectlombok", "lombok"),
    ("org.mockito", "mockito-core"),
];

/// Go module cache: `$GOMODCACHE`, then `$GOPATH/pkg/mod`, then `~/go/pkg/mod`.
pub fn go_module_root() -> Option<PathBuf> {
    let from_env = std::env::var_os("GOMODCACHE")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            let gopath = std::env::var_os("GOPATH")?;
            let first = std::env::split_paths(&gopath).next()?;
            Some(first.join("pkg").join("mod"))
        });

    from_env
        .or_else(|| dirs::home_dir().map(|home| home.join("go").join("pkg").join("mod")))
        .filter(|path| path.is_dir())
}

/// `~/.m2/repository`
pub fn maven_repository_root() -> Option<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".m2").join("repository"))
        .filter(|path| path.is_dir())
}

/// `$GRADLE_USER_HOME/caches/modules-2/files-2.1`, defaulting to `~/.gradle`.
pub fn gradle_cache_root() -> Option<PathBuf> {
    std::env::var_os("GRADLE_USER_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".gradle")))
        .map(|base| base.join("caches").join("modules-2").join("files-2.1"))
        .filter(|path| path.is_dir())
}

/// List modules in a Go module cache.
///
/// Module directories are named `<path>@<version>`. The `cache/` download
/// area is skipped and upper-case letters, which Go stores as `!x`, are
/// restored.
pub fn list_go_modules(root: &Path, limit: usize) -> Result<Vec<PackageInfo>, ProbeError> {
    let mut packages = Vec::new();
    if !root.is_dir() || limit == 0 {
        return Ok(packages);
    }

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable module cache entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.depth() == 1 && entry.file_name() == "cache" {
            walker.skip_current_dir();
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| ProbeError::parse("go module cache", e))?;
        let relative = relative.to_string_lossy().replace('\\', "/");

        if let Some((module, version)) = relative.split_once('@') {
            packages.push(PackageInfo::installed(unescape_module_path(module), version));
            walker.skip_current_dir();
            if packages.len() >= limit {
                break;
            }
        }
    }

    Ok(packages)
}

/// Undo Go's case encoding: `!b` -> `B`.
fn unescape_module_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        if c == '!' {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Look up well-known artifacts in a Maven local repository, newest version each.
pub fn list_maven_artifacts(repository: &Path) -> Result<Vec<PackageInfo>, ProbeError> {
    let mut packages = Vec::new();
    for (group, artifact) in MAVEN_ARTIFACTS {
        let dir = group
            .split('.')
            .fold(repository.to_path_buf(), |path, segment| path.join(segment))
            .join(artifact);

        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        let newest = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|e| e.file_name().into_string().ok())
            .max_by(|a, b| compare_versions(a, b));

        if let Some(version) = newest {
            packages.push(PackageInfo::installed(format!("{group}:{artifact}"), version));
        }
    }
    Ok(packages)
}

/// Order two version directory names, semver-aware where possible.
fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| Version::parse(s).ok().or_else(|| crate::detection::parse_version(s).ok());
    match (parse(a), parse(b)) {
        (Some(va), Some(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// List `group:name` coordinates from a Gradle module cache.
///
/// The cache is laid out as `<group>/<name>/<version>/<hash>/<file>`.
pub fn list_gradle_cache(root: &Path, limit: usize) -> Result<Vec<PackageInfo>, ProbeError> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    Ok(WalkDir::new(root)
        .min_depth(3)
        .max_depth(3)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .filter_map(|e| {
            let version = e.file_name().to_str()?.to_string();
            let name_dir = e.path().parent()?;
            let name = name_dir.file_name()?.to_str()?;
            let group = name_dir.parent()?.file_name()?.to_str()?;
            Some(PackageInfo::installed(format!("{group}:{name}"), version))
        })
        .take(limit)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, rel: &str) {
        fs::create_dir_all(root.join(rel)).unwrap();
    }

    #[test]
    fn test_unescape_module_path() {
        assert_eq!(unescape_module_path("github.com/!burnt!sushi/toml"), "github.com/BurntSushi/toml");
        assert_eq!(unescape_module_path("golang.org/x/net"), "golang.org/x/net");
    }

    #[test]
    fn test_list_go_modules() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        mkdirs(root, "cache/download/github.com/gin-gonic/gin/@v");
        mkdirs(root, "github.com/gin-gonic/gin@v1.9.1/internal");
        mkdirs(root, "github.com/!burnt!sushi/toml@v1.3.2");

        let packages = list_go_modules(root, 10).unwrap();
        let found: Vec<_> = packages
            .iter()
            .map(|p| (p.name.as_str(), p.version.as_str()))
            .collect();

        assert_eq!(
            found,
            vec![
                ("github.com/BurntSushi/toml", "v1.3.2"),
                ("github.com/gin-gonic/gin", "v1.9.1"),
            ]
        );
    }

    #[test]
    fn test_list_go_modules_respects_limit() {
        let tmp = TempDir::new().unwrap();
        for i in 0..15 {
            mkdirs(tmp.path(), &format!("example.com/mod{i:02}@v1.0.{i}"));
        }
        let packages = list_go_modules(tmp.path(), 10).unwrap();
        assert_eq!(packages.len(), 10);
    }

    #[test]
    fn test_list_go_modules_missing_root() {
        let tmp = TempDir::new().unwrap();
        let packages = list_go_modules(&tmp.path().join("absent"), 10).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_list_maven_artifacts_picks_newest() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        mkdirs(root, "com/google/guava/guava/31.1-jre");
        mkdirs(root, "com/google/guava/guava/32.1.3-jre");
        mkdirs(root, "junit/junit/4.9");
        mkdirs(root, "junit/junit/4.13.2");

        let packages = list_maven_artifacts(root).unwrap();
        let guava = packages.iter().find(|p| p.name == "com.google.guava:guava").unwrap();
        assert_eq!(guava.version, "32.1.3-jre");
        let junit = packages.iter().find(|p| p.name == "junit:junit").unwrap();
        assert_eq!(junit.version, "4.13.2");
        assert_eq!(packages.len(), 2);
    }

    #[test]
    fn test_list_gradle_cache() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        mkdirs(root, "org.jetbrains.kotlin/kotlin-stdlib/1.9.22/abc123");
        mkdirs(root, "com.squareup.okhttp3/okhttp/4.12.0/def456");

        let packages = list_gradle_cache(root, 10).unwrap();
        let names: Vec<_> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["com.squareup.okhttp3:okhttp", "org.jetbrains.kotlin:kotlin-stdlib"]
        );
        assert_eq!(packages[1].version, "1.9.22");
    }
}

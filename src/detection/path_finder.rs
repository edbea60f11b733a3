//! PATH-based executable lookup with fallback locations.

use std::path::PathBuf;

/// System fallback paths to check if executable not found in PATH.
const FALLBACK_PATHS: &[&str] = &["/usr/local/bin", "/usr/bin"];

/// Find an executable by name.
///
/// This function first tries to find the executable using the system PATH
/// via the `which` crate. If not found, it checks common fallback locations
/// including system directories and user home directories.
///
/// # Arguments
///
/// * `name` - The executable name to search for (e.g., "python3", "cargo")
///
/// # Returns
///
/// `Some(PathBuf)` if the executable is found, `None` otherwise.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    // Primary: PATH lookup via which crate
    // This handles symlinks, relative paths, and platform extensions (.exe, .cmd)
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    for dir in FALLBACK_PATHS {
        let path = PathBuf::from(dir).join(name);
        if path.is_file() {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        for sub in [".local/bin", "bin"] {
            let path = home.join(sub).join(name);
            if path.is_file() {
                return Some(path);
            }
        }
    }

    None
}

/// Check whether a tool is available without spawning it.
///
/// Probes call this before every subprocess so that missing tools cost a
/// directory lookup instead of a spawn attempt.
///
/// # Example
///
/// ```rust
/// use toolchain_scout::command_exists;
///
/// assert!(!command_exists("definitely_not_a_real_tool_xyz123"));
/// ```
pub fn command_exists(name: &str) -> bool {
    find_executable(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_find_common_executable() {
        // sh should exist on any Unix system
        let result = find_executable("sh");
        assert!(result.is_some());
        let path = result.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_find_nonexistent_executable() {
        let result = find_executable("definitely_not_a_real_executable_12345");
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_name_is_never_found() {
        assert!(find_executable("").is_none());
        assert!(!command_exists(""));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_exists() {
        assert!(command_exists("sh"));
        assert!(!command_exists("definitely_not_a_real_executable_12345"));
    }
}

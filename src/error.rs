//! Error types for command execution, probing, search and configuration.
//!
//! None of these ever reach the dispatcher: probes absorb them and degrade to
//! a "not installed" or partial report. They exist so that the helpers a probe
//! is built from can use `?` and so that callers of the search and config
//! APIs get a typed reason.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by [`CommandRunner::run`](crate::CommandRunner::run).
///
/// A timeout is reported separately from every other failure so that callers
/// can tell a hung tool apart from a broken one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RunError {
    /// The program could not be found.
    #[error("{program}: command not found")]
    NotFound {
        /// Program that was requested.
        program: String,
    },

    /// The program exists but could not be executed.
    #[error("{program}: permission denied")]
    PermissionDenied {
        /// Program that was requested.
        program: String,
    },

    /// Spawning failed for another I/O reason.
    #[error("{program}: failed to spawn: {message}")]
    Spawn {
        /// Program that was requested.
        program: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// The process ran to completion but exited unsuccessfully.
    ///
    /// The captured output is kept because several package managers exit
    /// non-zero while still printing a usable listing.
    #[error("{program}: exited with status {code:?}")]
    NonZeroExit {
        /// Program that was requested.
        program: String,
        /// Exit code, `None` when terminated by a signal.
        code: Option<i32>,
        /// Combined, trimmed output.
        output: String,
    },

    /// The process did not finish before the deadline and was killed.
    #[error("{program}: timed out after {timeout:?}")]
    TimeoutExceeded {
        /// Program that was requested.
        program: String,
        /// The deadline that was exceeded.
        timeout: Duration,
    },
}

impl RunError {
    /// Whether this error is the deadline case.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutExceeded { .. })
    }

    /// Output captured before the failure, if the process got that far.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::NonZeroExit { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Probe-internal failure taxonomy.
///
/// Every variant maps to the same user-visible outcome (tool treated as not
/// usable, or package list left partial); the distinction only matters for
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The tool is not on PATH.
    #[error("tool unavailable: {0}")]
    ToolUnavailable(String),

    /// The tool exceeded the command deadline.
    #[error("tool timed out: {0}")]
    ExecutionTimeout(String),

    /// The tool could not be spawned or exited unsuccessfully.
    #[error("tool failed: {0}")]
    ExecutionFailure(String),

    /// The tool's output could not be interpreted.
    #[error("unparseable output from {source_name}: {message}")]
    ParseFailure {
        /// Which command or file produced the output.
        source_name: String,
        /// What went wrong.
        message: String,
    },
}

impl ProbeError {
    pub(crate) fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::ParseFailure {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}

impl From<RunError> for ProbeError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::NotFound { program } => Self::ToolUnavailable(program),
            RunError::TimeoutExceeded { .. } => Self::ExecutionTimeout(err.to_string()),
            other => Self::ExecutionFailure(other.to_string()),
        }
    }
}

/// Errors returned by [`search_packages`](crate::search_packages).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The package manager has no command-line search.
    #[error("{0} has no command-line search")]
    UnsupportedManager(&'static str),

    /// The search command failed or printed something unreadable.
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Errors returned when persisting configuration.
///
/// Loading never fails; see [`ConfigStore`](crate::ConfigStore).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No per-user directory could be determined.
    #[error("no per-user configuration directory available")]
    NoConfigDir,

    /// Writing the file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Target file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The value could not be encoded.
    #[error("failed to encode configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_error_display() {
        let err = RunError::TimeoutExceeded {
            program: "sleep".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "sleep: timed out after 5s");
        assert!(err.is_timeout());
        assert!(err.output().is_none());
    }

    #[test]
    fn test_non_zero_exit_keeps_output() {
        let err = RunError::NonZeroExit {
            program: "npm".to_string(),
            code: Some(1),
            output: "{\"dependencies\":{}}".to_string(),
        };
        assert!(!err.is_timeout());
        assert_eq!(err.output(), Some("{\"dependencies\":{}}"));
    }

    #[test]
    fn test_probe_error_from_run_error() {
        let missing = ProbeError::from(RunError::NotFound {
            program: "gem".to_string(),
        });
        assert_eq!(missing, ProbeError::ToolUnavailable("gem".to_string()));

        let timeout = ProbeError::from(RunError::TimeoutExceeded {
            program: "mvn".to_string(),
            timeout: Duration::from_secs(5),
        });
        assert!(matches!(timeout, ProbeError::ExecutionTimeout(_)));

        let failed = ProbeError::from(RunError::PermissionDenied {
            program: "cargo".to_string(),
        });
        assert!(matches!(failed, ProbeError::ExecutionFailure(_)));
    }

    #[test]
    fn test_search_error_display() {
        let err = SearchError::UnsupportedManager("maven");
        assert_eq!(err.to_string(), "maven has no command-line search");
    }
}

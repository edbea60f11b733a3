//! Scan options configuration.
//!
//! This module provides the [`ScanOptions`] struct for configuring a
//! detection pass: the per-command deadline handed to every probe and the
//! number of probes allowed to run at once.

use crate::CommandRunner;
use std::time::Duration;

/// Default number of probes allowed past the admission gate at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Configuration options for a detection pass.
///
/// # Default Behavior
///
/// Each external command gets 5 seconds and at most 10 probes run
/// concurrently. Up to ~70 probes are registered, some of which walk package
/// caches, so the cap keeps a scan from saturating the host.
///
/// # Example
///
/// ```rust
/// use toolchain_scout::ScanOptions;
/// use std::time::Duration;
///
/// // Use default options (5 second timeout, 10 concurrent probes)
/// let opts = ScanOptions::default();
///
/// // Slower machine: longer deadline, fewer parallel probes
/// let opts = ScanOptions {
///     command_timeout: Duration::from_secs(10),
///     max_concurrency: 4,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Deadline for every external command a probe runs.
    ///
    /// Default: 5 seconds
    pub command_timeout: Duration,

    /// Maximum number of probes executing at the same instant.
    ///
    /// Zero is treated as one.
    ///
    /// Default: 10
    pub max_concurrency: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            command_timeout: Duration::from_secs(5),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl ScanOptions {
    /// The effective concurrency cap (never zero).
    pub fn concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }

    /// A command runner honoring `command_timeout`.
    pub fn runner(&self) -> CommandRunner {
        CommandRunner::new(self.command_timeout)
    }
}

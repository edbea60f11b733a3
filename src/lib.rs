//! # toolchain-scout
//!
//! Concurrent detection of installed programming-language toolchains.
//!
//! Every supported language has a probe. A probe runs the toolchain's version
//! command, checks for companion tools, and lists installed packages. Probes
//! run in parallel on the tokio runtime under a bounded concurrency limit, and
//! each one always produces exactly one [`LanguageReport`]: a missing, hung or
//! broken tool degrades to "not installed" instead of failing the scan.
//!
//! ## Features
//!
//! - [`catalog()`] of ~70 static [`Toolchain`] descriptors
//! - [`Probe`] trait and [`ToolchainProbe`], the catalog-backed implementation
//! - [`Dispatcher`] fanning probes out with a semaphore and a result channel
//! - [`search_packages`] against the package managers' own search commands
//! - [`ConfigStore`] for the persisted language, theme and AI settings
//!
//! ## Example
//!
//! ```rust,no_run
//! use toolchain_scout::{detect_all_with_options, ScanOptions};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let options = ScanOptions {
//!         command_timeout: Duration::from_secs(3),
//!         ..ScanOptions::default()
//!     };
//!     let mut reports = detect_all_with_options(options).await;
//!     reports.sort_by_name();
//!     for report in reports.installed() {
//!         println!("{}: {}", report.name, report.version);
//!     }
//! }
//! ```

mod aggregate;
mod config;
mod detection;
mod dispatch;
mod error;
mod options;
pub mod packages;
mod probe;
mod reference;
mod report;
pub mod search;
mod toolchain;

pub use aggregate::{AggregatedReport, ResultAggregator, ScanProgress};
pub use config::{AiConfig, ConfigStore, LanguageConfig, ThemeConfig, UiLanguage};
pub use detection::{command_exists, CommandRunner, DEFAULT_COMMAND_TIMEOUT};
pub use dispatch::{detect_all, detect_all_with_options, Dispatcher};
pub use error::{ConfigError, ProbeError, RunError, SearchError};
pub use options::{ScanOptions, DEFAULT_MAX_CONCURRENCY};
pub use packages::{PackageSource, ToolEntry};
pub use probe::{default_registry, Probe, Registry, ToolchainProbe};
pub use reference::{ai_provider, ai_providers, tutorials, AiProvider, PackageTutorial, SystemInfo};
pub use report::{LanguageReport, PackageInfo};
pub use search::{search_packages, PackageManager, MAX_SEARCH_RESULTS};
pub use toolchain::{
    catalog, find, Dependency, Recommendation, Toolchain, VersionCheck, UNKNOWN_VERSION,
};

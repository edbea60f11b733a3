//! Low-level detection helpers shared by every probe.
//!
//! - `CommandRunner`: subprocess execution with a hard deadline
//! - `command_exists` / `find_executable`: PATH lookup with fallbacks
//! - `parse_version` / `first_line`: version banner scraping

mod parser;
mod path_finder;
mod runner;

pub use parser::{first_line, parse_version};
pub use path_finder::{command_exists, find_executable};
pub use runner::{CommandRunner, DEFAULT_COMMAND_TIMEOUT};

//! Subprocess execution with a hard deadline.

use crate::detection::find_executable;
use crate::RunError;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Default deadline for a single external command.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs external tools on behalf of probes.
///
/// Every invocation is wrapped in a timeout; when it fires, the child is
/// killed (the future owning it is dropped with `kill_on_drop`). stdout and
/// stderr are both captured and returned as one trimmed string, stdout first.
///
/// # Example
///
/// ```rust,no_run
/// use toolchain_scout::CommandRunner;
/// use std::time::Duration;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let runner = CommandRunner::new(Duration::from_secs(2));
///     match runner.run("rustc", &["--version"]).await {
///         Ok(banner) => println!("{banner}"),
///         Err(e) => println!("rustc unusable: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRunner {
    timeout: Duration,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

impl CommandRunner {
    /// Create a runner with the given per-command deadline.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The per-command deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `program` with `args` and return its combined output.
    ///
    /// # Errors
    ///
    /// - `TimeoutExceeded` if the process is still running at the deadline
    /// - `NotFound` / `PermissionDenied` / `Spawn` if it could not be started
    /// - `NonZeroExit` if it finished unsuccessfully (output is preserved)
    pub async fn run<S: AsRef<OsStr>>(&self, program: &str, args: &[S]) -> Result<String, RunError> {
        // Resolve up front: on Windows this is what turns `npm` into `npm.cmd`
        let resolved = find_executable(program).unwrap_or_else(|| PathBuf::from(program));

        let mut command = Command::new(&resolved);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        hide_console_window(&mut command);

        tracing::trace!(program, timeout = ?self.timeout, "running command");

        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| RunError::TimeoutExceeded {
                program: program.to_string(),
                timeout: self.timeout,
            })?
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => RunError::NotFound {
                    program: program.to_string(),
                },
                std::io::ErrorKind::PermissionDenied => RunError::PermissionDenied {
                    program: program.to_string(),
                },
                _ => RunError::Spawn {
                    program: program.to_string(),
                    message: e.to_string(),
                },
            })?;

        let combined = combine_output(&output.stdout, &output.stderr);

        if !output.status.success() {
            return Err(RunError::NonZeroExit {
                program: program.to_string(),
                code: output.status.code(),
                output: combined,
            });
        }

        Ok(combined)
    }
}

/// Merge stdout and stderr into one trimmed string.
fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);
    let (out, err) = (stdout.trim(), stderr.trim());

    match (out.is_empty(), err.is_empty()) {
        (false, false) => format!("{out}\n{err}"),
        (false, true) => out.to_string(),
        (true, _) => err.to_string(),
    }
}

#[cfg(windows)]
fn hide_console_window(command: &mut Command) {
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_console_window(_command: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_combine_output() {
        assert_eq!(combine_output(b"out\n", b""), "out");
        assert_eq!(combine_output(b"", b"  err \n"), "err");
        assert_eq!(combine_output(b"out\n", b"err\n"), "out\nerr");
        assert_eq!(combine_output(b"", b""), "");
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(CommandRunner::default().timeout(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_run_nonexistent() {
        let runner = CommandRunner::default();
        let result = runner
            .run("definitely_not_a_real_executable_12345", &["--version"])
            .await;
        assert!(matches!(result, Err(RunError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captures_stdout_and_stderr() {
        let runner = CommandRunner::default();
        let output = runner
            .run("sh", &["-c", "echo visible; echo hidden 1>&2"])
            .await
            .unwrap();
        assert_eq!(output, "visible\nhidden");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_non_zero_exit_keeps_output() {
        let runner = CommandRunner::default();
        let result = runner.run("sh", &["-c", "echo partial; exit 3"]).await;
        match result {
            Err(RunError::NonZeroExit { code, output, .. }) => {
                assert_eq!(code, Some(3));
                assert_eq!(output, "partial");
            }
            other => panic!("expected NonZeroExit, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_timeout_is_distinct() {
        let runner = CommandRunner::new(Duration::from_millis(200));
        let start = Instant::now();
        let result = runner.run("sleep", &["5"]).await;
        assert!(matches!(result, Err(RunError::TimeoutExceeded { .. })));
        assert!(start.elapsed() < Duration::from_secs(3));
    }
}

//! Shell command execution.

use crate::error::{DepstrapError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Whether anything at all was written to stderr.
    pub fn has_stderr(&self) -> bool {
        !self.stderr.is_empty()
    }
}

/// The single boundary through which external commands are run.
///
/// Implementations block until the command exits.
pub trait CommandRunner {
    /// Run `command` through the shell and capture its output.
    ///
    /// Returns `Err` only when the command could not be started. A command
    /// that ran and exited non-zero is `Ok` with `success == false`.
    fn run(&self, command: &str) -> Result<CommandResult>;
}

/// Runs commands through the system shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        execute(command)
    }
}

/// Execute a shell command, capturing stdout and stderr.
pub fn execute(command: &str) -> Result<CommandResult> {
    let start = Instant::now();
    tracing::debug!("Running: {}", command);

    let (shell, flag) = shell_invocation();
    let output = Command::new(shell)
        .arg(flag)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            tracing::debug!("Failed to spawn '{}': {}", command, e);
            DepstrapError::CommandFailed {
                command: command.to_string(),
                code: None,
            }
        })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        command,
        output.status.code(),
        duration
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Shell and flag used to pass a command string.
///
/// Always a plain non-interactive shell: presence checks and installs must
/// not depend on the user's rc files or a controlling terminal.
fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

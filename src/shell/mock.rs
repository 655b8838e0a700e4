//! Recording command runner for testing.
//!
//! `RecordingRunner` implements [`CommandRunner`] without starting any
//! process. Every command is recorded in call order, and responses can be
//! scripted per command string. Unscripted commands succeed with empty
//! output.
//!
//! # Example
//!
//! ```
//! use depstrap::shell::{CommandRunner, RecordingRunner};
//!
//! let runner = RecordingRunner::new();
//! runner.fail("gs --version");
//!
//! assert!(!runner.run("gs --version").unwrap().success);
//! assert!(runner.run("brew install ghostscript").unwrap().success);
//! assert_eq!(runner.commands(), vec!["gs --version", "brew install ghostscript"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{DepstrapError, Result};

use super::command::{CommandResult, CommandRunner};

#[derive(Debug, Clone)]
enum Response {
    Result(CommandResult),
    SpawnError,
}

/// Command runner that records calls and returns scripted results.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    responses: RefCell<HashMap<String, Response>>,
    calls: RefCell<Vec<String>>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result returned for `command`.
    pub fn respond(&self, command: &str, result: CommandResult) {
        self.responses
            .borrow_mut()
            .insert(command.to_string(), Response::Result(result));
    }

    /// Make `command` succeed with the given stdout.
    pub fn succeed_with(&self, command: &str, stdout: &str) {
        self.respond(
            command,
            CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO),
        );
    }

    /// Make `command` exit with status 1.
    pub fn fail(&self, command: &str) {
        self.respond(
            command,
            CommandResult::failure(Some(1), String::new(), String::new(), Duration::ZERO),
        );
    }

    /// Make `command` exit with `code` and write `stderr`.
    pub fn fail_with(&self, command: &str, code: i32, stderr: &str) {
        self.respond(
            command,
            CommandResult::failure(Some(code), String::new(), stderr.to_string(), Duration::ZERO),
        );
    }

    /// Make `command` fail to start, as if the shell were missing.
    pub fn spawn_error(&self, command: &str) {
        self.responses
            .borrow_mut()
            .insert(command.to_string(), Response::SpawnError);
    }

    /// All commands run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether `command` was run at least once.
    pub fn ran(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        self.calls.borrow_mut().push(command.to_string());

        match self.responses.borrow().get(command) {
            Some(Response::Result(result)) => Ok(result.clone()),
            Some(Response::SpawnError) => Err(DepstrapError::CommandFailed {
                command: command.to_string(),
                code: None,
            }),
            None => Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
        }
    }
}

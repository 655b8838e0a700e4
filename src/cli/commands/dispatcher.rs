//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::error::Result;
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::completions::CompletionsCommand;
use super::context::RunContext;
use super::install::InstallCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit status for the process. Codes outside `0..=255` become 1.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    runner: Box<dyn CommandRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that runs real shell commands.
    pub fn new(working_dir: PathBuf) -> Self {
        Self::with_runner(working_dir, Box::new(ShellRunner::new()))
    }

    /// Create a dispatcher with a custom command runner.
    pub fn with_runner(working_dir: PathBuf, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            working_dir,
            runner,
        }
    }

    /// Directory searched for `.depstrap.yml`.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let ctx = self.context(cli)?;
                InstallCommand::new(ctx, args.clone(), self.runner.as_ref()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                let ctx = self.context(cli)?;
                CheckCommand::new(ctx, args.clone(), self.runner.as_ref()).execute(ui)
            }
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
            None => {
                let ctx = self.context(cli)?;
                InstallCommand::new(ctx, InstallArgs::default(), self.runner.as_ref()).execute(ui)
            }
        }
    }

    fn context(&self, cli: &Cli) -> Result<RunContext> {
        RunContext::load(
            cli.config.as_deref(),
            cli.platform.as_deref(),
            &self.working_dir,
        )
    }
}

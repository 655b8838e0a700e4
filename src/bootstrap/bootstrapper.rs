//! Presence checks and install execution.
//!
//! The `Bootstrapper` walks the tool list in order. For each tool it runs
//! the presence check; if that fails it executes the install plan. The
//! first error stops the run, so later tools are never checked.

use crate::environment::Environment;
use crate::error::{DepstrapError, Result};
use crate::shell::{CommandResult, CommandRunner};
use crate::tools::{extract_version, ToolDescriptor};
use crate::ui::UserInterface;

use super::plan::{plan_install, InstallPlan};

/// Result of a presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// The check command exited 0.
    Installed { version: Option<String> },
    /// The check command failed or could not run.
    Missing,
}

/// What happened to one tool during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Already installed; nothing was run.
    Present { version: Option<String> },
    /// Missing and installed by running `command`.
    Installed { command: String },
    /// Missing and deliberately left alone.
    Skipped { reason: String },
    /// Missing; `command` would have run (dry run).
    Planned { command: String },
}

/// Outcome for a named tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    /// Tool key.
    pub key: String,
    /// Tool display name.
    pub name: String,
    /// What happened.
    pub outcome: ToolOutcome,
}

/// Ensures tools are present, installing them when needed.
pub struct Bootstrapper<'a> {
    runner: &'a dyn CommandRunner,
    env: &'a Environment,
    dry_run: bool,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper over a command runner and resolved environment.
    pub fn new(runner: &'a dyn CommandRunner, env: &'a Environment) -> Self {
        Self {
            runner,
            env,
            dry_run: false,
        }
    }

    /// Plan installs without running them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the tool's presence check.
    pub fn check_presence(&self, tool: &ToolDescriptor) -> Presence {
        match self.runner.run(&tool.check_command) {
            Ok(result) if result.success => {
                let version =
                    extract_version(&result.stdout).or_else(|| extract_version(&result.stderr));
                tracing::debug!("{} present (version {:?})", tool.name, version);
                Presence::Installed { version }
            }
            Ok(result) => {
                tracing::debug!(
                    "{} missing: '{}' exited with {:?}",
                    tool.name,
                    tool.check_command,
                    result.exit_code
                );
                Presence::Missing
            }
            Err(e) => {
                tracing::debug!("{} missing: {}", tool.name, e);
                Presence::Missing
            }
        }
    }

    /// Make sure one tool is installed.
    pub fn ensure_tool(
        &self,
        tool: &ToolDescriptor,
        ui: &mut dyn UserInterface,
    ) -> Result<ToolReport> {
        let outcome = match self.check_presence(tool) {
            Presence::Installed { version } => {
                let label = match &version {
                    Some(v) => format!("{} {} is installed", tool.name, v),
                    None => format!("{} is installed", tool.name),
                };
                ui.success(&label);
                ToolOutcome::Present { version }
            }
            Presence::Missing => self.install(tool, ui)?,
        };

        Ok(ToolReport {
            key: tool.key.clone(),
            name: tool.name.clone(),
            outcome,
        })
    }

    /// Ensure every tool in order, stopping at the first error.
    pub fn bootstrap(
        &self,
        tools: &[ToolDescriptor],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<ToolReport>> {
        tools.iter().map(|tool| self.ensure_tool(tool, ui)).collect()
    }

    fn install(&self, tool: &ToolDescriptor, ui: &mut dyn UserInterface) -> Result<ToolOutcome> {
        match plan_install(tool, self.env) {
            InstallPlan::Skip { reason } => {
                tracing::debug!("{}", reason);
                ui.warning(&reason);
                Ok(ToolOutcome::Skipped { reason })
            }
            InstallPlan::Manual { url } => Err(DepstrapError::ManualInstallRequired {
                tool: tool.name.clone(),
                url,
            }),
            InstallPlan::Run { command } if self.dry_run => {
                ui.message(&format!("{} is missing; would run: {}", tool.name, command));
                Ok(ToolOutcome::Planned { command })
            }
            InstallPlan::Run { command } => self.run_install(tool, command, ui),
        }
    }

    fn run_install(
        &self,
        tool: &ToolDescriptor,
        command: String,
        ui: &mut dyn UserInterface,
    ) -> Result<ToolOutcome> {
        tracing::debug!("Installing {}: {}", tool.name, command);
        ui.command(&command);
        let mut spinner = ui.start_spinner(&format!("Installing {}...", tool.name));

        let result = self
            .runner
            .run(&command)
            .map_err(|e| install_error(tool, e.to_string()))
            .and_then(|result| check_install_result(tool, &result));

        match result {
            Ok(()) => {
                spinner.finish_success(&format!("Installed {}", tool.name));
                Ok(ToolOutcome::Installed { command })
            }
            Err(e) => {
                spinner.finish_error(&format!("{} installation failed", tool.name));
                Err(e)
            }
        }
    }
}

/// Any stderr output counts as failure, even with exit code 0.
fn check_install_result(tool: &ToolDescriptor, result: &CommandResult) -> Result<()> {
    if result.has_stderr() {
        return Err(install_error(tool, result.stderr.trim().to_string()));
    }
    if !result.success {
        let message = match result.exit_code {
            Some(code) => format!("command exited with code {}", code),
            None => "command was terminated by a signal".to_string(),
        };
        return Err(install_error(tool, message));
    }
    Ok(())
}

fn install_error(tool: &ToolDescriptor, message: String) -> DepstrapError {
    DepstrapError::InstallFailed {
        tool: tool.name.clone(),
        message,
    }
}

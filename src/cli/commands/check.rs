//! The `depstrap check` command.
//!
//! Runs presence checks and reports what an install would do, without
//! installing anything. Exits 1 when any selected tool is missing.

use crate::bootstrap::{plan_install, Bootstrapper, InstallPlan, Presence};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    ctx: RunContext,
    args: CheckArgs,
    runner: &'a dyn CommandRunner,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(ctx: RunContext, args: CheckArgs, runner: &'a dyn CommandRunner) -> Self {
        Self { ctx, args, runner }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools = self.ctx.select_tools(&self.args.filter)?;
        let env = self.ctx.resolve_environment(self.runner);
        let bootstrapper = Bootstrapper::new(self.runner, &env);

        let mut missing = 0;
        for tool in &tools {
            match bootstrapper.check_presence(tool) {
                Presence::Installed { version: Some(v) } => {
                    ui.success(&format!("{} {}", tool.name, v));
                }
                Presence::Installed { version: None } => {
                    ui.success(&tool.name);
                }
                Presence::Missing => {
                    missing += 1;
                    let hint = match plan_install(tool, &env) {
                        InstallPlan::Run { command } => format!("install with: {}", command),
                        InstallPlan::Skip { reason } => reason,
                        InstallPlan::Manual { url } => format!("download from {}", url),
                    };
                    ui.warning(&format!("{} is missing ({})", tool.name, hint));
                }
            }
        }

        if missing == 0 {
            Ok(CommandResult::success())
        } else {
            ui.message(&format!(
                "{} of {} tools missing. Run 'depstrap install' to install them.",
                missing,
                tools.len()
            ));
            Ok(CommandResult::failure(1))
        }
    }
}

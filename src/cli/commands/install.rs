//! The `depstrap install` command.

use crate::bootstrap::{Bootstrapper, ToolOutcome, ToolReport};
use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    ctx: RunContext,
    args: InstallArgs,
    runner: &'a dyn CommandRunner,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(ctx: RunContext, args: InstallArgs, runner: &'a dyn CommandRunner) -> Self {
        Self { ctx, args, runner }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools = self.ctx.select_tools(&self.args.filter)?;
        if tools.is_empty() {
            ui.message("No tools selected.");
            return Ok(CommandResult::success());
        }

        let env = self.ctx.resolve_environment(self.runner);
        let mode = if self.args.dry_run { " (dry-run mode)" } else { "" };
        ui.show_header(&format!("Checking document tools on {}{}", env.platform, mode));

        let reports = Bootstrapper::new(self.runner, &env)
            .dry_run(self.args.dry_run)
            .bootstrap(&tools, ui)?;

        ui.message(&summarize(&reports));
        Ok(CommandResult::success())
    }
}

/// One-line summary of a completed run.
fn summarize(reports: &[ToolReport]) -> String {
    let count = |f: fn(&ToolOutcome) -> bool| reports.iter().filter(|r| f(&r.outcome)).count();

    let present = count(|o| matches!(o, ToolOutcome::Present { .. }));
    let installed = count(|o| matches!(o, ToolOutcome::Installed { .. }));
    let skipped = count(|o| matches!(o, ToolOutcome::Skipped { .. }));
    let planned = count(|o| matches!(o, ToolOutcome::Planned { .. }));

    if present == reports.len() {
        return "All tools are already installed.".to_string();
    }

    let mut parts = Vec::new();
    if present > 0 {
        parts.push(format!("{} already installed", present));
    }
    if installed > 0 {
        parts.push(format!("{} installed", installed));
    }
    if planned > 0 {
        parts.push(format!("{} would be installed", planned));
    }
    if skipped > 0 {
        parts.push(format!("{} skipped", skipped));
    }
    format!("Done: {}.", parts.join(", "))
}

//! Install planning.
//!
//! Deciding what to do about a missing tool has no side effects: it
//! depends only on the descriptor and the resolved [`Environment`].

use crate::environment::{Environment, Platform};
use crate::tools::ToolDescriptor;

/// What to do about a tool whose presence check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// Run this shell command.
    Run { command: String },
    /// Do nothing; explain why.
    Skip { reason: String },
    /// No automated path; the user must download the tool.
    Manual { url: String },
}

/// Plan the installation of a missing tool.
///
/// - macOS: Homebrew, unconditionally.
/// - Linux: skipped on a restricted host, otherwise yum (with `sudo`
///   when elevation is available).
/// - Anything else: manual download.
pub fn plan_install(tool: &ToolDescriptor, env: &Environment) -> InstallPlan {
    match &env.platform {
        Platform::MacOS => InstallPlan::Run {
            command: tool.brew_install_command(),
        },
        Platform::Linux => match &env.restricted_host {
            Some(host) => InstallPlan::Skip {
                reason: format!(
                    "{} detected: Skipping {} installation.",
                    host.name, tool.name
                ),
            },
            None => InstallPlan::Run {
                command: tool.yum_install_command(env.elevation_available),
            },
        },
        Platform::Other(_) => InstallPlan::Manual {
            url: tool.manual_url.clone(),
        },
    }
}

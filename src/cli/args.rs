//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// depstrap - Install Ghostscript, GraphicsMagick, and LibreOffice when missing.
#[derive(Debug, Parser)]
#[command(name = "depstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./.depstrap.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Platform to plan for: macos, linux, or any other name (defaults to the host)
    #[arg(long, global = true, env = "DEPSTRAP_PLATFORM")]
    pub platform: Option<String>,

    /// Show the commands being run
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether this invocation installs tools (explicitly or by default).
    pub fn is_install(&self) -> bool {
        matches!(self.command, None | Some(Commands::Install(_)))
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check for missing tools and install them (default if no command specified)
    Install(InstallArgs),

    /// Report which tools are installed without installing anything
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Tool selection shared by `install` and `check`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ToolFilter {
    /// Only these tools (comma-separated keys)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these tools (comma-separated keys)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub filter: ToolFilter,

    /// Run presence checks and print install commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub filter: ToolFilter,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_is_install() {
        let cli = Cli::parse_from(["depstrap"]);
        assert!(cli.command.is_none());
        assert!(cli.is_install());
    }

    #[test]
    fn install_parses_filters() {
        let cli = Cli::parse_from([
            "depstrap",
            "install",
            "--only",
            "ghostscript,libreoffice",
            "--dry-run",
        ]);
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.filter.only, vec!["ghostscript", "libreoffice"]);
                assert!(args.dry_run);
            }
            other => panic!("expected install, got {other:?}"),
        }
    }

    #[test]
    fn check_is_not_install() {
        let cli = Cli::parse_from(["depstrap", "check", "--skip", "libreoffice"]);
        assert!(!cli.is_install());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["depstrap", "check", "--platform", "macos", "--quiet"]);
        assert_eq!(cli.platform.as_deref(), Some("macos"));
        assert!(cli.quiet);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["depstrap", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }
}

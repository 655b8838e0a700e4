//! Command-line interface for depstrap.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InstallArgs, ToolFilter};
pub use commands::{Command, CommandDispatcher, CommandResult};

//! Shell command execution.
//!
//! Every external process depstrap starts goes through a
//! [`CommandRunner`]. Production code uses [`ShellRunner`]; tests inject a
//! [`RecordingRunner`].

pub mod command;
pub mod mock;

pub use command::{execute, CommandResult, CommandRunner, ShellRunner};
pub use mock::RecordingRunner;

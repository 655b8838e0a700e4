//! Progress spinners.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use super::theme::Theme;
use super::SpinnerHandle;

/// An animated spinner for long-running installs on a terminal.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: Theme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: Theme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    fn finish(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish(line);
    }
}

/// Spinner replacement for pipes and CI logs.
///
/// Prints nothing while running and one line when finished. In quiet
/// mode only errors are printed.
pub struct LineSpinner {
    term: Term,
    theme: Theme,
    quiet: bool,
}

impl LineSpinner {
    /// Create a line spinner writing to stdout.
    pub fn new(theme: Theme, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            quiet,
        }
    }
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if !self.quiet {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn finish_error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }
}

//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion, including how each spinner finished.
//!
//! # Example
//!
//! ```
//! use depstrap::ui::{MockUI, SpinnerStatus, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking tools");
//! let mut spinner = ui.start_spinner("Installing Ghostscript");
//! spinner.finish_success("Installed Ghostscript");
//!
//! assert!(ui.messages().contains(&"Checking tools".to_string()));
//! assert_eq!(
//!     ui.finished_spinners(),
//!     vec![(SpinnerStatus::Success, "Installed Ghostscript".to_string())]
//! );
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// How a mock spinner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

type FinishLog = Rc<RefCell<Vec<(SpinnerStatus, String)>>>;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    finished: FinishLog,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Messages shown.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages shown.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warnings shown.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Errors shown.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Commands echoed.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Headers shown.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages spinners were started with.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each spinner finished, in order.
    pub fn finished_spinners(&self) -> Vec<(SpinnerStatus, String)> {
        self.finished.borrow().clone()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn command(&mut self, cmd: &str) {
        self.commands.push(cmd.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            finished: Rc::clone(&self.finished),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

/// Spinner handed out by [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    finished: FinishLog,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finished
            .borrow_mut()
            .push((SpinnerStatus::Success, msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finished
            .borrow_mut()
            .push((SpinnerStatus::Error, msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.command("c");
        ui.show_header("h");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.commands(), ["c"]);
        assert_eq!(ui.headers(), ["h"]);
    }

    #[test]
    fn records_spinner_outcomes() {
        let mut ui = MockUI::new();
        ui.start_spinner("a").finish_error("failed a");
        ui.start_spinner("b").finish_success("installed b");

        assert_eq!(ui.spinners(), ["a", "b"]);
        assert_eq!(
            ui.finished_spinners(),
            vec![
                (SpinnerStatus::Error, "failed a".to_string()),
                (SpinnerStatus::Success, "installed b".to_string()),
            ]
        );
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}

//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including the commands being run.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show only warnings and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows the commands being run.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_hides_status_and_spinners() {
        assert!(!OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Quiet.shows_spinners());
        assert!(OutputMode::Normal.shows_status());
    }

    #[test]
    fn only_verbose_shows_commands() {
        assert!(OutputMode::Verbose.shows_commands());
        assert!(!OutputMode::Normal.shows_commands());
    }
}

//! Privilege elevation probe.

use crate::shell::CommandRunner;

/// Command that succeeds only when `sudo` can run without a password prompt.
pub const ELEVATION_PROBE: &str = "sudo -n true";

/// Check whether `sudo` is usable non-interactively.
///
/// Returns `false` on any failure, including `sudo` not being installed
/// or the shell failing to start. Never returns an error.
pub fn detect_elevation(runner: &dyn CommandRunner) -> bool {
    match runner.run(ELEVATION_PROBE) {
        Ok(result) if result.success => true,
        Ok(result) => {
            tracing::debug!(
                "Elevation unavailable: '{}' exited with {:?}",
                ELEVATION_PROBE,
                result.exit_code
            );
            false
        }
        Err(e) => {
            tracing::warn!("Could not probe for sudo: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingRunner;

    #[test]
    fn available_when_probe_succeeds() {
        let runner = RecordingRunner::new();
        assert!(detect_elevation(&runner));
        assert_eq!(runner.commands(), vec![ELEVATION_PROBE]);
    }

    #[test]
    fn unavailable_when_probe_exits_non_zero() {
        let runner = RecordingRunner::new();
        runner.fail_with(ELEVATION_PROBE, 1, "sudo: a password is required");
        assert!(!detect_elevation(&runner));
    }

    #[test]
    fn unavailable_when_sudo_missing() {
        let runner = RecordingRunner::new();
        runner.fail_with(ELEVATION_PROBE, 127, "sh: sudo: not found");
        assert!(!detect_elevation(&runner));
    }

    #[test]
    fn unavailable_when_runner_errors() {
        let runner = RecordingRunner::new();
        runner.spawn_error(ELEVATION_PROBE);
        assert!(!detect_elevation(&runner));
    }
}

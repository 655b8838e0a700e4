//! Environment resolution.
//!
//! Reads every host signal once and freezes it into an [`Environment`],
//! which the planner consumes without touching the process environment.

use crate::shell::CommandRunner;

use super::detection::{RestrictedHost, RestrictedHostDetector};
use super::elevation::detect_elevation;
use super::platform::Platform;

/// Host facts that decide how a missing tool gets installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Platform family.
    pub platform: Platform,
    /// The restricted hosting platform detected, if any.
    pub restricted_host: Option<RestrictedHost>,
    /// Whether `sudo -n` works.
    pub elevation_available: bool,
}

impl Environment {
    /// Build an environment from already-known facts.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            restricted_host: None,
            elevation_available: false,
        }
    }

    /// Set the detected restricted host.
    pub fn with_restricted_host(mut self, host: Option<RestrictedHost>) -> Self {
        self.restricted_host = host;
        self
    }

    /// Set elevation availability.
    pub fn with_elevation(mut self, available: bool) -> Self {
        self.elevation_available = available;
        self
    }

    /// Resolve the environment for this process.
    ///
    /// The elevation probe only runs on unrestricted Linux, the one case
    /// where its answer changes the install command.
    pub fn resolve(
        platform: Platform,
        detector: &RestrictedHostDetector,
        runner: &dyn CommandRunner,
    ) -> Self {
        Self::resolve_with_env(platform, detector, runner, |key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(
        platform: Platform,
        detector: &RestrictedHostDetector,
        runner: &dyn CommandRunner,
        env_fn: F,
    ) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let restricted_host = detector.detect_with_env(env_fn);
        let elevation_available = platform == Platform::Linux
            && restricted_host.is_none()
            && detect_elevation(runner);

        let env = Self {
            platform,
            restricted_host,
            elevation_available,
        };
        tracing::debug!("Resolved environment: {:?}", env);
        env
    }

    /// Whether a restricted hosting platform was detected.
    pub fn is_restricted(&self) -> bool {
        self.restricted_host.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ELEVATION_PROBE;
    use crate::shell::RecordingRunner;

    fn no_env(_: &str) -> Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    fn vercel_env(key: &str) -> Result<String, std::env::VarError> {
        if key == "VERCEL" {
            Ok("1".to_string())
        } else {
            Err(std::env::VarError::NotPresent)
        }
    }

    #[test]
    fn linux_probes_elevation() {
        let runner = RecordingRunner::new();
        let env = Environment::resolve_with_env(
            Platform::Linux,
            &RestrictedHostDetector::new(),
            &runner,
            no_env,
        );

        assert!(env.elevation_available);
        assert!(!env.is_restricted());
        assert!(runner.ran(ELEVATION_PROBE));
    }

    #[test]
    fn linux_without_sudo() {
        let runner = RecordingRunner::new();
        runner.fail(ELEVATION_PROBE);
        let env = Environment::resolve_with_env(
            Platform::Linux,
            &RestrictedHostDetector::new(),
            &runner,
            no_env,
        );

        assert!(!env.elevation_available);
    }

    #[test]
    fn restricted_linux_skips_probe() {
        let runner = RecordingRunner::new();
        let env = Environment::resolve_with_env(
            Platform::Linux,
            &RestrictedHostDetector::new(),
            &runner,
            vercel_env,
        );

        assert_eq!(env.restricted_host, Some(RestrictedHost::vercel()));
        assert!(!env.elevation_available);
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn macos_skips_probe() {
        let runner = RecordingRunner::new();
        let env = Environment::resolve_with_env(
            Platform::MacOS,
            &RestrictedHostDetector::new(),
            &runner,
            no_env,
        );

        assert_eq!(env.platform, Platform::MacOS);
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let env = Environment::new(Platform::Linux)
            .with_elevation(true)
            .with_restricted_host(Some(RestrictedHost::vercel()));

        assert!(env.elevation_available);
        assert!(env.is_restricted());
    }
}

//! Restricted hosting detection.
//!
//! Some managed platforms (Vercel being the built-in case) do not allow
//! arbitrary package installation. They are recognized by a marker
//! environment variable; when one is set, Linux installs are skipped.

use serde::Deserialize;

/// A hosting platform recognized by a marker environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestrictedHost {
    /// Display name used in skip messages (e.g. "Vercel").
    pub name: String,
    /// The environment variable whose presence marks this host.
    pub env: String,
}

impl RestrictedHost {
    /// Create a new host rule.
    pub fn new(name: &str, env: &str) -> Self {
        Self {
            name: name.to_string(),
            env: env.to_string(),
        }
    }

    /// The built-in Vercel rule.
    pub fn vercel() -> Self {
        Self::new("Vercel", "VERCEL")
    }

    fn matches<F>(&self, env_fn: &F) -> bool
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        // An empty value counts as unset.
        env_fn(&self.env).is_ok_and(|value| !value.is_empty())
    }
}

/// Detects whether depstrap runs on a restricted hosting platform.
///
/// # Example
///
/// ```
/// use depstrap::environment::{RestrictedHost, RestrictedHostDetector};
///
/// let detector = RestrictedHostDetector::new()
///     .with_hosts(vec![RestrictedHost::new("Netlify", "NETLIFY")]);
/// let detected = detector.detect_with_env(|key| match key {
///     "NETLIFY" => Ok("true".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
/// assert_eq!(detected.unwrap().name, "Netlify");
/// ```
#[derive(Debug, Clone)]
pub struct RestrictedHostDetector {
    hosts: Vec<RestrictedHost>,
}

impl RestrictedHostDetector {
    /// Create a detector with only the built-in Vercel rule.
    pub fn new() -> Self {
        Self {
            hosts: vec![RestrictedHost::vercel()],
        }
    }

    /// Append additional host rules, checked after the built-ins.
    pub fn with_hosts(mut self, hosts: Vec<RestrictedHost>) -> Self {
        for host in hosts {
            if !self.hosts.contains(&host) {
                self.hosts.push(host);
            }
        }
        self
    }

    /// The rules this detector checks, in order.
    pub fn hosts(&self) -> &[RestrictedHost] {
        &self.hosts
    }

    /// Detect using the process environment.
    pub fn detect(&self) -> Option<RestrictedHost> {
        self.detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    pub fn detect_with_env<F>(&self, env_fn: F) -> Option<RestrictedHost>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        self.hosts.iter().find(|host| host.matches(&env_fn)).cloned()
    }
}

impl Default for RestrictedHostDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the built-in restricted host (Vercel) is detected.
pub fn is_restricted_hosting<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    RestrictedHostDetector::new()
        .detect_with_env(env_fn)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn nothing_detected_in_clean_env() {
        assert!(!is_restricted_hosting(make_env(&[])));
        assert!(RestrictedHostDetector::new()
            .detect_with_env(make_env(&[]))
            .is_none());
    }

    #[test]
    fn vercel_detected_when_set() {
        assert!(is_restricted_hosting(make_env(&[("VERCEL", "1")])));

        let host = RestrictedHostDetector::new()
            .detect_with_env(make_env(&[("VERCEL", "1")]))
            .unwrap();
        assert_eq!(host.name, "Vercel");
    }

    #[test]
    fn empty_value_is_not_detected() {
        assert!(!is_restricted_hosting(make_env(&[("VERCEL", "")])));
    }

    #[test]
    fn custom_hosts_are_checked_after_builtin() {
        let detector = RestrictedHostDetector::new()
            .with_hosts(vec![RestrictedHost::new("Netlify", "NETLIFY")]);

        let both = detector
            .detect_with_env(make_env(&[("VERCEL", "1"), ("NETLIFY", "true")]))
            .unwrap();
        assert_eq!(both.name, "Vercel");

        let netlify = detector
            .detect_with_env(make_env(&[("NETLIFY", "true")]))
            .unwrap();
        assert_eq!(netlify.name, "Netlify");
    }

    #[test]
    fn duplicate_hosts_are_ignored() {
        let detector = RestrictedHostDetector::new().with_hosts(vec![RestrictedHost::vercel()]);
        assert_eq!(detector.hosts().len(), 1);
    }

    #[test]
    fn custom_host_does_not_affect_builtin_check() {
        assert!(!is_restricted_hosting(make_env(&[("NETLIFY", "true")])));
    }
}

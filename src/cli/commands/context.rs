//! Shared setup for commands that inspect tools.
//!
//! Merges built-in defaults, the config file, and CLI flags into the
//! registry and platform a command works with.

use std::path::Path;

use crate::cli::args::ToolFilter;
use crate::config::{load_config, validate, DepstrapConfig};
use crate::environment::{Environment, Platform, RestrictedHostDetector};
use crate::error::{DepstrapError, Result};
use crate::shell::CommandRunner;
use crate::tools::{ToolDescriptor, ToolRegistry};

/// Effective settings for one invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Tools with config overrides applied.
    pub registry: ToolRegistry,
    /// Platform to plan for.
    pub platform: Platform,
    /// Restricted host rules (built-in plus config).
    pub detector: RestrictedHostDetector,
    /// Tool keys the config always skips.
    pub config_skip: Vec<String>,
}

impl RunContext {
    /// Load config from disk and merge it with the platform flag.
    pub fn load(config_path: Option<&Path>, platform_flag: Option<&str>, cwd: &Path) -> Result<Self> {
        let config = load_config(config_path, cwd)?;
        Self::from_config(config, platform_flag)
    }

    /// Build from an already-parsed config.
    ///
    /// Platform priority: flag (or `DEPSTRAP_PLATFORM`), then config, then
    /// the host.
    pub fn from_config(config: DepstrapConfig, platform_flag: Option<&str>) -> Result<Self> {
        let mut registry = ToolRegistry::new();
        validate(&config, &registry)?;
        registry.apply_overrides(&config.tools)?;

        let platform = match platform_flag.or(config.platform.as_deref()) {
            Some(name) => name
                .parse::<Platform>()
                .map_err(|message| DepstrapError::ConfigValidationError { message })?,
            None => Platform::current(),
        };

        Ok(Self {
            registry,
            platform,
            detector: RestrictedHostDetector::new().with_hosts(config.restricted_hosts),
            config_skip: config.skip,
        })
    }

    /// Tools selected by the CLI filter and config skips, in install order.
    pub fn select_tools(&self, filter: &ToolFilter) -> Result<Vec<ToolDescriptor>> {
        let mut skip = filter.skip.clone();
        skip.extend(self.config_skip.iter().cloned());
        self.registry.select(&filter.only, &skip)
    }

    /// Resolve host facts once.
    pub fn resolve_environment(&self, runner: &dyn CommandRunner) -> Environment {
        Environment::resolve(self.platform.clone(), &self.detector, runner)
    }
}

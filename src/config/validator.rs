//! Configuration validation.

use crate::config::schema::DepstrapConfig;
use crate::error::{DepstrapError, Result};
use crate::tools::ToolRegistry;

/// Validate a config against the tool registry.
///
/// Collects every problem into one `ConfigValidationError`.
pub fn validate(config: &DepstrapConfig, registry: &ToolRegistry) -> Result<()> {
    let mut errors = Vec::new();

    if let Some(platform) = &config.platform {
        if platform.trim().is_empty() {
            errors.push("platform cannot be empty".to_string());
        }
    }

    for key in &config.skip {
        if registry.get(key).is_none() {
            errors.push(format!("skip: unknown tool '{}'", key));
        }
    }

    for (key, o) in &config.tools {
        if registry.get(key).is_none() {
            errors.push(format!("tools: unknown tool '{}'", key));
        }
        if o.check.as_deref().is_some_and(|c| c.trim().is_empty()) {
            errors.push(format!("tools.{}.check cannot be empty", key));
        }
    }

    for (i, host) in config.restricted_hosts.iter().enumerate() {
        if host.name.trim().is_empty() {
            errors.push(format!("restricted_hosts[{}].name cannot be empty", i));
        }
        if host.env.trim().is_empty() {
            errors.push(format!("restricted_hosts[{}].env cannot be empty", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DepstrapError::ConfigValidationError {
            message: errors.join("; "),
        })
    }
}

//! Configuration schema.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::environment::RestrictedHost;

/// Root of a `.depstrap.yml` file.
///
/// Every field is optional; an empty file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepstrapConfig {
    /// Platform override (`macos`, `linux`, or any other name).
    pub platform: Option<String>,

    /// Extra restricted hosting platforms, checked after Vercel.
    pub restricted_hosts: Vec<RestrictedHost>,

    /// Tool keys that are never checked or installed.
    pub skip: Vec<String>,

    /// Per-tool overrides, keyed by tool key.
    pub tools: BTreeMap<String, ToolOverride>,
}

/// Replacement fields for a built-in tool descriptor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolOverride {
    /// Presence-check command.
    pub check: Option<String>,
    /// Homebrew package name.
    pub brew: Option<String>,
    /// Whether the Homebrew package is a cask.
    pub brew_cask: Option<bool>,
    /// yum package name.
    pub yum: Option<String>,
    /// Manual download URL.
    pub manual_url: Option<String>,
}

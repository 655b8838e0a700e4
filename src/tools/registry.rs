//! Tool registry.
//!
//! Holds the three built-in tools in their fixed install order. Config
//! overrides can replace fields of a built-in descriptor but cannot add
//! or reorder tools.

use std::collections::BTreeMap;

use crate::config::ToolOverride;
use crate::error::{DepstrapError, Result};

use super::descriptor::{BrewPackage, ToolDescriptor};

/// Ordered collection of tool descriptors.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Create a registry with the built-in tools.
    ///
    /// Order matters: PostScript interpreter, image toolkit, office suite.
    pub fn new() -> Self {
        let tools = vec![
            ToolDescriptor {
                key: "ghostscript".to_string(),
                name: "Ghostscript".to_string(),
                check_command: "gs --version".to_string(),
                brew: BrewPackage::Formula("ghostscript".to_string()),
                yum_package: "ghostscript".to_string(),
                manual_url: "https://www.ghostscript.com/download.html".to_string(),
            },
            ToolDescriptor {
                key: "graphicsmagick".to_string(),
                name: "GraphicsMagick".to_string(),
                check_command: "gm -version".to_string(),
                brew: BrewPackage::Formula("graphicsmagick".to_string()),
                yum_package: "graphicsmagick".to_string(),
                manual_url: "http://www.graphicsmagick.org/download.html".to_string(),
            },
            ToolDescriptor {
                key: "libreoffice".to_string(),
                name: "LibreOffice".to_string(),
                check_command: "soffice --version".to_string(),
                brew: BrewPackage::Cask("libreoffice".to_string()),
                yum_package: "libreoffice".to_string(),
                manual_url: "https://www.libreoffice.org/download/download/".to_string(),
            },
        ];

        Self { tools }
    }

    /// All tools in install order.
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Look up a tool by key.
    pub fn get(&self, key: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.key == key)
    }

    /// Apply config overrides to built-in descriptors.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, ToolOverride>) -> Result<()> {
        for (key, o) in overrides {
            let tool = self
                .tools
                .iter_mut()
                .find(|t| &t.key == key)
                .ok_or_else(|| DepstrapError::UnknownTool { name: key.clone() })?;

            if let Some(check) = &o.check {
                tool.check_command = check.clone();
            }
            let brew_name = o
                .brew
                .clone()
                .unwrap_or_else(|| tool.brew.name().to_string());
            let cask = o.brew_cask.unwrap_or_else(|| tool.brew.is_cask());
            tool.brew = if cask {
                BrewPackage::Cask(brew_name)
            } else {
                BrewPackage::Formula(brew_name)
            };
            if let Some(yum) = &o.yum {
                tool.yum_package = yum.clone();
            }
            if let Some(url) = &o.manual_url {
                tool.manual_url = url.clone();
            }
            tracing::debug!("Applied config override for '{}'", key);
        }
        Ok(())
    }

    /// Select tools by key filters, keeping install order.
    ///
    /// An empty `only` selects everything. Keys in `skip` are removed.
    /// Unknown keys in either list are an error.
    pub fn select(&self, only: &[String], skip: &[String]) -> Result<Vec<ToolDescriptor>> {
        for key in only.iter().chain(skip) {
            if self.get(key).is_none() {
                return Err(DepstrapError::UnknownTool { name: key.clone() });
            }
        }

        Ok(self
            .tools
            .iter()
            .filter(|t| only.is_empty() || only.contains(&t.key))
            .filter(|t| !skip.contains(&t.key))
            .cloned()
            .collect())
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

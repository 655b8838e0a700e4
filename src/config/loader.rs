//! Configuration file discovery and loading.

use crate::config::schema::DepstrapConfig;
use crate::error::{DepstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".depstrap.yml";

/// Find `.depstrap.yml` in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load the effective config.
///
/// An explicit path must exist. Without one, `.depstrap.yml` in `dir` is
/// used when present, else the defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<DepstrapConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover_config(dir) {
            Some(path) => path,
            None => {
                tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                return Ok(DepstrapConfig::default());
            }
        },
    };

    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DepstrapConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DepstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DepstrapError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<DepstrapConfig> {
    if content.trim().is_empty() {
        return Ok(DepstrapConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DepstrapError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, DepstrapConfig::default());
    }

    #[test]
    fn discovers_file_in_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "platform: macos\n").unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config.platform.as_deref(), Some("macos"));
    }

    #[test]
    fn explicit_path_wins_over_discovery() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "platform: macos\n").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "platform: linux\n").unwrap();

        let config = load_config(Some(&other), temp.path()).unwrap();
        assert_eq!(config.platform.as_deref(), Some("linux"));
    }

    #[test]
    fn missing_explicit_path_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = load_config(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, DepstrapError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("skip: [unclosed", Path::new("bad.yml")).unwrap_err();
        match err {
            DepstrapError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("bad.yml"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("\n  \n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, DepstrapConfig::default());
    }
}

//! Error types for depstrap operations.
//!
//! This module defines [`DepstrapError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failed presence check is not an error; it selects the install path
//! - Install failures and unsupported platforms propagate as `DepstrapError`
//! - `main` turns any propagated error into exit status 1

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depstrap operations.
#[derive(Debug, Error)]
pub enum DepstrapError {
    /// An install command exited non-zero or wrote to stderr.
    #[error("Failed to install {tool}: {message}")]
    InstallFailed { tool: String, message: String },

    /// The tool is missing and this platform has no automated install path.
    #[error("Please install {tool} manually from {url}")]
    ManualInstallRequired { tool: String, url: String },

    /// A shell command could not be run at all.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A tool key that is not in the registry.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for depstrap operations.
pub type Result<T> = std::result::Result<T, DepstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_failed_names_tool_and_message() {
        let err = DepstrapError::InstallFailed {
            tool: "Ghostscript".into(),
            message: "No package ghostscript available.".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to install Ghostscript: No package ghostscript available."
        );
    }

    #[test]
    fn manual_install_required_carries_url() {
        let err = DepstrapError::ManualInstallRequired {
            tool: "LibreOffice".into(),
            url: "https://www.libreoffice.org/download/download/".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please install LibreOffice manually from https://www.libreoffice.org/download/download/"
        );
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = DepstrapError::CommandFailed {
            command: "gs --version".into(),
            code: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("gs --version"));
        assert!(msg.contains("None"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DepstrapError::ConfigParseError {
            path: PathBuf::from("/project/.depstrap.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/project/.depstrap.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_tool_displays_name() {
        let err = DepstrapError::UnknownTool {
            name: "imagemagick".into(),
        };
        assert!(err.to_string().contains("imagemagick"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DepstrapError = io_err.into();
        assert!(matches!(err, DepstrapError::Io(_)));
    }
}

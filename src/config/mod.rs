//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation against the tool registry in [`validator`]
//!
//! # Example
//!
//! ```
//! use depstrap::config::{load_config, CONFIG_FILE_NAME};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(CONFIG_FILE_NAME), "skip: [libreoffice]").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert_eq!(config.skip, vec!["libreoffice".to_string()]);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. `--config <path>` (must exist)
//! 2. `.depstrap.yml` in the working directory (optional)

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{discover_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{DepstrapConfig, ToolOverride};
pub use validator::validate;

//! depstrap - Bootstrap the document-conversion toolchain.
//!
//! depstrap checks whether Ghostscript, GraphicsMagick, and LibreOffice
//! are installed and installs the missing ones with Homebrew (macOS) or
//! yum (Linux). Installs are skipped on restricted hosting platforms such
//! as Vercel, and `sudo` is used when it works without a password.
//!
//! # Modules
//!
//! - [`bootstrap`] - Install planning and execution
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.depstrap.yml` loading and validation
//! - [`environment`] - Platform, restricted hosting, and sudo detection
//! - [`error`] - Error types and result aliases
//! - [`shell`] - The command runner boundary
//! - [`tools`] - Tool descriptors and the built-in registry
//! - [`ui`] - Terminal output, spinners, and a mock UI for tests
//!
//! # Example
//!
//! ```
//! use depstrap::bootstrap::{plan_install, InstallPlan};
//! use depstrap::environment::{Environment, Platform};
//! use depstrap::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::new();
//! let env = Environment::new(Platform::MacOS);
//! let plan = plan_install(registry.get("libreoffice").unwrap(), &env);
//! assert_eq!(
//!     plan,
//!     InstallPlan::Run { command: "brew install --cask libreoffice".to_string() }
//! );
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod shell;
pub mod tools;
pub mod ui;

pub use error::{DepstrapError, Result};

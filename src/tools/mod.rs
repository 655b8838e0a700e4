//! External tool definitions.
//!
//! - [`descriptor`] - What a tool is and how it is checked and installed
//! - [`registry`] - The built-in tools, in install order, plus overrides
//! - [`version`] - Version extraction from presence-check output

pub mod descriptor;
pub mod registry;
pub mod version;

pub use descriptor::{BrewPackage, ToolDescriptor};
pub use registry::ToolRegistry;
pub use version::extract_version;

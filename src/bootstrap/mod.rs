//! Dependency bootstrapping.
//!
//! - [`plan`] - Pure mapping from (tool, environment) to an install plan
//! - [`bootstrapper`] - Runs presence checks and executes plans
//!
//! # Example
//!
//! ```
//! use depstrap::bootstrap::Bootstrapper;
//! use depstrap::environment::{Environment, Platform};
//! use depstrap::shell::RecordingRunner;
//! use depstrap::tools::ToolRegistry;
//! use depstrap::ui::MockUI;
//!
//! let runner = RecordingRunner::new();
//! runner.fail("soffice --version");
//! let env = Environment::new(Platform::Linux).with_elevation(true);
//! let mut ui = MockUI::new();
//!
//! let registry = ToolRegistry::new();
//! Bootstrapper::new(&runner, &env)
//!     .bootstrap(registry.tools(), &mut ui)
//!     .unwrap();
//!
//! assert!(runner.ran("sudo yum update -y && sudo yum install -y libreoffice"));
//! ```

pub mod bootstrapper;
pub mod plan;

pub use bootstrapper::{Bootstrapper, Presence, ToolOutcome, ToolReport};
pub use plan::{plan_install, InstallPlan};

//! Host environment detection and resolution.
//!
//! Everything depstrap needs to know about the host is read once at
//! startup into an [`Environment`]:
//!
//! 1. The [`Platform`] (from `--platform`, config, or the compile target)
//! 2. Whether a restricted hosting platform is detected (e.g. Vercel)
//! 3. Whether `sudo` can run without prompting

pub mod detection;
pub mod elevation;
pub mod platform;
pub mod resolver;

pub use detection::{is_restricted_hosting, RestrictedHost, RestrictedHostDetector};
pub use elevation::{detect_elevation, ELEVATION_PROBE};
pub use platform::Platform;
pub use resolver::Environment;

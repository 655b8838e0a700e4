//! Host platform identification.

use std::fmt;
use std::str::FromStr;

/// Platform family, which selects the package manager used for installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// macOS; installs go through Homebrew.
    MacOS,
    /// Linux; installs go through yum.
    Linux,
    /// Anything else; tools must be installed by hand.
    Other(String),
}

impl Platform {
    /// Detect the platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    pub fn from_os(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "macos" | "darwin" => Platform::MacOS,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Short lowercase name.
    pub fn name(&self) -> &str {
        match self {
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Other(name) => name,
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("platform name cannot be empty".to_string());
        }
        Ok(Self::from_os(trimmed))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

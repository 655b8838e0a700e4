//! Tool descriptors.

/// How a tool is packaged for Homebrew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrewPackage {
    /// A regular formula (`brew install <name>`).
    Formula(String),
    /// A cask (`brew install --cask <name>`).
    Cask(String),
}

impl BrewPackage {
    /// The package name without the install kind.
    pub fn name(&self) -> &str {
        match self {
            BrewPackage::Formula(name) | BrewPackage::Cask(name) => name,
        }
    }

    /// Whether this is a cask.
    pub fn is_cask(&self) -> bool {
        matches!(self, BrewPackage::Cask(_))
    }

    /// The full `brew install` command line.
    pub fn install_command(&self) -> String {
        match self {
            BrewPackage::Formula(name) => format!("brew install {}", name),
            BrewPackage::Cask(name) => format!("brew install --cask {}", name),
        }
    }
}

/// An external binary depstrap can check for and install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Stable key used in config and CLI filters (e.g. "ghostscript").
    pub key: String,
    /// Display name used in messages (e.g. "Ghostscript").
    pub name: String,
    /// Command whose exit status tells whether the tool is installed.
    pub check_command: String,
    /// Homebrew package for macOS.
    pub brew: BrewPackage,
    /// yum package name for Linux.
    pub yum_package: String,
    /// Where to download the tool when no package manager applies.
    pub manual_url: String,
}

impl ToolDescriptor {
    /// The yum update-then-install command pair.
    ///
    /// With `elevated`, both halves are prefixed with `sudo`.
    pub fn yum_install_command(&self, elevated: bool) -> String {
        let prefix = if elevated { "sudo " } else { "" };
        format!(
            "{prefix}yum update -y && {prefix}yum install -y {}",
            self.yum_package
        )
    }

    /// The Homebrew install command.
    pub fn brew_install_command(&self) -> String {
        self.brew.install_command()
    }
}

//! Process-wide configuration: the managed desktop directory and version.
//!
//! Built once at startup and passed by reference into every component, so no
//! other module reads the environment directly.

use std::path::PathBuf;

use thiserror::Error;

/// Crate version, injected at build time from package metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The OS could not report a home directory. Fatal at startup.
    #[error("Could not determine the user's home directory")]
    NoHomeDir,
}

/// Immutable per-process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The single directory this tool reads from and writes to.
    pub desktop_dir: PathBuf,
    /// Version string reported to MCP clients.
    pub version: &'static str,
}

impl Config {
    /// Resolve the managed directory from the OS home directory.
    ///
    /// The desktop folder is always `<home>/Desktop`; it is not required to
    /// exist (scanning a missing folder yields zero results).
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::with_desktop_dir(home.join("Desktop")))
    }

    /// Build a configuration targeting an explicit directory.
    pub fn with_desktop_dir(desktop_dir: PathBuf) -> Self {
        Self { desktop_dir, version: VERSION }
    }
}

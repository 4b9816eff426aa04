//! Path resolution for calplan configuration files.
//!
//! All calplan data is stored in `~/.calplan/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::CalplanError;

/// Paths to calplan configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.calplan/`
    pub root: PathBuf,
    /// Config file: `~/.calplan/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CalplanError> {
        let home = std::env::var("HOME")
            .map_err(|_| CalplanError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".calplan");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".calplan"))
        })
    }
}

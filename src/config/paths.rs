//! Path management for farm-ledger
//!
//! ## Path Resolution Order
//!
//! 1. `FARM_LEDGER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/farm-ledger` on Linux,
//!    `~/Library/Application Support/farm-ledger` on macOS,
//!    `%APPDATA%\farm-ledger` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FarmError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FARM_LEDGER_DATA_DIR";

/// Manages all paths used by farm-ledger
#[derive(Debug, Clone)]
pub struct FarmPaths {
    base_dir: PathBuf,
}

impl FarmPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, FarmError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FarmPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON document per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FarmError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FarmError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FarmError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FarmError> {
    ProjectDirs::from("", "", "farm-ledger")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FarmError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}

//! User settings for farm-ledger
//!
//! Display preferences, the size of the dashboard's top groups, and whether
//! mutations are written to the audit log.

use serde::{Deserialize, Serialize};

use super::paths::FarmPaths;
use crate::error::FarmError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for farm-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown next to costs
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many groups the dashboard's top lists show
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Append every mutation to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_top_n() -> usize {
    3
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            top_n: default_top_n(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FarmPaths) -> Result<Self, FarmError> {
        // Missing file yields defaults; don't save yet - let caller decide when to persist
        read_json(paths.settings_file()).map_err(|e| FarmError::Config(e.to_string()))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FarmPaths) -> Result<(), FarmError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Format a cost with the configured currency symbol
    ///
    /// Negative values put the sign before the symbol: `-$27.50`.
    pub fn format_cost(&self, cost: f64) -> String {
        if cost < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, cost.abs())
        } else {
            format!("{}{:.2}", self.currency_symbol, cost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.top_n, 3);
        assert!(settings.audit_enabled);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.top_n = 5;
        settings.audit_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.top_n, 5);
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.top_n, 3);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_format_cost() {
        let settings = Settings::default();
        assert_eq!(settings.format_cost(12.5), "$12.50");
        assert_eq!(settings.format_cost(-27.5), "-$27.50");
        assert_eq!(settings.format_cost(0.0), "$0.00");
    }
}

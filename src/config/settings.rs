//! User settings for Monity
//!
//! Manages user preferences: display locale, currency, the default reporting
//! period, and the login session timeout.

use serde::{Deserialize, Serialize};

use super::paths::MonityPaths;
use crate::error::MonityError;
use crate::models::{Locale, ReportPeriod};

/// User settings for Monity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display language for labels, dates, and seeded category names
    #[serde(default)]
    pub locale: Locale,

    /// Currency symbol, rendered after the amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Reporting period used when none is given on the command line
    #[serde(default)]
    pub default_period: ReportPeriod,

    /// Minutes a login session stays valid
    #[serde(default = "default_session_timeout")]
    pub session_timeout_minutes: u32,

    /// How many recent expenses the dashboard shows
    #[serde(default = "default_recent_count")]
    pub recent_expense_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "zł".to_string()
}

fn default_session_timeout() -> u32 {
    10
}

fn default_recent_count() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            currency_symbol: default_currency(),
            default_period: ReportPeriod::default(),
            session_timeout_minutes: default_session_timeout(),
            recent_expense_count: default_recent_count(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MonityPaths) -> Result<Self, MonityError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| MonityError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| MonityError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MonityPaths) -> Result<(), MonityError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MonityError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| MonityError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

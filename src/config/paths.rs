//! Path management for Monity
//!
//! Resolves where settings, data files, the session, and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `MONITY_DATA_DIR` environment variable (if set)
//! 2. The platform data directory via the `directories` crate
//!    (e.g. `~/.local/share/monity` on Linux, `%APPDATA%\monity` on Windows)

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::MonityError;

/// Manages all paths used by Monity
#[derive(Debug, Clone)]
pub struct MonityPaths {
    /// Base directory for all Monity data
    base_dir: PathBuf,
}

impl MonityPaths {
    /// Create a new MonityPaths instance
    ///
    /// Path resolution:
    /// 1. `MONITY_DATA_DIR` env var (explicit override)
    /// 2. Platform data directory for the "monity" application
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MonityError> {
        let base_dir = if let Ok(custom) = std::env::var("MONITY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MonityPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (base/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the session file
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MonityError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MonityError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MonityError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Monity has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory for this platform
fn resolve_default_path() -> Result<PathBuf, MonityError> {
    let dirs = ProjectDirs::from("", "", "monity")
        .ok_or_else(|| MonityError::Config("Could not determine a home directory".into()))?;
    Ok(dirs.data_dir().to_path_buf())
}

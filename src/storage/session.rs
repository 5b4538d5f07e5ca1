//! Session store for the current login
//!
//! At most one session exists at a time; it lives in session.json next to
//! the settings file rather than under data/. Logging out deletes the file.

use std::fs;
use std::path::PathBuf;

use crate::error::MonityError;
use crate::models::Session;

use super::file_io::write_json_atomic;

/// File-backed store for the active session
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a session store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored session, if any
    pub fn load(&self) -> Result<Option<Session>, MonityError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            MonityError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let session = serde_json::from_str(&content).map_err(|e| {
            MonityError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        Ok(Some(session))
    }

    /// Persist a session
    pub fn save(&self, session: &Session) -> Result<(), MonityError> {
        write_json_atomic(&self.path, session)
    }

    /// Remove the stored session. Succeeds when no session exists.
    pub fn clear(&self) -> Result<(), MonityError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                MonityError::Storage(format!("Failed to remove {}: {}", self.path.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SessionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        (temp_dir, SessionStore::new(path))
    }

    #[test]
    fn test_missing_file_is_no_session() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let (_temp_dir, store) = create_test_store();

        let session = Session::start(UserId::new(), "anna@example.com", 10);
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.user_id, session.user_id);
        assert_eq!(loaded.email, "anna@example.com");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_session_is_an_error() {
        let (temp_dir, store) = create_test_store();
        std::fs::write(temp_dir.path().join("session.json"), "not json").unwrap();

        let result = store.load();
        assert!(result.is_err());
    }
}

//! User repository for JSON storage
//!
//! Manages loading and saving user accounts to users.json. Emails are
//! normalized to lowercase on the model, so lookups compare lowercase
//! against lowercase.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MonityError;
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), MonityError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for user in file_data.users {
            data.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), MonityError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));

        let file_data = UserData { users };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> Result<Option<User>, MonityError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get a user by email (case-insensitive)
    pub fn get_by_email(&self, email: &str) -> Result<Option<User>, MonityError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let email_lower = email.trim().to_lowercase();
        Ok(data.values().find(|u| u.email == email_lower).cloned())
    }

    /// Check if an email is already registered
    pub fn email_exists(&self, email: &str) -> Result<bool, MonityError> {
        Ok(self.get_by_email(email)?.is_some())
    }

    /// Insert or update a user
    pub fn upsert(&self, user: User) -> Result<(), MonityError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(user.id, user);
        Ok(())
    }

    /// Count users
    pub fn count(&self) -> Result<usize, MonityError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

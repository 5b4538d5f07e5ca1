//! Storage layer for Monity
//!
//! Provides JSON file storage with atomic writes, automatic directory
//! creation, and audit logging of every mutation.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod session;
pub mod users;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use init::initialize_storage;
pub use session::SessionStore;
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::MonityPaths;
use crate::error::MonityError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: MonityPaths,
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub expenses: ExpenseRepository,
    pub session: SessionStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MonityPaths) -> Result<Self, MonityError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            session: SessionStore::new(paths.session_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MonityPaths {
        &self.paths
    }

    /// Get the audit logger for reading history
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), MonityError> {
        self.users.load()?;
        self.categories.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), MonityError> {
        self.users.save()?;
        self.categories.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), MonityError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an update operation in the audit log
    ///
    /// When no diff summary is supplied, one is generated from the
    /// serialized before/after values.
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), MonityError> {
        let diff_summary = diff_summary.or_else(|| {
            let before_json = serde_json::to_value(before).ok()?;
            let after_json = serde_json::to_value(after).ok()?;
            generate_diff(&before_json, &after_json)
        });

        let entry = AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        );
        self.audit.log(&entry)
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), MonityError> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, User};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonityPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonityPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage
            .users
            .upsert(User::new("anna@example.com", "Anna Kowalska", "hash"))
            .unwrap();
        storage
            .categories
            .upsert(Category::new("Pets", "#112233"))
            .unwrap();
        storage.save_all().unwrap();

        let paths2 = MonityPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage2 = Storage::new(paths2).unwrap();
        storage2.load_all().unwrap();

        assert_eq!(storage2.users.count().unwrap(), 1);
        assert_eq!(storage2.categories.count().unwrap(), 1);
    }

    #[test]
    fn test_log_update_generates_diff_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonityPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let before = Category::new("Old", "#111111");
        let mut after = before.clone();
        after.name = "New".to_string();

        storage
            .log_update(
                EntityType::Category,
                before.id.to_string(),
                Some(after.name.clone()),
                &before,
                &after,
                None,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        let summary = entries[0].diff_summary.as_deref().unwrap();
        assert!(summary.contains("name"));
    }
}

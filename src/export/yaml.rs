//! YAML export
//!
//! Same document as the JSON export, rendered for humans. A short comment
//! header identifies the file before the data starts.

use crate::error::{MonityError, MonityResult};
use crate::export::json::FullExport;
use crate::models::User;
use crate::storage::Storage;
use std::io::Write;

/// Export one user's data as YAML
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    user: &User,
    writer: &mut W,
) -> MonityResult<()> {
    let export = FullExport::from_storage(storage, user)?;

    writeln!(writer, "# Monity data export")
        .map_err(|e| MonityError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| MonityError::Export(e.to_string()))?;
    writeln!(writer, "# App version: {}", export.app_version)
        .map_err(|e| MonityError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| MonityError::Export(e.to_string()))?;
    writeln!(writer, "# Keep this file private. It contains your spending history.")
        .map_err(|e| MonityError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| MonityError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| MonityError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML export
pub fn import_from_yaml(yaml_str: &str) -> MonityResult<FullExport> {
    let export: FullExport = serde_yaml::from_str(yaml_str)
        .map_err(|e| MonityError::InvalidInput(format!("Not a valid export file: {}", e)))?;

    export.validate().map_err(MonityError::InvalidInput)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MonityPaths;
    use crate::models::{Expense, Money};
    use crate::storage::initialize_storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonityPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_yaml_export_has_header() {
        let (_temp_dir, storage) = create_test_storage();
        let user = User::new("anna@example.com", "Anna Kowalska", "hash");
        storage.users.upsert(user.clone()).unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &user, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Monity data export"));
        assert!(text.contains("anna@example.com"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        let user = User::new("anna@example.com", "Anna Kowalska", "hash");
        storage.users.upsert(user.clone()).unwrap();

        let category = storage.categories.get_by_name("Food").unwrap().unwrap();
        storage
            .expenses
            .upsert(Expense::new(
                user.id,
                category.id,
                Money::from_cents(2550),
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            ))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &user, &mut output).unwrap();

        // Comment lines are legal YAML; the parser skips them
        let imported = import_from_yaml(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(imported.user.email, "anna@example.com");
        assert_eq!(imported.expenses.len(), 1);
        assert_eq!(imported.expenses[0].amount, Money::from_cents(2550));
    }
}

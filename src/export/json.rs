//! JSON export
//!
//! Serializes one user's data into a single versioned document: profile,
//! the category table, and the user's expenses. The password hash never
//! leaves the credential store.

use crate::error::{MonityError, MonityResult};
use crate::models::{Category, Expense, User, UserId};
use crate::storage::Storage;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// The exported slice of the user record. Omits the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedProfile {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for ExportedProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            created_at: user.created_at,
        }
    }
}

/// A complete export of one user's data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for forward compatibility
    pub schema_version: String,

    /// When the export was created
    pub exported_at: DateTime<Utc>,

    /// Version of the app that created the export
    pub app_version: String,

    /// The exporting user
    pub user: ExportedProfile,

    /// All categories, including seeded defaults
    pub categories: Vec<Category>,

    /// The user's expenses, newest first
    pub expenses: Vec<Expense>,

    /// Counts and date range of the exported data
    pub metadata: ExportMetadata,
}

/// Summary of the export contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub category_count: usize,
    pub expense_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_expense: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_expense: Option<NaiveDate>,
}

impl FullExport {
    /// Build an export from current storage state
    pub fn from_storage(storage: &Storage, user: &User) -> MonityResult<Self> {
        let categories = storage.categories.get_all()?;
        let expenses = storage.expenses.get_by_user(user.id)?;

        let metadata = ExportMetadata {
            category_count: categories.len(),
            expense_count: expenses.len(),
            earliest_expense: expenses.iter().map(|e| e.date).min(),
            latest_expense: expenses.iter().map(|e| e.date).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: ExportedProfile::from(user),
            categories,
            expenses,
            metadata,
        })
    }

    /// Check that an export document is internally consistent. Used when
    /// reading one back, e.g. before restoring from a backup.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Unsupported schema version: {} (expected {})",
                self.schema_version, EXPORT_SCHEMA_VERSION
            ));
        }

        for expense in &self.expenses {
            if expense.user_id != self.user.id {
                return Err(format!(
                    "Expense {} does not belong to the exported user",
                    expense.id
                ));
            }
        }

        if self.metadata.category_count != self.categories.len() {
            return Err(format!(
                "Category count mismatch: metadata says {}, found {}",
                self.metadata.category_count,
                self.categories.len()
            ));
        }
        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Expense count mismatch: metadata says {}, found {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        Ok(())
    }
}

/// Export one user's data as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    user: &User,
    writer: &mut W,
    pretty: bool,
) -> MonityResult<()> {
    let export = FullExport::from_storage(storage, user)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
            .map_err(|e| MonityError::Export(e.to_string()))?;
    } else {
        serde_json::to_writer(writer, &export).map_err(|e| MonityError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> MonityResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| MonityError::InvalidInput(format!("Not a valid export file: {}", e)))?;

    export.validate().map_err(MonityError::InvalidInput)?;

    Ok(export)
}

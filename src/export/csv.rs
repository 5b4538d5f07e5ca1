//! CSV export
//!
//! Exports a user's expense rows in spreadsheet-friendly form. Category
//! names are joined in so the file is readable without the category table.

use crate::error::{MonityError, MonityResult};
use crate::models::{CategoryId, User};
use crate::services::expense::DELETED_CATEGORY_LABEL;
use crate::storage::Storage;
use std::collections::HashMap;
use std::io::Write;

/// Export a user's expenses as CSV, newest first
pub fn export_expenses_csv<W: Write>(
    storage: &Storage,
    user: &User,
    writer: &mut W,
) -> MonityResult<()> {
    let expenses = storage.expenses.get_by_user(user.id)?;

    let names: HashMap<CategoryId, String> = storage
        .categories
        .get_all()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ID", "Date", "Category", "Amount", "Description", "Recorded At"])
        .map_err(|e| MonityError::Export(e.to_string()))?;

    for expense in &expenses {
        let category = names
            .get(&expense.category_id)
            .map(String::as_str)
            .unwrap_or(DELETED_CATEGORY_LABEL);

        wtr.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            category.to_string(),
            format!("{:.2}", expense.amount.cents() as f64 / 100.0),
            expense.description.clone().unwrap_or_default(),
            expense.created_at.to_rfc3339(),
        ])
        .map_err(|e| MonityError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| MonityError::Export(e.to_string()))?;

    Ok(())
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

    fn setup_user(storage: &Storage) -> User {
        let user = User::new("anna@example.com", "Anna Kowalska", "hash");
        storage.users.upsert(user.clone()).unwrap();
        user
    }

    #[test]
    fn test_csv_has_header_and_joined_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let user = setup_user(&storage);

        let category = storage.categories.get_by_name("Food").unwrap().unwrap();
        let mut expense = Expense::new(
            user.id,
            category.id,
            Money::from_cents(2550),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        );
        expense.description = Some("Obiad".to_string());
        storage.expenses.upsert(expense).unwrap();

        let mut output = Vec::new();
        export_expenses_csv(&storage, &user, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Date,Category,Amount,Description,Recorded At"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("2025-03-10"));
        assert!(row.contains("Food"));
        assert!(row.contains("25.50"));
        assert!(row.contains("Obiad"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let (_temp_dir, storage) = create_test_storage();
        let user = setup_user(&storage);

        let category = storage.categories.get_by_name("Food").unwrap().unwrap();
        let mut expense = Expense::new(
            user.id,
            category.id,
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        );
        expense.description = Some("Obiad, \"u Ani\"".to_string());
        storage.expenses.upsert(expense).unwrap();

        let mut output = Vec::new();
        export_expenses_csv(&storage, &user, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("\"Obiad, \"\"u Ani\"\"\""));
    }

    #[test]
    fn test_csv_marks_deleted_categories() {
        let (_temp_dir, storage) = create_test_storage();
        let user = setup_user(&storage);

        let category = storage.categories.get_by_name("Food").unwrap().unwrap();
        storage
            .expenses
            .upsert(Expense::new(
                user.id,
                category.id,
                Money::from_cents(500),
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            ))
            .unwrap();
        storage.categories.delete(category.id).unwrap();

        let mut output = Vec::new();
        export_expenses_csv(&storage, &user, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains(DELETED_CATEGORY_LABEL));
    }

    #[test]
    fn test_csv_skips_other_users() {
        let (_temp_dir, storage) = create_test_storage();
        let user = setup_user(&storage);
        let other = User::new("piotr@example.com", "Piotr Nowak", "hash");
        storage.users.upsert(other.clone()).unwrap();

        let category = storage.categories.get_by_name("Food").unwrap().unwrap();
        storage
            .expenses
            .upsert(Expense::new(
                other.id,
                category.id,
                Money::from_cents(500),
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            ))
            .unwrap();

        let mut output = Vec::new();
        export_expenses_csv(&storage, &user, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        // Header only
        assert_eq!(text.lines().count(), 1);
    }
}

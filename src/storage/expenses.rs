//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. Expenses are indexed
//! by owner and by category so per-user listings and category reference
//! checks don't scan the whole map.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::MonityError;
use crate::models::{CategoryId, Expense, ExpenseId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence with indexing
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: user_id -> expense_ids
    by_user: RwLock<HashMap<UserId, Vec<ExpenseId>>>,
    /// Index: category_id -> expense_ids
    by_category: RwLock<HashMap<CategoryId, Vec<ExpenseId>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_user: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and build indexes
    pub fn load(&self) -> Result<(), MonityError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_user.clear();
        by_category.clear();

        for expense in file_data.expenses {
            let id = expense.id;
            by_user.entry(expense.user_id).or_default().push(id);
            by_category.entry(expense.category_id).or_default().push(id);
            data.insert(id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), MonityError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, MonityError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get a user's expenses (newest first)
    pub fn get_by_user(&self, user_id: UserId) -> Result<Vec<Expense>, MonityError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_user = self
            .by_user
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_user.get(&user_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut expenses: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    /// Get a user's expenses within an inclusive date range (newest first)
    pub fn get_by_user_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>, MonityError> {
        let all = self.get_by_user(user_id)?;
        Ok(all
            .into_iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect())
    }

    /// Count expenses referencing a category (across all users)
    pub fn count_by_category(&self, category_id: CategoryId) -> Result<usize, MonityError> {
        let by_category = self
            .by_category
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_category.get(&category_id).map(|v| v.len()).unwrap_or(0))
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), MonityError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Remove from old indexes if updating
        if let Some(old) = data.get(&expense.id) {
            if let Some(ids) = by_user.get_mut(&old.user_id) {
                ids.retain(|&id| id != expense.id);
            }
            if let Some(ids) = by_category.get_mut(&old.category_id) {
                ids.retain(|&id| id != expense.id);
            }
        }

        // Add to new indexes
        by_user.entry(expense.user_id).or_default().push(expense.id);
        by_category
            .entry(expense.category_id)
            .or_default()
            .push(expense.id);

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, MonityError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(expense) = data.remove(&id) {
            if let Some(ids) = by_user.get_mut(&expense.user_id) {
                ids.retain(|&eid| eid != id);
            }
            if let Some(ids) = by_category.get_mut(&expense.category_id) {
                ids.retain(|&eid| eid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count all expenses
    pub fn count(&self) -> Result<usize, MonityError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

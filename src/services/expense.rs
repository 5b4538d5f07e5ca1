//! Expense service
//!
//! Business logic for recording and querying expenses. Every operation runs
//! on behalf of an authenticated user and touches only that user's rows;
//! lookups by id answer NOT_FOUND for another user's expense rather than
//! admitting it exists.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::audit::EntityType;
use crate::error::{MonityError, MonityResult};
use crate::models::{Category, CategoryId, Expense, ExpenseId, Locale, Money, UserId};
use crate::storage::Storage;

use super::pagination::{paginate, Page, PageRequest};

/// Label shown for expenses whose category no longer exists
pub const DELETED_CATEGORY_LABEL: &str = "(deleted)";

/// Swatch color used when the category is gone
pub const DELETED_CATEGORY_COLOR: &str = "#9ca3af";

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Field to sort expense listings by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Date,
    Amount,
    CreatedAt,
}

impl std::str::FromStr for SortBy {
    type Err = MonityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "created_at" | "created-at" | "created" => Ok(Self::CreatedAt),
            other => Err(MonityError::InvalidInput(format!(
                "Unknown sort field '{}' (expected date, amount, or created_at)",
                other
            ))),
        }
    }
}

/// Direction for expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = MonityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(MonityError::InvalidInput(format!(
                "Unknown sort order '{}' (expected asc or desc)",
                other
            ))),
        }
    }
}

/// Query options for listing expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseQuery {
    /// Keep expenses dated on or after this day
    pub start_date: Option<NaiveDate>,
    /// Keep expenses dated on or before this day
    pub end_date: Option<NaiveDate>,
    /// Keep expenses in this category
    pub category_id: Option<CategoryId>,
    /// Sort field (date when unset)
    pub sort_by: SortBy,
    /// Sort direction (descending when unset)
    pub sort_order: SortOrder,
    /// Page to return
    pub page: PageRequest,
}

impl ExpenseQuery {
    /// Create a query with defaults: all expenses, newest first, first page
    pub fn new() -> Self {
        Self::default()
    }
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub category_id: CategoryId,
    pub amount: Money,
    pub description: Option<String>,
    /// Day of the spend; today when unset
    pub date: Option<NaiveDate>,
}

/// Changes to apply to an expense
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<Money>,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub clear_description: bool,
    pub date: Option<NaiveDate>,
}

impl ExpensePatch {
    fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && !self.clear_description
            && self.date.is_none()
    }
}

/// An expense joined with its category for display
#[derive(Debug, Clone)]
pub struct ExpenseWithCategory {
    pub expense: Expense,
    /// The referenced category; absent when it has since been deleted
    pub category: Option<Category>,
}

impl ExpenseWithCategory {
    /// Category name in the given locale, or a deleted marker
    pub fn category_name(&self, locale: Locale) -> &str {
        self.category
            .as_ref()
            .map(|c| c.localized_name(locale))
            .unwrap_or(DELETED_CATEGORY_LABEL)
    }

    /// Category swatch color, with a gray fallback for deleted categories
    pub fn category_color(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.color.as_str())
            .unwrap_or(DELETED_CATEGORY_COLOR)
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense for a user
    pub fn create(&self, user_id: UserId, input: CreateExpenseInput) -> MonityResult<Expense> {
        // Verify the category exists
        let category = self
            .storage
            .categories
            .get(input.category_id)?
            .ok_or_else(|| {
                MonityError::ForeignKey(format!("Category {} does not exist", input.category_id))
            })?;

        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let mut expense = Expense::new(user_id, input.category_id, input.amount, date);

        // An all-whitespace description is the same as no description
        if let Some(desc) = input.description {
            let desc = desc.trim();
            if !desc.is_empty() {
                expense.description = Some(desc.to_string());
            }
        }

        expense
            .validate()
            .map_err(|e| MonityError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(
                expense
                    .description
                    .clone()
                    .unwrap_or_else(|| category.name.clone()),
            ),
            &expense,
        )?;

        Ok(expense)
    }

    /// Get one of the user's expenses by ID
    pub fn get(&self, user_id: UserId, id: ExpenseId) -> MonityResult<Expense> {
        self.storage
            .expenses
            .get(id)?
            .filter(|e| e.user_id == user_id)
            .ok_or_else(|| MonityError::expense_not_found(id.to_string()))
    }

    /// Find one of the user's expenses by ID string
    ///
    /// Accepts a full UUID (with or without the `exp-` prefix) or a short
    /// hex prefix as shown in listings.
    pub fn find(&self, user_id: UserId, identifier: &str) -> MonityResult<Option<Expense>> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return Ok(self
                .storage
                .expenses
                .get(id)?
                .filter(|e| e.user_id == user_id));
        }

        let expenses = self.storage.expenses.get_by_user(user_id)?;
        Ok(expenses.into_iter().find(|e| e.id.matches_str(identifier)))
    }

    /// Find one of the user's expenses by ID string, or fail with NOT_FOUND
    pub fn resolve(&self, user_id: UserId, identifier: &str) -> MonityResult<Expense> {
        self.find(user_id, identifier)?
            .ok_or_else(|| MonityError::expense_not_found(identifier))
    }

    /// List the user's expenses with filtering, sorting, and pagination
    pub fn list(
        &self,
        user_id: UserId,
        query: ExpenseQuery,
    ) -> MonityResult<Page<ExpenseWithCategory>> {
        let mut expenses = self.storage.expenses.get_by_user(user_id)?;

        if let Some(start) = query.start_date {
            expenses.retain(|e| e.date >= start);
        }
        if let Some(end) = query.end_date {
            expenses.retain(|e| e.date <= end);
        }
        if let Some(category_id) = query.category_id {
            expenses.retain(|e| e.category_id == category_id);
        }

        expenses.sort_by(|a, b| {
            let ordering = match query.sort_by {
                SortBy::Date => a.date.cmp(&b.date),
                SortBy::Amount => a.amount.cmp(&b.amount),
                SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
            }
            .then(a.created_at.cmp(&b.created_at));

            match query.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let categories = self.category_index()?;
        let page = paginate(expenses, query.page);
        Ok(page.map(|expense| {
            let category = categories.get(&expense.category_id).cloned();
            ExpenseWithCategory { expense, category }
        }))
    }

    /// Update one of the user's expenses
    pub fn update(
        &self,
        user_id: UserId,
        id: ExpenseId,
        patch: ExpensePatch,
    ) -> MonityResult<Expense> {
        if patch.is_empty() {
            return Err(MonityError::InvalidInput("Nothing to update".into()));
        }

        let mut expense = self.get(user_id, id)?;
        let before = expense.clone();

        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }

        if let Some(category_id) = patch.category_id {
            // A changed category must exist
            self.storage.categories.get(category_id)?.ok_or_else(|| {
                MonityError::ForeignKey(format!("Category {} does not exist", category_id))
            })?;
            expense.category_id = category_id;
        }

        if patch.clear_description {
            expense.description = None;
        } else if let Some(desc) = patch.description {
            let desc = desc.trim();
            expense.description = if desc.is_empty() {
                None
            } else {
                Some(desc.to_string())
            };
        }

        if let Some(date) = patch.date {
            expense.date = date;
        }

        expense.touch();
        expense
            .validate()
            .map_err(|e| MonityError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(format!("{} {}", expense.date, expense.amount)),
            &before,
            &expense,
            None,
        )?;

        Ok(expense)
    }

    /// Delete one of the user's expenses
    pub fn delete(&self, user_id: UserId, id: ExpenseId) -> MonityResult<Expense> {
        let expense = self.get(user_id, id)?;

        self.storage.expenses.delete(id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(format!("{} {}", expense.date, expense.amount)),
            &expense,
        )?;

        Ok(expense)
    }

    /// The user's latest expenses (date descending, then newest recorded),
    /// joined with categories
    pub fn recent(&self, user_id: UserId, count: usize) -> MonityResult<Vec<ExpenseWithCategory>> {
        let mut expenses = self.storage.expenses.get_by_user(user_id)?;
        expenses.truncate(count);

        let categories = self.category_index()?;
        Ok(expenses
            .into_iter()
            .map(|expense| {
                let category = categories.get(&expense.category_id).cloned();
                ExpenseWithCategory { expense, category }
            })
            .collect())
    }

    fn category_index(&self) -> MonityResult<HashMap<CategoryId, Category>> {
        Ok(self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .map(|c| (c.id, c))
            .collect())
    }
}

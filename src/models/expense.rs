//! Expense model
//!
//! An expense is a single spend recorded by a user against a category.
//! Amounts are always positive; the date is the calendar day the money was
//! spent, separate from the creation timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId, UserId};
use super::money::Money;

/// Maximum expense description length
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The user who recorded this expense
    pub user_id: UserId,

    /// The category this expense belongs to
    pub category_id: CategoryId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The day the money was spent
    pub date: NaiveDate,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(user_id: UserId, category_id: CategoryId, amount: Money, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            user_id,
            category_id,
            amount,
            description: None,
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an expense with a description
    pub fn with_description(
        user_id: UserId,
        category_id: CategoryId,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(user_id, category_id, amount, date);
        expense.description = Some(description.into());
        expense
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if let Some(desc) = &self.description {
            if desc.trim().is_empty() {
                return Err(ExpenseValidationError::EmptyDescription);
            }
            if desc.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(ExpenseValidationError::DescriptionTooLong(
                    desc.chars().count(),
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.description.as_deref().unwrap_or("")
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
    DescriptionTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::EmptyDescription => {
                write!(f, "Description cannot be empty when provided")
            }
            Self::DescriptionTooLong(len) => {
                write!(
                    f,
                    "Description too long ({} chars, max {})",
                    len, MAX_DESCRIPTION_LEN
                )
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let user_id = UserId::new();
        let category_id = CategoryId::new();
        let expense = Expense::new(user_id, category_id, Money::from_cents(2550), test_date());

        assert_eq!(expense.user_id, user_id);
        assert_eq!(expense.category_id, category_id);
        assert_eq!(expense.amount, Money::from_cents(2550));
        assert_eq!(expense.date, test_date());
        assert!(expense.description.is_none());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_with_description() {
        let expense = Expense::with_description(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(1200),
            test_date(),
            "Lunch at the market",
        );
        assert_eq!(expense.description.as_deref(), Some("Lunch at the market"));
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_amount_must_be_positive() {
        let mut expense = Expense::new(
            UserId::new(),
            CategoryId::new(),
            Money::zero(),
            test_date(),
        );
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        expense.amount = Money::from_cents(-500);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        expense.amount = Money::from_cents(1);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_description_validation() {
        let mut expense = Expense::new(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(100),
            test_date(),
        );

        expense.description = Some("   ".to_string());
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );

        expense.description = Some("x".repeat(201));
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::DescriptionTooLong(201))
        ));

        expense.description = Some("x".repeat(200));
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_touch_bumps_updated_at() {
        let mut expense = Expense::new(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(100),
            test_date(),
        );
        let before = expense.updated_at;
        expense.touch();
        assert!(expense.updated_at >= before);
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::with_description(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(2550),
            test_date(),
            "Groceries",
        );

        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.id, deserialized.id);
        assert_eq!(expense.amount, deserialized.amount);
        assert_eq!(expense.description, deserialized.description);

        // No description key at all when absent
        let bare = Expense::new(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(100),
            test_date(),
        );
        assert!(!serde_json::to_string(&bare).unwrap().contains("description"));
    }

    #[test]
    fn test_display() {
        let expense = Expense::with_description(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(5000),
            test_date(),
            "Cinema",
        );
        assert_eq!(format!("{}", expense), "2025-03-15 50.00 zł Cinema");
    }
}

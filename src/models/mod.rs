//! Core data models for Monity
//!
//! This module contains all the data structures that represent the expense
//! tracking domain: users, sessions, categories, expenses, money, and
//! reporting periods.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;
pub mod session;
pub mod user;

pub use category::{Category, DefaultCategory};
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId, UserId};
pub use money::Money;
pub use period::{Locale, PeriodWindow, ReportPeriod};
pub use session::Session;
pub use user::User;

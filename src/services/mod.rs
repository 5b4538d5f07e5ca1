//! Service layer for Monity
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, ownership checks, pagination, analytics, and audit logging
//! around every write.

pub mod analytics;
pub mod category;
pub mod dashboard;
pub mod expense;
pub mod pagination;

pub use analytics::{
    resolve_window, AnalyticsService, CategoryBreakdown, CategoryTrend, ExpenseSummary,
    PeriodComparison, TrendDirection, TrendPoint,
};
pub use category::{CategoryPatch, CategoryService};
pub use dashboard::{Dashboard, DashboardService};
pub use expense::{
    CreateExpenseInput, ExpensePatch, ExpenseQuery, ExpenseService, ExpenseWithCategory, SortBy,
    SortOrder,
};
pub use pagination::{paginate, Page, PageMeta, PageRequest};

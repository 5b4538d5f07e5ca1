//! Dashboard aggregation
//!
//! One call gathers everything the dashboard screen needs: the period
//! summary with its comparison to the previous period, the latest expenses,
//! and the category list. Each call reads current state, so "refresh" is
//! simply calling it again.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::MonityResult;
use crate::models::{Category, ReportPeriod, UserId};
use crate::storage::Storage;

use super::analytics::{AnalyticsService, ExpenseSummary, PeriodComparison};
use super::category::CategoryService;
use super::expense::{ExpenseService, ExpenseWithCategory};

/// Service assembling the dashboard view
pub struct DashboardService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

/// Everything the dashboard screen shows
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// The period the summary covers
    pub period: ReportPeriod,
    pub summary: ExpenseSummary,
    pub comparison: PeriodComparison,
    /// Latest expenses, newest first
    pub recent: Vec<ExpenseWithCategory>,
    /// All categories, defaults included
    pub categories: Vec<Category>,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Gather the dashboard for a user
    ///
    /// Falls back to the configured default period when none is given. The
    /// recent-expense count comes from settings.
    pub fn gather(
        &self,
        user_id: UserId,
        period: Option<ReportPeriod>,
        today: NaiveDate,
    ) -> MonityResult<Dashboard> {
        let period = period.unwrap_or(self.settings.default_period);
        let window = period.window(today);

        let analytics = AnalyticsService::new(self.storage, self.settings);
        let summary = analytics.summary(user_id, window)?;
        let comparison = analytics.compare(user_id, window)?;

        let recent = ExpenseService::new(self.storage)
            .recent(user_id, self.settings.recent_expense_count)?;

        let categories = CategoryService::new(self.storage).list_all()?;

        Ok(Dashboard {
            period,
            summary,
            comparison,
            recent,
            categories,
        })
    }
}

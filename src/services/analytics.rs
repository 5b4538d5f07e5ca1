//! Analytics over a user's expenses
//!
//! Generates period summaries with per-category breakdowns, per-category
//! daily trends, and period-over-period comparisons. All numbers cover one
//! user's expenses within a resolved date window.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{MonityError, MonityResult};
use crate::models::{Category, CategoryId, Money, PeriodWindow, ReportPeriod, UserId};
use crate::storage::Storage;

use super::expense::{DELETED_CATEGORY_COLOR, DELETED_CATEGORY_LABEL};

/// Service for expense analytics
pub struct AnalyticsService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

/// Resolve a reporting window ending on `today`
///
/// Explicit bounds override the period's own; mixing is fine (e.g. a month
/// window with only `from` moved back).
pub fn resolve_window(
    period: ReportPeriod,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> MonityResult<PeriodWindow> {
    let mut window = period.window(today);
    if let Some(from) = from {
        window.start = from;
    }
    if let Some(to) = to {
        window.end = to;
    }

    if window.start > window.end {
        return Err(MonityError::InvalidInput(format!(
            "Start date {} is after end date {}",
            window.start, window.end
        )));
    }

    Ok(window)
}

/// One category's share of a period's spending
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_color: String,
    pub amount: Money,
    /// Share of the period total, 0-100
    pub percentage: f64,
}

/// Spending summary for one period
#[derive(Debug, Clone)]
pub struct ExpenseSummary {
    /// The window the summary covers
    pub window: PeriodWindow,
    /// Total spent in the window
    pub total: Money,
    /// Per-category rows, largest first; categories without spending are
    /// left out
    pub breakdown: Vec<CategoryBreakdown>,
}

/// Spending on a single day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: Money,
}

/// One category's day-by-day spending over a period
#[derive(Debug, Clone)]
pub struct CategoryTrend {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_color: String,
    /// Daily totals, oldest first; days without spending are omitted
    pub points: Vec<TrendPoint>,
}

impl CategoryTrend {
    /// Total across all points
    pub fn total(&self) -> Money {
        self.points.iter().map(|p| p.amount).sum()
    }
}

/// Whether spending moved up, down, or held steady
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Current period spending against the period immediately before it
#[derive(Debug, Clone)]
pub struct PeriodComparison {
    /// The current window
    pub window: PeriodWindow,
    pub current_total: Money,
    /// Total over the equal-length window ending the day before
    pub previous_total: Money,
    pub direction: TrendDirection,
    /// Percent change against the previous total; absent when the previous
    /// period had no spending
    pub change_percentage: Option<f64>,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new analytics service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Summarize a user's spending in a window, broken down by category
    pub fn summary(&self, user_id: UserId, window: PeriodWindow) -> MonityResult<ExpenseSummary> {
        let expenses =
            self.storage
                .expenses
                .get_by_user_in_range(user_id, window.start, window.end)?;

        let mut by_category: HashMap<CategoryId, Money> = HashMap::new();
        let mut total = Money::zero();
        for expense in &expenses {
            *by_category
                .entry(expense.category_id)
                .or_insert_with(Money::zero) += expense.amount;
            total += expense.amount;
        }

        let categories = self.category_index()?;
        let mut breakdown: Vec<CategoryBreakdown> = by_category
            .into_iter()
            .map(|(category_id, amount)| {
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    (amount.cents() as f64 / total.cents() as f64) * 100.0
                };
                let (name, color) = self.name_and_color(&categories, category_id);
                CategoryBreakdown {
                    category_id,
                    category_name: name,
                    category_color: color,
                    amount,
                    percentage,
                }
            })
            .collect();

        // Largest share first; name breaks ties so output is stable
        breakdown.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        Ok(ExpenseSummary {
            window,
            total,
            breakdown,
        })
    }

    /// Day-by-day spending per category over a window
    ///
    /// Every category appears, including those without any spending, so
    /// charts keep a stable set of series across periods.
    pub fn trends(&self, user_id: UserId, window: PeriodWindow) -> MonityResult<Vec<CategoryTrend>> {
        let expenses =
            self.storage
                .expenses
                .get_by_user_in_range(user_id, window.start, window.end)?;

        let mut daily: HashMap<CategoryId, BTreeMap<NaiveDate, Money>> = HashMap::new();
        for expense in &expenses {
            *daily
                .entry(expense.category_id)
                .or_default()
                .entry(expense.date)
                .or_insert_with(Money::zero) += expense.amount;
        }

        let locale = self.settings.locale;
        let mut trends: Vec<CategoryTrend> = self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .map(|category| {
                let points = daily
                    .remove(&category.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(date, amount)| TrendPoint { date, amount })
                    .collect();
                CategoryTrend {
                    category_id: category.id,
                    category_name: category.localized_name(locale).to_string(),
                    category_color: category.color,
                    points,
                }
            })
            .collect();

        // Expenses whose category has since been deleted still count
        for (category_id, buckets) in daily {
            trends.push(CategoryTrend {
                category_id,
                category_name: DELETED_CATEGORY_LABEL.to_string(),
                category_color: DELETED_CATEGORY_COLOR.to_string(),
                points: buckets
                    .into_iter()
                    .map(|(date, amount)| TrendPoint { date, amount })
                    .collect(),
            });
        }

        Ok(trends)
    }

    /// Compare a window's spending with the equal-length window before it
    pub fn compare(&self, user_id: UserId, window: PeriodWindow) -> MonityResult<PeriodComparison> {
        let current_total = self.total_in(user_id, window)?;
        let previous_total = self.total_in(user_id, window.previous())?;

        let direction = match current_total.cmp(&previous_total) {
            std::cmp::Ordering::Greater => TrendDirection::Up,
            std::cmp::Ordering::Less => TrendDirection::Down,
            std::cmp::Ordering::Equal => TrendDirection::Stable,
        };

        let change_percentage = if previous_total.is_positive() {
            let delta = (current_total - previous_total).abs();
            Some((delta.cents() as f64 / previous_total.cents() as f64) * 100.0)
        } else {
            None
        };

        Ok(PeriodComparison {
            window,
            current_total,
            previous_total,
            direction,
            change_percentage,
        })
    }

    fn total_in(&self, user_id: UserId, window: PeriodWindow) -> MonityResult<Money> {
        let expenses =
            self.storage
                .expenses
                .get_by_user_in_range(user_id, window.start, window.end)?;
        Ok(expenses.iter().map(|e| e.amount).sum())
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

    fn name_and_color(
        &self,
        categories: &HashMap<CategoryId, Category>,
        category_id: CategoryId,
    ) -> (String, String) {
        match categories.get(&category_id) {
            Some(category) => (
                category.localized_name(self.settings.locale).to_string(),
                category.color.clone(),
            ),
            None => (
                DELETED_CATEGORY_LABEL.to_string(),
                DELETED_CATEGORY_COLOR.to_string(),
            ),
        }
    }
}

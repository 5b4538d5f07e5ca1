//! Dashboard rendering
//!
//! Assembles the dashboard screen: greeting, period summary with comparison,
//! recent expenses, and the category count.

use crate::config::Settings;
use crate::models::{Locale, User};
use crate::services::Dashboard;

use super::expense::format_recent_expenses;
use super::format::separator;
use super::summary::{format_comparison, format_summary};

/// Format the full dashboard screen
pub fn format_dashboard(dashboard: &Dashboard, user: &User, settings: &Settings) -> String {
    let locale = settings.locale;
    let mut output = String::new();

    output.push_str(&format!(
        "{}, {}!\n",
        match locale {
            Locale::En => "Hello",
            Locale::Pl => "Cześć",
        },
        user.full_name
    ));
    output.push_str(&format!("{}\n", dashboard.period.label(locale)));
    output.push_str(&separator(64));
    output.push_str("\n\n");

    output.push_str(&format_summary(&dashboard.summary, settings));
    output.push('\n');
    output.push_str(&format_comparison(&dashboard.comparison, settings));
    output.push('\n');

    output.push_str(match locale {
        Locale::En => "Recent expenses:\n",
        Locale::Pl => "Ostatnie wydatki:\n",
    });
    output.push_str(&format_recent_expenses(&dashboard.recent, settings));

    output.push('\n');
    output.push_str(&match locale {
        Locale::En => format!("Categories: {}\n", dashboard.categories.len()),
        Locale::Pl => format!("Kategorie: {}\n", dashboard.categories.len()),
    });

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, PeriodWindow, ReportPeriod, UserId};
    use crate::services::{
        ExpenseSummary, ExpenseWithCategory, PeriodComparison, TrendDirection,
    };
    use chrono::NaiveDate;

    fn en_settings() -> Settings {
        Settings {
            locale: Locale::En,
            ..Settings::default()
        }
    }

    fn sample_dashboard() -> Dashboard {
        let window: PeriodWindow =
            ReportPeriod::Month.window(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        let category = Category::new("Groceries", "#22c55e");
        let expense = crate::models::Expense::new(
            UserId::new(),
            category.id,
            Money::from_cents(2550),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        );

        Dashboard {
            period: ReportPeriod::Month,
            summary: ExpenseSummary {
                window,
                total: Money::from_cents(2550),
                breakdown: vec![],
            },
            comparison: PeriodComparison {
                window,
                current_total: Money::from_cents(2550),
                previous_total: Money::zero(),
                direction: TrendDirection::Up,
                change_percentage: None,
            },
            recent: vec![ExpenseWithCategory {
                expense,
                category: Some(category.clone()),
            }],
            categories: vec![category, Category::new("Transport", "#3b82f6")],
        }
    }

    #[test]
    fn test_format_dashboard() {
        let user = User::new("anna@example.com", "Anna Kowalska", "hash");
        let output = format_dashboard(&sample_dashboard(), &user, &en_settings());

        assert!(output.contains("Hello, Anna Kowalska!"));
        assert!(output.contains("This Month"));
        assert!(output.contains("Total spent: 25.50 zł"));
        assert!(output.contains("Recent expenses:"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("Categories: 2"));
    }

    #[test]
    fn test_format_dashboard_polish() {
        let user = User::new("anna@example.com", "Anna", "hash");
        let output = format_dashboard(&sample_dashboard(), &user, &Settings::default());

        assert!(output.contains("Cześć, Anna!"));
        assert!(output.contains("Ten miesiąc"));
        assert!(output.contains("Ostatnie wydatki:"));
        assert!(output.contains("Kategorie: 2"));
    }
}

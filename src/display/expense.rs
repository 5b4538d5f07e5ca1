//! Expense display formatting
//!
//! Renders expense listings as tables with a pagination footer, compact
//! recent-expense rows for the dashboard, and single-expense detail views.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::models::{Expense, Locale};
use crate::services::{ExpenseWithCategory, Page, PageMeta};

use super::format::{colorize, polish_plural, truncate};

/// Format one page of expenses as a table with a pagination footer
pub fn format_expense_page(page: &Page<ExpenseWithCategory>, settings: &Settings) -> String {
    if page.meta.total == 0 {
        return match settings.locale {
            Locale::En => "No expenses found.".to_string(),
            Locale::Pl => "Nie znaleziono wydatków.".to_string(),
        };
    }

    let locale = settings.locale;
    let headers = match locale {
        Locale::En => ["ID", "Date", "Category", "Amount", "Description"],
        Locale::Pl => ["ID", "Data", "Kategoria", "Kwota", "Opis"],
    };

    let mut builder = Builder::default();
    builder.push_record(headers);

    for item in &page.items {
        builder.push_record([
            item.expense.id.to_string(),
            item.expense.date.format(locale.date_format()).to_string(),
            colorize(item.category_name(locale), item.category_color()),
            item.expense
                .amount
                .format_with_symbol(&settings.currency_symbol),
            truncate(item.expense.description.as_deref().unwrap_or("-"), 40),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());

    format!("{}\n\n{}\n", table, format_page_footer(&page.meta, locale))
}

/// The "Page 2 of 5 · 93 expenses" line under listings
pub fn format_page_footer(meta: &PageMeta, locale: Locale) -> String {
    match locale {
        Locale::En => {
            let noun = if meta.total == 1 { "expense" } else { "expenses" };
            format!(
                "Page {} of {} · {} {}",
                meta.page, meta.total_pages, meta.total, noun
            )
        }
        Locale::Pl => {
            let noun = polish_plural(meta.total, "wydatek", "wydatki", "wydatków");
            format!(
                "Strona {} z {} · {} {}",
                meta.page, meta.total_pages, meta.total, noun
            )
        }
    }
}

/// Compact one-per-line rows for the dashboard's recent list
pub fn format_recent_expenses(items: &[ExpenseWithCategory], settings: &Settings) -> String {
    let locale = settings.locale;
    if items.is_empty() {
        return match locale {
            Locale::En => "  (no expenses yet)\n".to_string(),
            Locale::Pl => "  (brak wydatków)\n".to_string(),
        };
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!(
            "  {}  {:<20} {:>12}  {}\n",
            item.expense.date.format(locale.date_format()),
            truncate(item.category_name(locale), 20),
            item.expense
                .amount
                .format_with_symbol(&settings.currency_symbol),
            truncate(item.expense.description.as_deref().unwrap_or(""), 30)
        ));
    }
    output
}

/// Format one expense's details
pub fn format_expense_details(
    expense: &Expense,
    category_name: &str,
    settings: &Settings,
) -> String {
    let locale = settings.locale;
    let mut output = String::new();

    let (title, date_label, amount_label, category_label, desc_label) = match locale {
        Locale::En => ("Expense", "Date", "Amount", "Category", "Description"),
        Locale::Pl => ("Wydatek", "Data", "Kwota", "Kategoria", "Opis"),
    };

    output.push_str(&format!("{}: {}\n", title, expense.id));
    output.push_str(&format!(
        "  {:<12} {}\n",
        format!("{}:", date_label),
        expense.date.format(locale.date_format())
    ));
    output.push_str(&format!(
        "  {:<12} {}\n",
        format!("{}:", amount_label),
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "  {:<12} {}\n",
        format!("{}:", category_label),
        category_name
    ));
    if let Some(desc) = &expense.description {
        output.push_str(&format!("  {:<12} {}\n", format!("{}:", desc_label), desc));
    }

    output.push('\n');
    output.push_str(&format!(
        "  {:<12} {}\n",
        match locale {
            Locale::En => "Recorded:",
            Locale::Pl => "Zapisany:",
        },
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  {:<12} {}\n",
        match locale {
            Locale::En => "Modified:",
            Locale::Pl => "Zmieniony:",
        },
        expense.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId, Money, UserId};
    use crate::services::{paginate, PageRequest};
    use chrono::NaiveDate;

    fn en_settings() -> Settings {
        Settings {
            locale: Locale::En,
            ..Settings::default()
        }
    }

    fn sample_item(cents: i64, day: u32) -> ExpenseWithCategory {
        let category = Category::new("Groceries", "#22c55e");
        let expense = Expense::with_description(
            UserId::new(),
            category.id,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            "Market run",
        );
        ExpenseWithCategory {
            expense,
            category: Some(category),
        }
    }

    #[test]
    fn test_format_empty_page() {
        let page = paginate(Vec::<ExpenseWithCategory>::new(), PageRequest::default());
        let output = format_expense_page(&page, &en_settings());
        assert!(output.contains("No expenses found"));
    }

    #[test]
    fn test_format_expense_page_with_footer() {
        let items: Vec<ExpenseWithCategory> =
            (1..=25).map(|day| sample_item(1000, day)).collect();
        let page = paginate(items, PageRequest::new(Some(2), Some(10)).unwrap());

        let output = format_expense_page(&page, &en_settings());
        assert!(output.contains("Groceries"));
        assert!(output.contains("Market run"));
        assert!(output.contains("Page 2 of 3 · 25 expenses"));
    }

    #[test]
    fn test_footer_polish_plurals() {
        let meta = PageMeta {
            total: 93,
            page: 2,
            limit: 20,
            total_pages: 5,
            has_prev: true,
            has_next: true,
        };
        assert_eq!(
            format_page_footer(&meta, Locale::Pl),
            "Strona 2 z 5 · 93 wydatki"
        );
        assert_eq!(
            format_page_footer(&meta, Locale::En),
            "Page 2 of 5 · 93 expenses"
        );

        let one = PageMeta {
            total: 1,
            page: 1,
            limit: 20,
            total_pages: 1,
            has_prev: false,
            has_next: false,
        };
        assert_eq!(format_page_footer(&one, Locale::Pl), "Strona 1 z 1 · 1 wydatek");
        assert_eq!(format_page_footer(&one, Locale::En), "Page 1 of 1 · 1 expense");
    }

    #[test]
    fn test_format_recent_expenses() {
        let items = vec![sample_item(2550, 15), sample_item(1000, 14)];
        let output = format_recent_expenses(&items, &en_settings());
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("2025-03-15"));

        let empty = format_recent_expenses(&[], &en_settings());
        assert!(empty.contains("no expenses yet"));
    }

    #[test]
    fn test_format_expense_details() {
        let expense = Expense::with_description(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(2550),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            "Cinema tickets",
        );

        let output = format_expense_details(&expense, "Entertainment", &en_settings());
        assert!(output.contains("2025-03-15"));
        assert!(output.contains("25.50 zł"));
        assert!(output.contains("Entertainment"));
        assert!(output.contains("Cinema tickets"));
    }

    #[test]
    fn test_polish_date_format() {
        let expense = Expense::new(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(100),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        );
        let output = format_expense_details(&expense, "Jedzenie", &Settings::default());
        assert!(output.contains("15.03.2025"));
    }
}

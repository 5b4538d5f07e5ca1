//! Category display formatting
//!
//! Formats categories for terminal output in table and detail views. Column
//! headers and labels follow the configured locale; colors render as 24-bit
//! swatches.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::models::{Category, Locale};

use super::format::{color_swatch, truncate};

/// Format categories as a table
pub fn format_category_list(categories: &[Category], settings: &Settings) -> String {
    if categories.is_empty() {
        return match settings.locale {
            Locale::En => "No categories found.".to_string(),
            Locale::Pl => "Nie znaleziono kategorii.".to_string(),
        };
    }

    let locale = settings.locale;
    let headers = match locale {
        Locale::En => ["ID", "", "Name", "Description", "Default"],
        Locale::Pl => ["ID", "", "Nazwa", "Opis", "Domyślna"],
    };

    let mut builder = Builder::default();
    builder.push_record(headers);

    for category in categories {
        let default_marker = if category.is_default { "✓" } else { "" };
        builder.push_record([
            category.id.to_string(),
            color_swatch(&category.color),
            category.localized_name(locale).to_string(),
            truncate(category.description.as_deref().unwrap_or("-"), 40),
            default_marker.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format one category's details
pub fn format_category_details(
    category: &Category,
    expense_count: usize,
    settings: &Settings,
) -> String {
    let locale = settings.locale;
    let mut output = String::new();

    let (id_label, name_label, color_label, desc_label, default_label, expenses_label) =
        match locale {
            Locale::En => ("ID", "Name", "Color", "Description", "Default", "Expenses"),
            Locale::Pl => ("ID", "Nazwa", "Kolor", "Opis", "Domyślna", "Wydatki"),
        };

    output.push_str(&format!(
        "{}: {}\n",
        match locale {
            Locale::En => "Category",
            Locale::Pl => "Kategoria",
        },
        category.localized_name(locale)
    ));
    output.push_str(&format!("  {:<12} {}\n", format!("{}:", id_label), category.id));
    output.push_str(&format!(
        "  {:<12} {}\n",
        format!("{}:", name_label),
        category.name
    ));
    if let Some(pl) = &category.name_pl {
        output.push_str(&format!("  {:<12} {}\n", "Nazwa (pl):", pl));
    }
    output.push_str(&format!(
        "  {:<12} {} {}\n",
        format!("{}:", color_label),
        color_swatch(&category.color),
        category.color
    ));
    if let Some(desc) = &category.description {
        output.push_str(&format!("  {:<12} {}\n", format!("{}:", desc_label), desc));
    }
    output.push_str(&format!(
        "  {:<12} {}\n",
        format!("{}:", default_label),
        yes_no(category.is_default, locale)
    ));
    output.push_str(&format!(
        "  {:<12} {}\n",
        format!("{}:", expenses_label),
        expense_count
    ));

    output.push('\n');
    output.push_str(&format!(
        "  {:<12} {}\n",
        match locale {
            Locale::En => "Created:",
            Locale::Pl => "Utworzona:",
        },
        category.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  {:<12} {}\n",
        match locale {
            Locale::En => "Modified:",
            Locale::Pl => "Zmieniona:",
        },
        category.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

fn yes_no(value: bool, locale: Locale) -> &'static str {
    match (value, locale) {
        (true, Locale::En) => "Yes",
        (false, Locale::En) => "No",
        (true, Locale::Pl) => "Tak",
        (false, Locale::Pl) => "Nie",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_settings() -> Settings {
        Settings {
            locale: Locale::En,
            ..Settings::default()
        }
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_category_list(&[], &en_settings());
        assert!(output.contains("No categories found"));

        let output = format_category_list(&[], &Settings::default());
        assert!(output.contains("Nie znaleziono kategorii"));
    }

    #[test]
    fn test_format_category_list() {
        let categories = vec![
            Category::new("Groceries", "#22c55e"),
            Category::with_description("Transport", "#3b82f6", "Bus and tram tickets"),
        ];

        let output = format_category_list(&categories, &en_settings());
        assert!(output.contains("Groceries"));
        assert!(output.contains("Transport"));
        assert!(output.contains("Bus and tram tickets"));
        assert!(output.contains("Name"));
        // Short IDs are shown
        assert!(output.contains(&categories[0].id.to_string()));
    }

    #[test]
    fn test_list_localizes_names_and_headers() {
        let mut category = Category::new("Food", "#22c55e");
        category.name_pl = Some("Jedzenie".to_string());

        let output = format_category_list(std::slice::from_ref(&category), &Settings::default());
        assert!(output.contains("Nazwa"));
        assert!(output.contains("Jedzenie"));
        assert!(!output.contains("Food"));
    }

    #[test]
    fn test_format_category_details() {
        let mut category = Category::with_description("Groceries", "#22c55e", "Daily shopping");
        category.is_default = true;

        let output = format_category_details(&category, 12, &en_settings());
        assert!(output.contains("Groceries"));
        assert!(output.contains("Daily shopping"));
        assert!(output.contains("#22c55e"));
        assert!(output.contains("Yes"));
        assert!(output.contains("12"));
        assert!(output.contains("Created:"));
    }
}

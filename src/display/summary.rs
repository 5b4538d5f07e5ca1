//! Summary, trend, and comparison rendering
//!
//! Draws the period summary as a color-coded breakdown with proportional
//! bars, the per-category daily trends, and the period-over-period
//! comparison line.

use crate::config::Settings;
use crate::models::Locale;
use crate::services::{CategoryTrend, ExpenseSummary, PeriodComparison};

use super::format::{color_swatch, colorize, format_bar, format_percentage, separator, truncate};

const BAR_WIDTH: usize = 20;

/// Format a period summary with its category breakdown
pub fn format_summary(summary: &ExpenseSummary, settings: &Settings) -> String {
    let locale = settings.locale;
    let mut output = String::new();

    output.push_str(&format!(
        "{} · {} – {}\n",
        summary.window.period.summary_name(locale),
        summary.window.start.format(locale.date_format()),
        summary.window.end.format(locale.date_format())
    ));
    output.push_str(&separator(64));
    output.push('\n');

    output.push_str(&format!(
        "{} {}\n",
        match locale {
            Locale::En => "Total spent:",
            Locale::Pl => "Razem wydano:",
        },
        summary.total.format_with_symbol(&settings.currency_symbol)
    ));

    if summary.breakdown.is_empty() {
        output.push_str(match locale {
            Locale::En => "\nNo expenses in this period.\n",
            Locale::Pl => "\nBrak wydatków w tym okresie.\n",
        });
        return output;
    }

    output.push('\n');

    let max_cents = summary
        .breakdown
        .iter()
        .map(|row| row.amount.cents())
        .max()
        .unwrap_or(0);

    for row in &summary.breakdown {
        let bar = colorize(
            &format_bar(row.amount.cents() as f64, max_cents as f64, BAR_WIDTH),
            &row.category_color,
        );
        output.push_str(&format!(
            "  {} {:<20} {:>12}  {} {:>6}\n",
            color_swatch(&row.category_color),
            truncate(&row.category_name, 20),
            row.amount.format_with_symbol(&settings.currency_symbol),
            bar,
            format_percentage(row.percentage)
        ));
    }

    output
}

/// Format per-category daily trends
///
/// Categories without any spending in the window are skipped; bars share one
/// scale so days are comparable across categories.
pub fn format_trends(trends: &[CategoryTrend], settings: &Settings) -> String {
    let locale = settings.locale;

    let active: Vec<&CategoryTrend> = trends.iter().filter(|t| !t.points.is_empty()).collect();
    if active.is_empty() {
        return match locale {
            Locale::En => "No expenses in this period.\n".to_string(),
            Locale::Pl => "Brak wydatków w tym okresie.\n".to_string(),
        };
    }

    let max_cents = active
        .iter()
        .flat_map(|t| t.points.iter())
        .map(|p| p.amount.cents())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (i, trend) in active.iter().enumerate() {
        output.push_str(&format!(
            "{} {} ({})\n",
            color_swatch(&trend.category_color),
            trend.category_name,
            trend.total().format_with_symbol(&settings.currency_symbol)
        ));

        for point in &trend.points {
            let bar = colorize(
                &format_bar(point.amount.cents() as f64, max_cents as f64, BAR_WIDTH),
                &trend.category_color,
            );
            output.push_str(&format!(
                "  {}  {} {:>12}\n",
                point.date.format(locale.date_format()),
                bar,
                point.amount.format_with_symbol(&settings.currency_symbol)
            ));
        }

        if i < active.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format a period-over-period comparison
pub fn format_comparison(comparison: &PeriodComparison, settings: &Settings) -> String {
    let locale = settings.locale;
    let (current_label, previous_label) = match locale {
        Locale::En => ("This period:", "Previous:"),
        Locale::Pl => ("Ten okres:", "Poprzedni:"),
    };

    format!(
        "{} {} · {} {} · {}\n",
        current_label,
        comparison
            .current_total
            .format_with_symbol(&settings.currency_symbol),
        previous_label,
        comparison
            .previous_total
            .format_with_symbol(&settings.currency_symbol),
        super::format::format_direction(
            comparison.direction,
            comparison.change_percentage,
            locale
        )
    )
}

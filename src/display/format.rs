//! Shared formatting helpers for terminal output

use crate::models::Locale;
use crate::services::TrendDirection;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// A two-block color swatch in the given hex color
///
/// Falls back to an uncolored swatch when the hex string is malformed.
pub fn color_swatch(color: &str) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m██\x1b[0m", r, g, b),
        None => "██".to_string(),
    }
}

/// Wrap text in a 24-bit foreground color
pub fn colorize(text: &str, color: &str) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
        None => text.to_string(),
    }
}

/// Render a spending direction with its percent change
///
/// More spending shows red, less shows green; a missing percentage (no
/// baseline) leaves just the arrow.
pub fn format_direction(
    direction: TrendDirection,
    change_percentage: Option<f64>,
    locale: Locale,
) -> String {
    match (direction, change_percentage) {
        (TrendDirection::Stable, _) => match locale {
            Locale::En => "no change".to_string(),
            Locale::Pl => "bez zmian".to_string(),
        },
        (TrendDirection::Up, Some(pct)) => {
            format!("\x1b[31m▲ {}\x1b[0m", format_percentage(pct))
        }
        (TrendDirection::Down, Some(pct)) => {
            format!("\x1b[32m▼ {}\x1b[0m", format_percentage(pct))
        }
        (TrendDirection::Up, None) => "\x1b[31m▲\x1b[0m".to_string(),
        (TrendDirection::Down, None) => "\x1b[32m▼\x1b[0m".to_string(),
    }
}

/// Pick the Polish plural form for a count (1 wydatek, 2 wydatki, 5 wydatków)
pub fn polish_plural<'a>(n: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        return one;
    }
    let last_two = n % 100;
    let last = n % 10;
    if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        few
    } else {
        many
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

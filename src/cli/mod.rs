//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Subcommand enums
//! live next to their handlers; the top-level parser is in `main.rs`.

use chrono::NaiveDate;

use crate::error::{MonityError, MonityResult};

pub mod audit;
pub mod auth;
pub mod category;
pub mod config;
pub mod expense;
pub mod export;
pub mod report;

/// Parse a date in ISO or Polish day-first form
fn parse_date(s: &str) -> MonityResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .map_err(|_| {
            MonityError::InvalidInput(format!(
                "Invalid date '{}' (expected YYYY-MM-DD or DD.MM.YYYY)",
                s
            ))
        })
}

pub use audit::handle_audit_command;
pub use auth::{handle_login, handle_logout, handle_passwd, handle_register, handle_whoami};
pub use category::{handle_category_command, CategoryCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use report::{handle_dashboard, handle_summary, handle_trends};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(parse_date("2025-03-09").unwrap(), expected);
        assert_eq!(parse_date("09.03.2025").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("next tuesday").unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
        assert!(err.to_string().contains("next tuesday"));

        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("32.01.2025").is_err());
    }
}

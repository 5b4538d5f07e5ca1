//! Configuration CLI commands
//!
//! `config show` prints paths and current settings; `config set` updates one
//! setting and persists the file. Neither needs a login, so the locale can
//! be switched before the first registration.

use clap::Subcommand;

use crate::config::{MonityPaths, Settings};
use crate::error::{MonityError, MonityResult};
use crate::models::{Locale, ReportPeriod};

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,

    /// Change one setting
    ///
    /// Keys: locale, currency-symbol, default-period, session-timeout,
    /// recent-expenses.
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &MonityPaths,
    mut settings: Settings,
    cmd: ConfigCommands,
) -> MonityResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Monity configuration");
            println!("  Base directory: {}", paths.base_dir().display());
            println!("  Data directory: {}", paths.data_dir().display());
            println!("  Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  locale:          {}", settings.locale);
            println!("  currency-symbol: {}", settings.currency_symbol);
            println!("  default-period:  {}", settings.default_period);
            println!(
                "  session-timeout: {} min",
                settings.session_timeout_minutes
            );
            println!("  recent-expenses: {}", settings.recent_expense_count);
        }

        ConfigCommands::Set { key, value } => {
            match key.replace('_', "-").as_str() {
                "locale" => {
                    settings.locale = value.parse::<Locale>().map_err(MonityError::InvalidInput)?;
                }
                "currency-symbol" => {
                    let symbol = value.trim();
                    if symbol.is_empty() {
                        return Err(MonityError::MissingValue("currency-symbol".into()));
                    }
                    settings.currency_symbol = symbol.to_string();
                }
                "default-period" => {
                    settings.default_period = value
                        .parse::<ReportPeriod>()
                        .map_err(|e| MonityError::InvalidInput(e.to_string()))?;
                }
                "session-timeout" => {
                    let minutes: u32 = value.parse().map_err(|_| {
                        MonityError::InvalidInput(format!(
                            "Invalid session timeout '{}' (expected minutes)",
                            value
                        ))
                    })?;
                    if minutes == 0 {
                        return Err(MonityError::InvalidInput(
                            "Session timeout must be at least 1 minute".into(),
                        ));
                    }
                    settings.session_timeout_minutes = minutes;
                }
                "recent-expenses" => {
                    settings.recent_expense_count = value.parse().map_err(|_| {
                        MonityError::InvalidInput(format!(
                            "Invalid count '{}' (expected a number)",
                            value
                        ))
                    })?;
                }
                other => {
                    return Err(MonityError::InvalidInput(format!(
                        "Unknown setting '{}'. Keys: locale, currency-symbol, \
                         default-period, session-timeout, recent-expenses",
                        other
                    )));
                }
            }

            settings.save(paths)?;
            println!("Saved {} = {}", key.replace('_', "-"), value);
        }
    }

    Ok(())
}

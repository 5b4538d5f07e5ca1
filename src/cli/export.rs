//! Export CLI command

use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::auth::AuthService;
use crate::config::Settings;
use crate::error::{MonityError, MonityResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Machine-readable full export
    Json,
    /// Human-readable full export
    Yaml,
    /// Expense rows only, for spreadsheets
    Csv,
}

/// Handle `monity export`. Requires a logged-in user; only that user's
/// expenses leave the store.
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> MonityResult<()> {
    let user = AuthService::new(storage, settings).current_user()?;

    let file = File::create(&output).map_err(|e| {
        MonityError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => {
            export_full_json(storage, &user, &mut writer, pretty)?;
            println!("Exported your data to: {}", output.display());
        }
        ExportFormat::Yaml => {
            export_full_yaml(storage, &user, &mut writer)?;
            println!("Exported your data to: {}", output.display());
        }
        ExportFormat::Csv => {
            export_expenses_csv(storage, &user, &mut writer)?;
            let count = storage.expenses.get_by_user(user.id)?.len();
            println!("Exported {} expenses to: {}", count, output.display());
            println!("Note: CSV covers expenses only. Use JSON or YAML for a full export.");
        }
    }

    Ok(())
}

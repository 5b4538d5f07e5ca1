//! Audit log CLI command

use crate::auth::AuthService;
use crate::config::Settings;
use crate::error::MonityResult;
use crate::storage::Storage;

/// Handle `monity audit`. Shows the most recent changes, oldest first.
pub fn handle_audit_command(
    storage: &Storage,
    settings: &Settings,
    limit: usize,
) -> MonityResult<()> {
    AuthService::new(storage, settings).current_user()?;

    let logger = storage.audit();
    let total = logger.entry_count()?;
    if total == 0 {
        println!("Audit log is empty.");
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;

    println!("Showing {} of {} changes:", entries.len(), total);
    println!();
    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

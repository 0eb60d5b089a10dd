//! Audit log command

use crate::error::FarmResult;
use crate::storage::Storage;

/// Print the most recent audit entries, newest last
pub fn handle_audit_command(storage: &Storage, limit: usize) -> FarmResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

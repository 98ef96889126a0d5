//! Audit history CLI command

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    limit: usize,
    kind: Option<EntityType>,
) -> ExpenseResult<()> {
    let entries = storage.audit().recent(limit, kind)?;

    if entries.is_empty() {
        match kind {
            Some(kind) => println!("No {} history recorded yet.", kind),
            None => println!("No history recorded yet."),
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.summary(&settings.currency_symbol));
    }

    Ok(())
}

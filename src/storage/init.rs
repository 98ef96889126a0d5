//! Storage initialization
//!
//! Handles first-run setup: directories, an empty expense file and the
//! default settings.

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing data is never overwritten, so running this twice is harmless.
pub fn initialize_storage(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        write_json_atomic(
            paths.expenses_file(),
            &serde_json::json!({ "expenses": [] }),
        )?;
    }

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ExpensePaths) -> bool {
    !paths.settings_file().exists()
}

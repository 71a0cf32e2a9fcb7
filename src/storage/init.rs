//! Storage initialization
//!
//! Handles first-run setup: directories, settings file and an empty daily table.

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;

use super::tables::create_table;

/// Initialize storage for a fresh installation
///
/// Creates the data directory, writes the settings file if missing and creates
/// an empty daily table. Existing files are never overwritten. The monthly
/// table is read-only and is left for the user to provide.
pub fn initialize_storage(paths: &ExpensePaths, settings: &Settings) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    create_table(&settings.daily_source(paths))?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ExpensePaths) -> bool {
    !paths.is_initialized()
}

//! Storage layer for the expense tracker
//!
//! Provides CSV table storage with atomic writes, the audit log, and
//! automatic directory creation.

pub mod file_io;
pub mod init;
pub mod tables;

pub use file_io::{write_atomic, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use tables::{append_record, create_table, load_table};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::models::{ExpenseRecord, TableSource};

/// Main storage coordinator: the two named tables and the audit log
pub struct Storage {
    paths: ExpensePaths,
    monthly: TableSource,
    daily: TableSource,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance from the configured settings
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            monthly: settings.monthly_source(&paths),
            daily: settings.daily_source(&paths),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: settings.audit_enabled,
            paths,
        })
    }

    /// Point the monthly table at another file
    pub fn with_monthly(mut self, source: TableSource) -> Self {
        self.monthly = source;
        self
    }

    /// Point the daily table at another file
    pub fn with_daily(mut self, source: TableSource) -> Self {
        self.daily = source;
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// The read-only monthly table
    pub fn monthly(&self) -> &TableSource {
        &self.monthly
    }

    /// The daily table new expenses are appended to
    pub fn daily(&self) -> &TableSource {
        &self.daily
    }

    /// Both tables, monthly first
    pub fn sources(&self) -> Vec<TableSource> {
        vec![self.monthly.clone(), self.daily.clone()]
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record an appended expense in the audit log (no-op when disabled)
    pub fn log_append(&self, table: &str, record: &ExpenseRecord) -> Result<(), ExpenseError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::append(table, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage(settings: &Settings) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, settings).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage(&Settings::default());

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.monthly().name, "monthly");
        assert_eq!(storage.daily().name, "daily");
        assert_eq!(storage.sources().len(), 2);
    }

    #[test]
    fn test_table_overrides() {
        let (temp_dir, storage) = create_test_storage(&Settings::default());
        let custom = TableSource::new("daily", temp_dir.path().join("custom.csv"));

        let storage = storage.with_daily(custom.clone());
        assert_eq!(storage.daily(), &custom);
    }

    #[test]
    fn test_log_append_respects_setting() {
        let record = ExpenseRecord::new("Food", Money::from_cents(100), "2024-01-01");

        let (_temp, storage) = create_test_storage(&Settings::default());
        storage.log_append("daily", &record).unwrap();
        assert_eq!(storage.audit().entry_count().unwrap(), 1);

        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let (_temp, storage) = create_test_storage(&settings);
        storage.log_append("daily", &record).unwrap();
        assert_eq!(storage.audit().entry_count().unwrap(), 0);
    }
}

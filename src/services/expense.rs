//! Expense service
//!
//! Ties the loader, aggregator and appender to the configured tables and the
//! audit log.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, ExpenseTable, TableSource};
use crate::storage::tables::load_table;
use crate::storage::Storage;

use super::aggregate::{aggregate, ExpenseSummary};
use super::append::append_expense;

/// Tables loaded for one summary
#[derive(Debug, Clone, Default)]
pub struct LoadedTables {
    pub tables: Vec<ExpenseTable>,
    /// Sources that did not exist and were counted as empty
    pub missing: Vec<TableSource>,
}

impl LoadedTables {
    pub fn summary(&self) -> ExpenseSummary {
        aggregate(&self.tables)
    }
}

/// Outcome of adding an expense
#[derive(Debug)]
pub struct AddedExpense {
    pub record: ExpenseRecord,
    /// Set when the row was saved but the audit log could not be written
    pub audit_error: Option<ExpenseError>,
}

/// Service for loading, summarising and appending expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load a single table
    pub fn load(&self, source: &TableSource) -> ExpenseResult<ExpenseTable> {
        load_table(source)
    }

    /// Load several tables for aggregation
    ///
    /// With exactly one source an absent table is an error. With more than
    /// one, absent tables are treated as empty and listed in `missing`.
    /// Any other failure aborts the load.
    pub fn load_many(&self, sources: &[TableSource]) -> ExpenseResult<LoadedTables> {
        if let [source] = sources {
            return Ok(LoadedTables {
                tables: vec![self.load(source)?],
                missing: Vec::new(),
            });
        }

        let mut loaded = LoadedTables::default();
        for source in sources {
            match self.load(source) {
                Ok(table) => loaded.tables.push(table),
                Err(e) if e.is_absent() => loaded.missing.push(source.clone()),
                Err(e) => return Err(e),
            }
        }
        Ok(loaded)
    }

    /// Validate and append an expense to the daily table, then audit it
    ///
    /// Once the row is saved the call succeeds; an audit log failure is
    /// returned in [`AddedExpense::audit_error`] instead.
    pub fn add_expense(
        &self,
        category: &str,
        amount_text: &str,
        date: &str,
    ) -> ExpenseResult<AddedExpense> {
        let daily = self.storage.daily();
        let record = append_expense(category, amount_text, date, daily)?;
        let audit_error = self.storage.log_append(&daily.name, &record).err();
        Ok(AddedExpense {
            record,
            audit_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn write(source: &TableSource, contents: &str) {
        std::fs::write(source.path(), contents).unwrap();
    }

    #[test]
    fn test_single_missing_table_is_error() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .load_many(std::slice::from_ref(storage.monthly()))
            .unwrap_err();
        assert!(err.is_absent());
    }

    #[test]
    fn test_missing_table_counts_as_empty_when_combined() {
        let (_temp, storage) = create_test_storage();
        write(
            storage.monthly(),
            "Category,Amount,Date\nRent,1000,2024-01-01\n",
        );
        let service = ExpenseService::new(&storage);

        let loaded = service.load_many(&storage.sources()).unwrap();
        assert_eq!(loaded.tables.len(), 1);
        assert_eq!(loaded.missing, vec![storage.daily().clone()]);
        assert_eq!(loaded.summary().grand_total, Money::from_cents(100000));
    }

    #[test]
    fn test_no_sources() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let summary = service.load_many(&[]).unwrap().summary();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_malformed_table_aborts_combined_load() {
        let (_temp, storage) = create_test_storage();
        write(storage.monthly(), "What,Ever\n");
        let service = ExpenseService::new(&storage);

        assert!(service.load_many(&storage.sources()).is_err());
    }

    #[test]
    fn test_add_expense_and_resummarize() {
        let (_temp, storage) = create_test_storage();
        write(
            storage.monthly(),
            "Category,Amount,Date\nFood,200,2024-01-01\nRent,1000,2024-01-01\n",
        );
        let service = ExpenseService::new(&storage);

        let before = service.load_many(&storage.sources()).unwrap().summary();
        let added = service.add_expense("Food", "12.50", "2024-01-15").unwrap();
        assert!(added.audit_error.is_none());
        let after = service.load_many(&storage.sources()).unwrap().summary();

        assert_eq!(before.total_for("Food"), Money::from_cents(20000));
        assert_eq!(after.total_for("Food"), Money::from_cents(21250));
        assert_eq!(after.grand_total, Money::from_cents(121250));

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].table, "daily");
        assert_eq!(entries[0].record.amount, Money::from_cents(1250));
    }

    #[test]
    fn test_audit_failure_does_not_fail_saved_expense() {
        let (_temp, storage) = create_test_storage();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let service = ExpenseService::new(&storage);

        let added = service.add_expense("Food", "12.50", "2024-01-15").unwrap();
        assert!(added.audit_error.is_some());
        assert_eq!(added.record.amount, Money::from_cents(1250));

        let table = service.load(storage.daily()).unwrap();
        assert_eq!(table.records, vec![added.record]);
    }

    #[test]
    fn test_rejected_expense_is_not_audited() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.add_expense("Food", "twelve", "2024-01-15").is_err());
        assert_eq!(storage.audit().entry_count().unwrap(), 0);
        assert!(!storage.daily().path().exists());
    }
}

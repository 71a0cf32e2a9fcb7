//! Expense records and tables
//!
//! An expense table is the in-memory image of one CSV file. Records are
//! immutable once read; the only way to add one is the record appender.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Column headers used when a table is created from scratch
pub const TABLE_HEADERS: [&str; 3] = ["Category", "Amount", "Date"];

/// A single expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Spending category (never empty)
    pub category: String,
    /// Amount spent
    pub amount: Money,
    /// Date as written in the table, conventionally YYYY-MM-DD
    pub date: String,
}

impl ExpenseRecord {
    pub fn new(category: impl Into<String>, amount: Money, date: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            date: date.into(),
        }
    }

    /// One-line description with the amount in the given currency symbol
    pub fn format_with_symbol(&self, currency_symbol: &str) -> String {
        format!(
            "{} {} ({})",
            self.date,
            self.category,
            self.amount.format_grouped(currency_symbol)
        )
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Identifies a table: a short display name plus the file backing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSource {
    pub name: String,
    pub path: PathBuf,
}

impl TableSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}

/// A data row the loader could not turn into a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    pub reason: String,
}

/// All records read from one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseTable {
    pub source: TableSource,
    pub records: Vec<ExpenseRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRow>,
}

impl ExpenseTable {
    /// Create an empty table for a source
    pub fn empty(source: TableSource) -> Self {
        Self {
            source,
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Create a table from records (no skipped rows)
    pub fn with_records(source: TableSource, records: Vec<ExpenseRecord>) -> Self {
        Self {
            source,
            records,
            skipped: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every record's amount
    pub fn total(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }
}

//! Audit entry data structures
//!
//! Each entry records one expense appended to a table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ExpenseRecord;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A record was appended to a table
    Append,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Append => write!(f, "APPEND"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Name of the table written to
    pub table: String,

    /// The record as persisted
    pub record: ExpenseRecord,
}

impl AuditEntry {
    /// Create a new audit entry for an appended record
    pub fn append(table: impl Into<String>, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Append,
            table: table.into(),
            record: record.clone(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self, currency_symbol: &str) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.table,
            self.record.format_with_symbol(currency_symbol)
        )
    }
}

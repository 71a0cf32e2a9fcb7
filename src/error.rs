//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Input rejected by the record appender
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The amount text is not a finite number
    #[error("Amount must be a valid number, got '{0}'")]
    InvalidAmount(String),
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// The expense table does not exist
    #[error("Expense table '{name}' not found at {}", .path.display())]
    AbsentTable { name: String, path: PathBuf },

    /// The table exists but its header cannot be used
    #[error("Expense table {} is malformed: {reason}", .path.display())]
    MalformedTable { path: PathBuf, reason: String },

    /// User input rejected before anything was written
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Writing a table failed
    #[error("Failed to persist {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create an "absent table" error
    pub fn absent_table(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::AbsentTable {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a persistence error for the given path
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Check if this is an "absent table" error
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::AbsentTable { .. })
    }

}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

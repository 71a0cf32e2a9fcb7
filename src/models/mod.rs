//! Core data models for the expense tracker
//!
//! Expense records, the tables that hold them, and the Money type used for
//! every amount.

pub mod expense;
pub mod money;

pub use expense::{ExpenseRecord, ExpenseTable, SkippedRow, TableSource, TABLE_HEADERS};
pub use money::{Money, MoneyParseError};

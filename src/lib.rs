//! Expense Tracker - CSV-backed expense tracking
//!
//! This library reads expense records from CSV tables, aggregates them into a
//! grand total and per-category totals, and appends new expenses to a table
//! after validating them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, tables and the Money type
//! - `storage`: CSV table storage with atomic writes
//! - `services`: Loading, aggregation and the record appender
//! - `audit`: Audit log of appended expenses
//! - `reports`: Expense summary report
//! - `export`: CSV, JSON and YAML export of reports
//! - `display`: Terminal formatting and bar charts
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::TableSource;
//! use expense_tracker::services::{aggregate, append_expense};
//! use expense_tracker::storage::load_table;
//!
//! let daily = TableSource::new("daily", "daily_expenses.csv");
//! append_expense("Food", "12.50", "2024-01-01", &daily)?;
//!
//! let summary = aggregate(&[load_table(&daily)?]);
//! println!("Total: {}", summary.grand_total);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult, ValidationError};

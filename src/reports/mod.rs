//! Reports
//!
//! Summaries built from the loaded expense tables.

pub mod summary;

pub use summary::{CategoryLine, ExpenseReport, TableSkip};

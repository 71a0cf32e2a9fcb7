//! Business logic layer
//!
//! - `aggregate`: grand and per-category totals over any number of tables
//! - `append`: input validation and the record appender
//! - `expense`: the service the CLI talks to

pub mod aggregate;
pub mod append;
pub mod expense;

pub use aggregate::{aggregate, CategoryTotal, ExpenseSummary};
pub use append::{append_expense, validate_expense};
pub use expense::{AddedExpense, ExpenseService, LoadedTables};

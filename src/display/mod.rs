//! Display formatting for terminal output
//!
//! Provides utilities for formatting expense tables and totals for the
//! terminal, including the category bar chart.

pub mod chart;
pub mod expense;
pub mod format;

pub use chart::{format_bar, format_bar_chart};
pub use expense::format_table;

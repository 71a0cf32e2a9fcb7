//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod log;
pub mod summary;

pub use expense::{handle_add_command, handle_list_command, AddArgs, ListArgs, TableChoice};
pub use log::{handle_log_command, LogArgs};
pub use summary::{handle_summary_command, SummaryArgs};

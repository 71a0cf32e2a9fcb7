//! Audit logging for the expense tracker
//!
//! Records every appended expense in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single audit log entry with timestamp, operation, table
//!   name and the record written.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::append("daily", &record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

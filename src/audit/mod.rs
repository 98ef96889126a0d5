//! Audit trail for the expense tracker
//!
//! Every expense added or deleted and every budget change is appended to
//! `audit.log` once the change itself has been saved. `expense history`
//! reads it back.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.append(&AuditEntry::expense_added(&expense))?;
//!
//! for entry in logger.recent(10, Some(EntityType::Expense))? {
//!     println!("{}", entry.summary("$"));
//! }
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Change, EntityType, ExpenseSnapshot};
pub use logger::AuditLogger;

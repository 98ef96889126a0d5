//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes, automatic directory
//! creation, the audit trail, and change notifications for the UI.

pub mod events;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use events::{StoreEvent, StoreEvents};
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_bytes_atomic, write_json_atomic};
pub use init::initialize_storage;

use std::sync::{Mutex, PoisonError};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub events: StoreEvents,
    audit: AuditLogger,
    audit_warning: Mutex<Option<String>>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            events: StoreEvents::new(),
            audit: AuditLogger::new(paths.audit_log()),
            audit_warning: Mutex::new(None),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Append a committed change to the audit log
    ///
    /// Only called after the change is saved, so a failure here cannot undo
    /// it. The failure is kept for [`Storage::take_audit_warning`] instead of
    /// being returned.
    pub fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.append(&entry) {
            let warning = format!(
                "{} was saved but not written to the audit log: {}",
                entry.describe(""),
                e
            );
            *self
                .audit_warning
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(warning);
        }
    }

    /// Take the last audit failure, if any, clearing it
    pub fn take_audit_warning(&self) -> Option<String> {
        self.audit_warning
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

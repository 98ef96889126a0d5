//! Append-only audit log file
//!
//! Entries are stored as JSON lines in `audit.log`.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::{AuditEntry, EntityType};

/// Reads and appends entries of the audit log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    ///
    /// The line is serialized up front and written with a single call, so a
    /// concurrent reader never sees half an entry.
    pub fn append(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut line = serde_json::to_vec(entry)
            .map_err(|e| ExpenseError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push(b'\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(&line))
            .map_err(|e| {
                ExpenseError::Io(format!(
                    "Failed to append to {}: {}",
                    self.log_path.display(),
                    e
                ))
            })
    }

    /// Every entry in the log, oldest first
    ///
    /// A missing log reads as empty.
    pub fn entries(&self) -> ExpenseResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ExpenseError::Io(format!(
                    "Failed to open {}: {}",
                    self.log_path.display(),
                    e
                )))
            }
        };

        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>()
            .map(|entry| {
                entry.map_err(|e| {
                    ExpenseError::Json(format!(
                        "Corrupt audit log {} at line {}: {}",
                        self.log_path.display(),
                        e.line(),
                        e
                    ))
                })
            })
            .collect()
    }

    /// The newest `limit` entries, oldest first, optionally limited to one
    /// kind of record
    pub fn recent(&self, limit: usize, kind: Option<EntityType>) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.entries()?;
        if let Some(kind) = kind {
            entries.retain(|entry| entry.entity_type() == kind);
        }

        let skip = entries.len().saturating_sub(limit);
        Ok(entries.split_off(skip))
    }

    pub fn len(&self) -> ExpenseResult<usize> {
        Ok(self.entries()?.len())
    }

    pub fn is_empty(&self) -> ExpenseResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use std::fs;
    use tempfile::TempDir;

    fn logger_in(temp_dir: &TempDir) -> AuditLogger {
        AuditLogger::new(temp_dir.path().join("audit.log"))
    }

    #[test]
    fn test_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        assert!(logger.entries().unwrap().is_empty());
        assert!(logger.is_empty().unwrap());
    }

    #[test]
    fn test_append_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        let expense = Expense::new(Money::from_cents(450)).with_name("Lunch");

        logger.append(&AuditEntry::expense_added(&expense)).unwrap();
        logger.append(&AuditEntry::expense_deleted(&expense)).unwrap();

        let entries = logger.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].describe("$").starts_with("added"));
        assert!(entries[1].describe("$").starts_with("deleted"));

        // Reopening the file sees the same entries
        assert_eq!(logger_in(&temp_dir).len().unwrap(), 2);
    }

    #[test]
    fn test_recent_keeps_newest_and_filters_by_kind() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        for cents in [100, 200, 300] {
            let expense = Expense::new(Money::from_cents(cents));
            logger.append(&AuditEntry::expense_added(&expense)).unwrap();
        }
        logger
            .append(&AuditEntry::budget_changed(Money::zero(), Money::from_cents(900)))
            .unwrap();

        let last_two = logger.recent(2, None).unwrap();
        assert_eq!(last_two.len(), 2);
        assert!(last_two[0].describe("$").contains("$3.00"));
        assert_eq!(last_two[1].entity_type(), EntityType::Budget);

        let expenses = logger.recent(10, Some(EntityType::Expense)).unwrap();
        assert_eq!(expenses.len(), 3);
        assert!(expenses.iter().all(|e| e.entity_type() == EntityType::Expense));

        assert_eq!(logger.recent(10, Some(EntityType::Budget)).unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        logger
            .append(&AuditEntry::budget_changed(Money::zero(), Money::from_cents(1)))
            .unwrap();

        let mut contents = fs::read_to_string(temp_dir.path().join("audit.log")).unwrap();
        contents.push_str("{not json\n");
        fs::write(temp_dir.path().join("audit.log"), contents).unwrap();

        let err = logger.entries().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_append_fails_when_log_path_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        fs::create_dir(temp_dir.path().join("audit.log")).unwrap();

        let entry = AuditEntry::budget_changed(Money::zero(), Money::from_cents(1));
        assert!(matches!(logger.append(&entry), Err(ExpenseError::Io(_))));
    }
}

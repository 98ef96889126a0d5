//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. This is the record
//! store: insert, delete by identity and full scan.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load expenses from disk, replacing everything held in memory
    ///
    /// On a read or parse failure the in-memory state is left untouched.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let expenses = self.get_all()?;
        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses (full scan)
    ///
    /// Ordered newest first by date, then by creation time, so that saves and
    /// exports are deterministic for a given store content.
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then(b.created_at.cmp(&a.created_at))
                .then(a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(expenses)
    }

    /// Insert a new expense
    ///
    /// Identities are never reused, so inserting an ID that already exists is
    /// an error rather than an overwrite.
    pub fn insert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.contains_key(&expense.id) {
            return Err(ExpenseError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id))
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let expense = Expense::new(Money::from_cents(350)).with_name("Coffee");
        let id = expense.id;

        repo.insert(expense).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 350);
        assert_eq!(retrieved.display_name(), "Coffee");
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        let expense = Expense::new(Money::from_cents(350));

        repo.insert(expense.clone()).unwrap();
        let err = repo.insert(expense).unwrap_err();
        assert!(matches!(err, ExpenseError::Duplicate { .. }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let expense = Expense::new(Money::from_cents(1250)).with_category(Category::Transport);
        let id = expense.id;

        repo.insert(expense).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 1250);
        assert_eq!(retrieved.category, Category::Transport);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let expense = Expense::new(Money::from_cents(500));
        let id = expense.id;

        repo.insert(expense).unwrap();
        let removed = repo.delete(id).unwrap();
        assert_eq!(removed.map(|e| e.id), Some(id));
        assert_eq!(repo.count().unwrap(), 0);

        assert!(repo.delete(id).unwrap().is_none());
    }

    #[test]
    fn test_get_all_is_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        let older = Expense::new(Money::from_cents(100))
            .with_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let newer = Expense::new(Money::from_cents(200))
            .with_date(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());

        repo.insert(older.clone()).unwrap();
        repo.insert(newer.clone()).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].id, newer.id);
        assert_eq!(all[1].id, older.id);
    }

    #[test]
    fn test_load_picks_up_external_changes() {
        let (temp_dir, repo) = create_test_repo();
        repo.insert(Expense::new(Money::from_cents(100))).unwrap();
        repo.save().unwrap();

        // Another handle appends a record behind the first one's back
        let other = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        other.load().unwrap();
        other.insert(Expense::new(Money::from_cents(900))).unwrap();
        other.save().unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }
}

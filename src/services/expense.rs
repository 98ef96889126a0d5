//! Expense service
//!
//! Business logic for recording, listing, deleting and exporting expenses.
//! Every read that feeds a total or a list goes back to disk first, so
//! aggregates always reflect the full persisted record set.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{self, ExpenseExport, CSV_EXPORT_FILENAME, JSON_EXPORT_FILENAME};
use crate::models::{Category, Expense, ExpenseId, Money, ViewCriteria};
use crate::reports::{self, SpendingBreakdown};
use crate::storage::{StoreEvent, Storage};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new expense
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub name: Option<String>,
    /// Raw amount as typed by the user
    pub amount: String,
    pub category: Option<Category>,
    pub date: Option<DateTime<Utc>>,
}

/// Parse a `YYYY-MM-DD` date as midnight UTC
pub fn parse_expense_date(s: &str) -> ExpenseResult<DateTime<Utc>> {
    let s = s.trim();
    let invalid = || ExpenseError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s));

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(invalid)
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// The amount must parse, be non-negative and not exceed
    /// [`Expense::MAX_AMOUNT`]. Nothing is persisted when validation fails.
    /// The store is reloaded first so records saved by another process since
    /// startup are kept.
    pub fn add_expense(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let amount = Money::parse(&input.amount).map_err(|e| {
            ExpenseError::Validation(format!("Invalid amount '{}': {}", input.amount.trim(), e))
        })?;

        let mut expense = Expense::new(amount);
        if let Some(name) = input.name {
            expense = expense.with_name(name);
        }
        if let Some(category) = input.category {
            expense = expense.with_category(category);
        }
        if let Some(date) = input.date {
            expense = expense.with_date(date);
        }

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.load()?;
        self.storage.expenses.insert(expense.clone())?;
        if let Err(e) = self.storage.expenses.save() {
            // Keep memory consistent with what is on disk
            self.storage.expenses.delete(expense.id)?;
            return Err(e);
        }

        self.storage.events.publish(StoreEvent::ExpenseAdded(expense.id));
        self.storage.record(AuditEntry::expense_added(&expense));

        Ok(expense)
    }

    /// Delete an expense permanently
    pub fn delete_expense(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.storage.expenses.load()?;
        let expense = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.short()))?;

        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.insert(expense.clone())?;
            return Err(e);
        }

        self.storage.events.publish(StoreEvent::ExpenseDeleted(id));
        self.storage.record(AuditEntry::expense_deleted(&expense));

        Ok(expense)
    }

    /// Find an expense by full UUID, `exp-` short form or hex prefix
    ///
    /// An ambiguous prefix is reported as a validation error.
    pub fn find(&self, identifier: &str) -> ExpenseResult<Expense> {
        let identifier = identifier.trim();
        let mut matches = self
            .all()?
            .into_iter()
            .filter(|e| e.id.matches(identifier));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "Identifier '{}' matches more than one expense",
                identifier
            ))),
            (None, _) => Err(ExpenseError::expense_not_found(identifier)),
        }
    }

    /// Every stored expense, freshly loaded, in store scan order
    pub fn all(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.load()?;
        self.storage.expenses.get_all()
    }

    /// The filtered, sorted list for the given view criteria
    pub fn list_view(&self, criteria: &ViewCriteria) -> ExpenseResult<Vec<Expense>> {
        let expenses = self.all()?;
        Ok(reports::list_view(&expenses, criteria, Utc::now()))
    }

    /// Aggregate spend over the full record set
    ///
    /// Always recomputed from a fresh scan; no running total is kept.
    pub fn total_spent(&self) -> ExpenseResult<Money> {
        let expenses = self.all()?;
        Ok(reports::total_spent(&expenses))
    }

    /// Per-category spending
    pub fn spending_breakdown(&self) -> ExpenseResult<SpendingBreakdown> {
        let expenses = self.all()?;
        Ok(SpendingBreakdown::from_expenses(&expenses))
    }

    /// Render the full record set as CSV
    pub fn export_csv(&self) -> ExpenseResult<String> {
        let expenses = self.all()?;
        export::format_expenses_csv(&expenses)
    }

    /// Write the CSV export into `dir`
    pub fn export_csv_to(&self, dir: &Path) -> ExpenseResult<PathBuf> {
        let document = self.export_csv()?;
        export::write_export(dir, CSV_EXPORT_FILENAME, document.as_bytes())
    }

    /// Write the full JSON export (budget plus records) into `dir`
    pub fn export_json_to(&self, dir: &Path, pretty: bool) -> ExpenseResult<PathBuf> {
        let settings = Settings::load_or_create(self.storage.paths())?;
        let data = ExpenseExport::new(self.all()?, settings.monthly_budget);
        let mut buffer = Vec::new();
        export::export_full_json(&data, &mut buffer, pretty)?;
        export::write_export(dir, JSON_EXPORT_FILENAME, &buffer)
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Change;
    use crate::config::paths::ExpensePaths;
    use crate::models::{CategoryFilter, SortMode};
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn ids_of(expenses: &[Expense]) -> Vec<ExpenseId> {
        expenses.iter().map(|e| e.id).collect()
    }

    fn input(name: &str, amount: &str, category: Category) -> CreateExpenseInput {
        CreateExpenseInput {
            name: Some(name.to_string()),
            amount: amount.to_string(),
            category: Some(category),
            date: None,
        }
    }

    #[test]
    fn test_add_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.add_expense(input("Coffee", "3.50", Category::Food)).unwrap();

        assert_eq!(expense.name.as_deref(), Some("Coffee"));
        assert_eq!(expense.amount.cents(), 350);
        assert!(expense.date.is_some());
        assert_eq!(service.count().unwrap(), 1);
        assert!(storage.paths().expenses_file().exists());
    }

    #[test]
    fn test_add_expense_defaults() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add_expense(CreateExpenseInput {
                amount: "12".into(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.display_name(), "Unknown");
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .add_expense(input("Lunch", "not-a-number", Category::Food))
            .unwrap_err();
        assert!(err.is_validation());

        let err = service.add_expense(input("Lunch", "-4", Category::Food)).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(service.total_spent().unwrap(), Money::zero());
        assert!(service.list_view(&ViewCriteria::default()).unwrap().is_empty());
        assert!(storage.audit().is_empty().unwrap());
    }

    #[test]
    fn test_add_rejects_amount_over_cap() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .add_expense(input("Yacht", "92233720368547758.07", Category::Other))
            .unwrap_err();
        assert!(err.is_validation());

        service.add_expense(input("Car", "1000000000.00", Category::Transport)).unwrap();
        service.add_expense(input("House", "1000000000.00", Category::Other)).unwrap();
        assert_eq!(service.total_spent().unwrap().cents(), 200_000_000_000);
    }

    #[test]
    fn test_delete_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let keep = service.add_expense(input("Bus", "2.75", Category::Transport)).unwrap();
        let gone = service.add_expense(input("Movie", "12.50", Category::Entertainment)).unwrap();
        assert_eq!(service.total_spent().unwrap().cents(), 1525);

        let deleted = service.delete_expense(gone.id).unwrap();
        assert_eq!(deleted.id, gone.id);

        let view = service.list_view(&ViewCriteria::default()).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, keep.id);
        assert_eq!(service.total_spent().unwrap().cents(), 275);

        let err = service.delete_expense(gone.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_mutations_publish_events() {
        let (_temp_dir, storage) = create_test_storage();
        let receiver = storage.events.subscribe();
        let service = ExpenseService::new(&storage);

        let expense = service.add_expense(input("Tea", "2", Category::Food)).unwrap();
        service.delete_expense(expense.id).unwrap();

        assert_eq!(receiver.try_recv().unwrap(), StoreEvent::ExpenseAdded(expense.id));
        assert_eq!(receiver.try_recv().unwrap(), StoreEvent::ExpenseDeleted(expense.id));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.add_expense(input("Tea", "2", Category::Food)).unwrap();
        service.delete_expense(expense.id).unwrap();

        let entries = storage.audit().entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].change, Change::ExpenseAdded((&expense).into()));
        assert_eq!(entries[1].change, Change::ExpenseDeleted((&expense).into()));
    }

    #[test]
    fn test_failed_save_rolls_back_insert() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        // A directory where the temp file goes makes the write fail
        let mut temp_file = storage.paths().expenses_file().into_os_string();
        temp_file.push(".tmp");
        fs::create_dir_all(&temp_file).unwrap();

        let err = service.add_expense(input("Tea", "2", Category::Food)).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert!(storage.audit().is_empty().unwrap());
    }

    #[test]
    fn test_add_succeeds_when_audit_log_unwritable() {
        let (_temp_dir, storage) = create_test_storage();
        fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let service = ExpenseService::new(&storage);

        let expense = service.add_expense(input("Tea", "2", Category::Food)).unwrap();

        assert_eq!(service.count().unwrap(), 1);
        assert_eq!(service.all().unwrap()[0].id, expense.id);
        let warning = storage.take_audit_warning().unwrap();
        assert!(warning.contains(&expense.id.short()));

        service.delete_expense(expense.id).unwrap();
        assert_eq!(service.count().unwrap(), 0);
        assert!(storage.take_audit_warning().is_some());
    }

    #[test]
    fn test_add_keeps_records_saved_by_another_process() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let other = Storage::new(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let theirs = ExpenseService::new(&other)
            .add_expense(input("Bus", "2.75", Category::Transport))
            .unwrap();

        let ours = service.add_expense(input("Tea", "2", Category::Food)).unwrap();

        let stored = ids_of(&service.all().unwrap());
        assert_eq!(stored.len(), 2);
        assert!(stored.contains(&theirs.id));
        assert!(stored.contains(&ours.id));
    }

    #[test]
    fn test_delete_sees_records_saved_by_another_process() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let other = Storage::new(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let theirs = ExpenseService::new(&other)
            .add_expense(input("Bus", "2.75", Category::Transport))
            .unwrap();

        service.delete_expense(theirs.id).unwrap();
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_list_view_filters_and_sorts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add_expense(input("Lunch", "8", Category::Food)).unwrap();
        service.add_expense(input("Dinner", "20", Category::Food)).unwrap();
        service.add_expense(input("Taxi", "15", Category::Transport)).unwrap();

        let criteria = ViewCriteria::new(
            CategoryFilter::Only(Category::Food),
            SortMode::HighestAmount,
        );
        let view = service.list_view(&criteria).unwrap();
        let names: Vec<_> = view.iter().map(|e| e.display_name()).collect();
        assert_eq!(names, vec!["Dinner", "Lunch"]);

        // The aggregate ignores the filter
        assert_eq!(service.total_spent().unwrap().cents(), 4300);
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.add_expense(input("Tea", "2", Category::Food)).unwrap();

        assert_eq!(service.find(&expense.id.short()).unwrap().id, expense.id);
        assert_eq!(service.find(&expense.id.to_string()).unwrap().id, expense.id);
        assert!(service.find("exp-zzzzzzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_export_csv_to() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service
            .add_expense(CreateExpenseInput {
                name: Some("Coffee".into()),
                amount: "3.5".into(),
                category: Some(Category::Food),
                date: Some(Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap()),
            })
            .unwrap();

        let path = service.export_csv_to(temp_dir.path()).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "Name,Amount,Category,Date\nCoffee,3.5,Food,2024-01-05\n");
    }

    #[test]
    fn test_parse_expense_date() {
        use chrono::Datelike;

        let date = parse_expense_date(" 2024-01-05 ").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 5));

        assert!(parse_expense_date("05/01/2024").unwrap_err().is_validation());
        assert!(parse_expense_date("2024-02-30").unwrap_err().is_validation());
    }

    #[test]
    fn test_export_json_to() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add_expense(input("Tea", "2", Category::Food)).unwrap();

        let path = service
            .export_json_to(temp_dir.path(), false)
            .unwrap();
        let parsed: ExpenseExport =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(parsed.metadata.expense_count, 1);
        assert_eq!(parsed.metadata.total_spent.cents(), 200);
        assert_eq!(parsed.monthly_budget.cents(), 50_000);
    }
}

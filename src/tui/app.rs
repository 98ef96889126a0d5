//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The displayed list is rebuilt from the store whenever the store changes;
//! the aggregate spend is cached until a store event or a local mutation
//! invalidates it.

use std::sync::mpsc::Receiver;

use crate::config::settings::Settings;
use crate::models::{Expense, ExpenseId, Money, ViewCriteria};
use crate::reports::{BudgetStatus, SpendingBreakdown};
use crate::services::{BudgetService, ExpenseService};
use crate::storage::{StoreEvent, Storage};

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    SetBudget,
    ConfirmDelete(ExpenseId),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Filter and sort for this session
    pub criteria: ViewCriteria,

    /// Expenses currently displayed, in view order
    pub expenses: Vec<Expense>,

    /// Selected row in the expense list
    pub selected_index: usize,

    /// Per-category totals for the sidebar
    pub breakdown: SpendingBreakdown,

    /// Monthly budget as last seen
    pub budget: Money,

    /// Aggregate spend; `None` until recomputed
    cached_total: Option<Money>,

    /// Change notifications from the store
    store_events: Receiver<StoreEvent>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add expense form state
    pub expense_form: ExpenseFormState,

    /// Budget form state
    pub budget_form: BudgetFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            criteria: ViewCriteria::default(),
            expenses: Vec::new(),
            selected_index: 0,
            breakdown: SpendingBreakdown::from_expenses(&[]),
            budget: settings.monthly_budget,
            cached_total: None,
            store_events: storage.events.subscribe(),
            status_message: None,
            expense_form: ExpenseFormState::new(),
            budget_form: BudgetFormState::new(),
        };

        match BudgetService::new(storage).get_budget() {
            Ok(budget) => app.budget = budget,
            Err(e) => app.set_status(format!("Could not read budget: {}", e)),
        }
        app.refresh();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Status for a saved change, with any audit log failure appended
    pub fn report_change(&mut self, message: String) {
        match self.storage.take_audit_warning() {
            Some(warning) => self.set_status(format!("{}. Warning: {}", message, warning)),
            None => self.set_status(message),
        }
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Rebuild the displayed list from the store
    ///
    /// On a storage error the previous list stays on screen.
    pub fn refresh(&mut self) {
        let service = ExpenseService::new(self.storage);
        match service.list_view(&self.criteria) {
            Ok(expenses) => {
                self.expenses = expenses;
                self.clamp_selection();
            }
            Err(e) => {
                self.set_status(format!("Could not load expenses: {}", e));
                return;
            }
        }

        match service.spending_breakdown() {
            Ok(breakdown) => self.breakdown = breakdown,
            Err(e) => self.set_status(format!("Could not load breakdown: {}", e)),
        }
    }

    /// Drop the cached aggregate so the next read recomputes it
    pub fn invalidate_total(&mut self) {
        self.cached_total = None;
    }

    /// Whether an aggregate is currently cached
    pub fn has_cached_total(&self) -> bool {
        self.cached_total.is_some()
    }

    /// Aggregate spend over every stored expense
    pub fn total_spent(&mut self) -> Money {
        if let Some(total) = self.cached_total {
            return total;
        }

        match ExpenseService::new(self.storage).total_spent() {
            Ok(total) => {
                self.cached_total = Some(total);
                total
            }
            Err(e) => {
                self.set_status(format!("Could not compute total: {}", e));
                Money::zero()
            }
        }
    }

    /// Spending measured against the budget
    pub fn budget_status(&mut self) -> BudgetStatus {
        BudgetStatus::evaluate(self.total_spent(), self.budget)
    }

    /// Apply every pending store event
    pub fn sync_store_events(&mut self) {
        let mut needs_refresh = false;

        while let Ok(event) = self.store_events.try_recv() {
            if event.invalidates_total() {
                self.invalidate_total();
                needs_refresh = true;
            }
            if let StoreEvent::BudgetChanged(budget) = event {
                self.budget = budget;
            }
        }

        if needs_refresh {
            self.refresh();
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => self.expense_form = ExpenseFormState::new(),
            ActiveDialog::SetBudget => self.budget_form.init(self.budget),
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The expense under the cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.selected_index)
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.expenses.len() {
            self.selected_index += 1;
        }
    }

    /// Jump to the first row
    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last row
    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.expenses.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.expenses.len() {
            self.selected_index = self.expenses.len().saturating_sub(1);
        }
    }

    /// Advance to the next category filter
    pub fn cycle_filter(&mut self) {
        self.criteria.filter = self.criteria.filter.next();
        self.selected_index = 0;
        self.refresh();
    }

    /// Advance to the next sort mode
    pub fn cycle_sort(&mut self) {
        self.criteria.sort = self.criteria.sort.next();
        self.selected_index = 0;
        self.refresh();
    }

    /// Delete an expense and update the view
    ///
    /// A failed delete leaves the list and the cached total alone.
    pub fn delete_expense(&mut self, id: ExpenseId) {
        match ExpenseService::new(self.storage).delete_expense(id) {
            Ok(expense) => {
                self.report_change(format!(
                    "Deleted '{}' ({})",
                    expense.display_name(),
                    expense.amount.format_with_symbol(&self.settings.currency_symbol)
                ));
                self.invalidate_total();
                self.refresh();
            }
            Err(e) => self.set_status(format!("Delete failed: {}", e)),
        }
    }

    /// Write the CSV export to the exports directory
    pub fn export_csv(&mut self) {
        let dir = self.storage.paths().export_dir();
        match ExpenseService::new(self.storage).export_csv_to(&dir) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display())),
            Err(e) => self.set_status(format!("Export failed: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{Category, CategoryFilter, SortMode};
    use crate::services::CreateExpenseInput;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, name: &str, amount: &str, category: Category) -> Expense {
        ExpenseService::new(storage)
            .add_expense(CreateExpenseInput {
                name: Some(name.to_string()),
                amount: amount.to_string(),
                category: Some(category),
                date: None,
            })
            .unwrap()
    }

    #[test]
    fn test_session_starts_with_default_criteria() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let app = App::new(&storage, &settings);

        assert_eq!(app.criteria.filter, CategoryFilter::All);
        assert_eq!(app.criteria.sort, SortMode::NewestFirst);
        assert!(app.expenses.is_empty());
        assert_eq!(app.budget, Money::from_cents(50_000));
    }

    #[test]
    fn test_total_is_cached_until_store_event() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        assert_eq!(app.total_spent(), Money::zero());
        assert!(app.has_cached_total());

        add(&storage, "Lunch", "8.25", Category::Food);
        app.sync_store_events();

        assert!(!app.has_cached_total());
        assert_eq!(app.total_spent().cents(), 825);
        assert_eq!(app.expenses.len(), 1);
    }

    #[test]
    fn test_budget_event_updates_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        BudgetService::new(&storage)
            .set_budget(Money::from_cents(1_000))
            .unwrap();
        app.sync_store_events();

        assert_eq!(app.budget.cents(), 1_000);
    }

    #[test]
    fn test_filter_cycle_uses_full_total() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Lunch", "10", Category::Food);
        add(&storage, "Bus", "5", Category::Transport);

        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        assert_eq!(app.expenses.len(), 2);

        app.cycle_filter();
        assert_eq!(app.criteria.filter, CategoryFilter::Only(Category::Food));
        assert_eq!(app.expenses.len(), 1);

        // The aggregate ignores the filter
        assert_eq!(app.total_spent().cents(), 1_500);
    }

    #[test]
    fn test_sort_cycle() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Small", "1", Category::Food);
        add(&storage, "Large", "100", Category::Food);

        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.cycle_sort();
        app.cycle_sort();
        assert_eq!(app.criteria.sort, SortMode::HighestAmount);
        assert_eq!(app.expenses[0].display_name(), "Large");
    }

    #[test]
    fn test_delete_clamps_selection() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "A", "1", Category::Food);
        add(&storage, "B", "2", Category::Food);

        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.move_to_bottom();
        assert_eq!(app.selected_index, 1);

        let id = app.selected_expense().unwrap().id;
        app.delete_expense(id);

        assert_eq!(app.expenses.len(), 1);
        assert_eq!(app.selected_index, 0);
        assert!(app.expenses.iter().all(|e| e.id != id));
    }

    #[test]
    fn test_failed_delete_keeps_cached_total() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "A", "1", Category::Food);

        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        assert_eq!(app.total_spent().cents(), 100);

        app.delete_expense(ExpenseId::new());

        assert!(app.has_cached_total());
        assert_eq!(app.expenses.len(), 1);
        assert!(app.status_message.as_deref().unwrap().starts_with("Delete failed"));
    }

    #[test]
    fn test_delete_reports_unwritable_audit_log() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "A", "1", Category::Food);
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();

        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        let id = app.selected_expense().unwrap().id;
        app.delete_expense(id);

        assert!(app.expenses.is_empty());
        let status = app.status_message.as_deref().unwrap();
        assert!(status.starts_with("Deleted 'A' ($1.00). Warning:"));
        assert!(status.contains("audit log"));
    }

    #[test]
    fn test_movement_bounds() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "A", "1", Category::Food);

        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.move_down();
        assert_eq!(app.selected_index, 0);
    }
}

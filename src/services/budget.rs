//! Budget service
//!
//! Reads and changes the monthly budget and evaluates spending against it.

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::reports::BudgetStatus;
use crate::services::ExpenseService;
use crate::storage::{StoreEvent, Storage};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Currently configured monthly budget
    pub fn get_budget(&self) -> ExpenseResult<Money> {
        Ok(Settings::load_or_create(self.storage.paths())?.monthly_budget)
    }

    /// Change the monthly budget
    ///
    /// Zero is accepted and evaluates as permanently over budget.
    pub fn set_budget(&self, amount: Money) -> ExpenseResult<()> {
        if amount.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Budget cannot be negative: {}",
                amount
            )));
        }

        let mut settings = Settings::load_or_create(self.storage.paths())?;
        let before = settings.monthly_budget;
        settings.monthly_budget = amount;
        settings.save(self.storage.paths())?;

        self.storage.events.publish(StoreEvent::BudgetChanged(amount));
        self.storage.record(AuditEntry::budget_changed(before, amount));

        Ok(())
    }

    /// Evaluate total spend over every record against the budget
    pub fn budget_status(&self) -> ExpenseResult<BudgetStatus> {
        let total = ExpenseService::new(self.storage).total_spent()?;
        Ok(BudgetStatus::evaluate(total, self.get_budget()?))
    }
}

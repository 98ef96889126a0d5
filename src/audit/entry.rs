//! Audit log records
//!
//! One entry per committed change to the expense store or the budget. Each
//! change carries the typed values it touched, so history can be rendered
//! without reloading the records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Expense, ExpenseId, Money};

/// What a change applied to, used to filter history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Budget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Expense => write!(f, "expense"),
            EntityType::Budget => write!(f, "budget"),
        }
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" | "expenses" => Ok(EntityType::Expense),
            "budget" => Ok(EntityType::Budget),
            other => Err(format!("unknown history kind '{}' (expected expense or budget)", other)),
        }
    }
}

/// The values an expense had when it was added or removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSnapshot {
    pub id: ExpenseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub amount: Money,
    pub category: Category,
}

impl From<&Expense> for ExpenseSnapshot {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            name: expense.name.clone(),
            amount: expense.amount,
            category: expense.category,
        }
    }
}

impl ExpenseSnapshot {
    fn describe(&self, symbol: &str) -> String {
        format!(
            "{} '{}' {} ({})",
            self.id.short(),
            self.name.as_deref().unwrap_or("Unknown"),
            self.amount.format_with_symbol(symbol),
            self.category
        )
    }
}

/// A committed change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    ExpenseAdded(ExpenseSnapshot),
    ExpenseDeleted(ExpenseSnapshot),
    BudgetChanged { from: Money, to: Money },
}

/// A single line of the audit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub change: Change,
}

impl AuditEntry {
    fn now(change: Change) -> Self {
        Self {
            timestamp: Utc::now(),
            change,
        }
    }

    pub fn expense_added(expense: &Expense) -> Self {
        Self::now(Change::ExpenseAdded(expense.into()))
    }

    pub fn expense_deleted(expense: &Expense) -> Self {
        Self::now(Change::ExpenseDeleted(expense.into()))
    }

    pub fn budget_changed(from: Money, to: Money) -> Self {
        Self::now(Change::BudgetChanged { from, to })
    }

    /// Which kind of record the change touched
    pub fn entity_type(&self) -> EntityType {
        match self.change {
            Change::ExpenseAdded(_) | Change::ExpenseDeleted(_) => EntityType::Expense,
            Change::BudgetChanged { .. } => EntityType::Budget,
        }
    }

    /// Expense the change touched, if any
    pub fn expense_id(&self) -> Option<ExpenseId> {
        match &self.change {
            Change::ExpenseAdded(snapshot) | Change::ExpenseDeleted(snapshot) => Some(snapshot.id),
            Change::BudgetChanged { .. } => None,
        }
    }

    /// One-line description of the change, without the timestamp
    pub fn describe(&self, symbol: &str) -> String {
        match &self.change {
            Change::ExpenseAdded(snapshot) => format!("added {}", snapshot.describe(symbol)),
            Change::ExpenseDeleted(snapshot) => format!("deleted {}", snapshot.describe(symbol)),
            Change::BudgetChanged { from, to } => format!(
                "budget {} -> {}",
                from.format_with_symbol(symbol),
                to.format_with_symbol(symbol)
            ),
        }
    }

    /// History line: UTC timestamp followed by the change
    pub fn summary(&self, symbol: &str) -> String {
        format!(
            "{} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.describe(symbol)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> Expense {
        Expense::new(Money::from_cents(1250))
            .with_name("Lunch")
            .with_category(Category::Food)
    }

    #[test]
    fn test_expense_entries_carry_snapshot() {
        let expense = lunch();
        let entry = AuditEntry::expense_added(&expense);

        assert_eq!(entry.entity_type(), EntityType::Expense);
        assert_eq!(entry.expense_id(), Some(expense.id));
        assert_eq!(
            entry.describe("$"),
            format!("added {} 'Lunch' $12.50 (Food)", expense.id.short())
        );
    }

    #[test]
    fn test_budget_entry() {
        let entry = AuditEntry::budget_changed(Money::from_cents(50_000), Money::from_cents(20_000));

        assert_eq!(entry.entity_type(), EntityType::Budget);
        assert_eq!(entry.expense_id(), None);
        assert_eq!(entry.describe("€"), "budget €500.00 -> €200.00");
    }

    #[test]
    fn test_unnamed_expense_describes_as_unknown() {
        let expense = Expense::new(Money::from_cents(300));
        let entry = AuditEntry::expense_deleted(&expense);

        assert!(entry.describe("$").contains("'Unknown' $3.00"));
    }

    #[test]
    fn test_json_line_shape() {
        let entry = AuditEntry::budget_changed(Money::from_cents(100), Money::from_cents(200));
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains("\"change\":\"budget_changed\""));
        assert!(!line.contains('\n'));

        let parsed: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_entity_type_from_str() {
        assert_eq!("Expenses".parse::<EntityType>(), Ok(EntityType::Expense));
        assert_eq!("budget".parse::<EntityType>(), Ok(EntityType::Budget));
        assert!("rent".parse::<EntityType>().is_err());
    }
}

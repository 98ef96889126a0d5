//! Expense model
//!
//! A single spending event. Records are immutable once created: the only
//! lifecycle transition after creation is deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Placeholder shown for expenses without a name
pub const UNNAMED_EXPENSE: &str = "Unknown";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Spending category
    #[serde(default = "Category::fallback")]
    pub category: Category,

    /// When the money was spent
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Largest amount a single expense may record ($1,000,000,000.00)
    pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

    /// Create a new expense dated now, in the default category
    pub fn new(amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            name: None,
            amount,
            category: Category::default(),
            date: Some(now),
            created_at: now,
        }
    }

    /// Set the display name; blank names are stored as absent
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the expense date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Name to display, falling back to a placeholder
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_EXPENSE)
    }

    /// Date used for ordering, substituting `now` when absent
    pub fn effective_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.date.unwrap_or(now)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.amount > Self::MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.display_name(),
            self.amount,
            self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(
                    f,
                    "Expense amount {} exceeds the maximum of {}",
                    amount,
                    Expense::MAX_AMOUNT
                )
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_expense_defaults() {
        let expense = Expense::new(Money::from_cents(350));
        assert_eq!(expense.category, Category::Food);
        assert!(expense.date.is_some());
        assert_eq!(expense.display_name(), "Unknown");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        let expense = Expense::new(Money::from_cents(350))
            .with_name("  Coffee ")
            .with_category(Category::Food)
            .with_date(date);

        assert_eq!(expense.name.as_deref(), Some("Coffee"));
        assert_eq!(expense.date, Some(date));
        assert_eq!(expense.to_string(), "Coffee $3.50 (Food)");
    }

    #[test]
    fn test_blank_name_is_absent() {
        let expense = Expense::new(Money::from_cents(100)).with_name("   ");
        assert!(expense.name.is_none());
    }

    #[test]
    fn test_negative_amount_invalid() {
        let expense = Expense::new(Money::from_cents(-100));
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(Money::from_cents(-100)))
        );
    }

    #[test]
    fn test_amount_cap() {
        assert!(Expense::new(Expense::MAX_AMOUNT).validate().is_ok());

        let over = Expense::MAX_AMOUNT + Money::from_cents(1);
        assert_eq!(
            Expense::new(over).validate(),
            Err(ExpenseValidationError::AmountTooLarge(over))
        );
    }

    #[test]
    fn test_effective_date_substitutes_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let mut expense = Expense::new(Money::from_cents(100));
        expense.date = None;
        assert_eq!(expense.effective_date(now), now);
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 1250,
            "created_at": "2024-01-05T00:00:00Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.name.is_none());
        assert!(expense.date.is_none());
        assert_eq!(expense.category, Category::Other);
        assert_eq!(expense.amount.cents(), 1250);
    }
}

//! Budget status
//!
//! Compares the aggregate spend against the monthly threshold.

use crate::models::Money;

/// Spending measured against the monthly budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    /// Total spent across every expense (unclamped)
    pub total_spent: Money,
    /// Configured monthly budget
    pub budget: Money,
    /// Spend / budget, clamped to [0.0, 1.0]
    pub progress: f64,
    /// True iff spend strictly exceeds the budget
    pub over_budget: bool,
}

impl BudgetStatus {
    /// Evaluate a total spend against a budget
    ///
    /// A budget of zero or less is a misconfiguration: it is reported as
    /// over budget with full progress instead of dividing by zero.
    pub fn evaluate(total_spent: Money, budget: Money) -> Self {
        if !budget.is_positive() {
            return Self {
                total_spent,
                budget,
                progress: 1.0,
                over_budget: true,
            };
        }

        let progress = (total_spent.cents() as f64 / budget.cents() as f64).clamp(0.0, 1.0);

        Self {
            total_spent,
            budget,
            progress,
            over_budget: total_spent > budget,
        }
    }

    /// Budget left (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.budget - self.total_spent
    }

    /// Progress as a whole percentage (0-100)
    pub fn percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i64) -> Money {
        Money::from_cents(n * 100)
    }

    #[test]
    fn test_over_budget_clamps_progress() {
        let status = BudgetStatus::evaluate(units(600), units(500));
        assert!(status.over_budget);
        assert_eq!(status.progress, 1.0);
        assert_eq!(status.total_spent, units(600));
        assert_eq!(status.remaining(), units(-100));
    }

    #[test]
    fn test_under_budget() {
        let status = BudgetStatus::evaluate(units(250), units(500));
        assert!(!status.over_budget);
        assert_eq!(status.progress, 0.5);
        assert_eq!(status.percent(), 50);
        assert_eq!(status.remaining(), units(250));
    }

    #[test]
    fn test_exactly_at_budget_is_not_over() {
        let status = BudgetStatus::evaluate(units(500), units(500));
        assert!(!status.over_budget);
        assert_eq!(status.progress, 1.0);
    }

    #[test]
    fn test_zero_budget_is_always_over() {
        let status = BudgetStatus::evaluate(Money::zero(), Money::zero());
        assert!(status.over_budget);
        assert_eq!(status.progress, 1.0);
    }

    #[test]
    fn test_negative_budget_is_always_over() {
        let status = BudgetStatus::evaluate(units(10), units(-5));
        assert!(status.over_budget);
        assert_eq!(status.progress, 1.0);
    }

    #[test]
    fn test_nothing_spent() {
        let status = BudgetStatus::evaluate(Money::zero(), units(500));
        assert!(!status.over_budget);
        assert_eq!(status.progress, 0.0);
    }
}

//! Spending breakdown
//!
//! Totals per category and each category's share of the aggregate spend.

use crate::models::{Category, Expense, Money};

/// Spending for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    /// Category
    pub category: Category,
    /// Total spent in this category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of the overall total (0-100)
    pub percentage: f64,
}

/// Spending broken down by category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingBreakdown {
    /// One row per category, in display order
    pub categories: Vec<CategorySpending>,
    /// Total across all categories
    pub total: Money,
    /// Total number of expenses
    pub count: usize,
}

impl SpendingBreakdown {
    /// Build the breakdown from the full record set
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let total: Money = expenses.iter().map(|e| e.amount).sum();

        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let in_category = expenses.iter().filter(|e| e.category == category);
                let (cat_total, count) = in_category
                    .fold((Money::zero(), 0usize), |(sum, n), e| (sum + e.amount, n + 1));
                let percentage = if total.is_positive() {
                    cat_total.cents() as f64 / total.cents() as f64 * 100.0
                } else {
                    0.0
                };

                CategorySpending {
                    category,
                    total: cat_total,
                    count,
                    percentage,
                }
            })
            .collect();

        Self {
            categories,
            total,
            count: expenses.len(),
        }
    }

    /// Category with the largest spend, if anything was spent
    pub fn top_category(&self) -> Option<&CategorySpending> {
        self.categories
            .iter()
            .filter(|c| c.total.is_positive())
            .max_by_key(|c| c.total)
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(46));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>12} {:>7} {:>8}\n",
            "Category", "Total", "Count", "Share"
        ));
        output.push_str(&"-".repeat(46));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<15} {:>12} {:>7} {:>7.1}%\n",
                row.category.name(),
                row.total.format_with_symbol(symbol),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(46));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>12} {:>7}\n",
            "Total",
            self.total.format_with_symbol(symbol),
            self.count
        ));

        if let Some(top) = self.top_category() {
            output.push_str(&format!("\nTop category: {}\n", top.category.name()));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(cents: i64, category: Category) -> Expense {
        Expense::new(Money::from_cents(cents)).with_category(category)
    }

    #[test]
    fn test_breakdown_covers_every_category() {
        let breakdown = SpendingBreakdown::from_expenses(&[
            expense(300, Category::Food),
            expense(100, Category::Food),
            expense(600, Category::Transport),
        ]);

        assert_eq!(breakdown.categories.len(), 4);
        assert_eq!(breakdown.total.cents(), 1000);
        assert_eq!(breakdown.count, 3);

        let food = &breakdown.categories[0];
        assert_eq!(food.category, Category::Food);
        assert_eq!(food.total.cents(), 400);
        assert_eq!(food.count, 2);
        assert!((food.percentage - 40.0).abs() < 1e-9);

        let other = &breakdown.categories[3];
        assert_eq!(other.total, Money::zero());
        assert_eq!(other.percentage, 0.0);

        assert_eq!(breakdown.top_category().unwrap().category, Category::Transport);
    }

    #[test]
    fn test_empty_breakdown() {
        let breakdown = SpendingBreakdown::from_expenses(&[]);
        assert_eq!(breakdown.total, Money::zero());
        assert!(breakdown.categories.iter().all(|c| c.percentage == 0.0));
        assert!(breakdown.top_category().is_none());
    }

    #[test]
    fn test_format_terminal() {
        let breakdown = SpendingBreakdown::from_expenses(&[expense(1250, Category::Entertainment)]);
        let text = breakdown.format_terminal("$");

        assert!(text.contains("Entertainment"));
        assert!(text.contains("$12.50"));
        assert!(text.contains("100.0%"));
    }
}

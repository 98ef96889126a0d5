//! Expense query engine
//!
//! Pure functions that turn the unordered record set into the filtered,
//! sorted list shown to the user, plus the aggregate spend. Nothing here
//! touches storage; callers pass the evaluation time in explicitly.

use chrono::{DateTime, Utc};

use crate::models::{CategoryFilter, Expense, Money, SortMode, ViewCriteria};

/// Keep only the expenses that pass the category filter
pub fn filter_expenses(expenses: &[Expense], filter: CategoryFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| filter.matches(e.category))
        .cloned()
        .collect()
}

/// Sort expenses in place
///
/// Undated records sort as if dated `now`. Order among equal keys is
/// unspecified.
pub fn sort_expenses(expenses: &mut [Expense], sort: SortMode, now: DateTime<Utc>) {
    match sort {
        SortMode::NewestFirst => {
            expenses.sort_unstable_by(|a, b| b.effective_date(now).cmp(&a.effective_date(now)))
        }
        SortMode::OldestFirst => {
            expenses.sort_unstable_by(|a, b| a.effective_date(now).cmp(&b.effective_date(now)))
        }
        SortMode::HighestAmount => expenses.sort_unstable_by(|a, b| b.amount.cmp(&a.amount)),
        SortMode::LowestAmount => expenses.sort_unstable_by(|a, b| a.amount.cmp(&b.amount)),
    }
}

/// Filter then sort according to the view criteria
pub fn list_view(expenses: &[Expense], criteria: &ViewCriteria, now: DateTime<Utc>) -> Vec<Expense> {
    let mut view = filter_expenses(expenses, criteria.filter);
    sort_expenses(&mut view, criteria.sort, now);
    view
}

/// Sum of amounts over the given expenses
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

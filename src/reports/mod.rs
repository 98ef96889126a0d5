//! Reports module for the expense tracker
//!
//! Pure computations over the expense record set: the filtered/sorted list
//! view, the aggregate spend, budget status and per-category breakdown.

pub mod budget_status;
pub mod query;
pub mod spending;

pub use budget_status::BudgetStatus;
pub use query::{filter_expenses, list_view, sort_expenses, total_spent};
pub use spending::{CategorySpending, SpendingBreakdown};

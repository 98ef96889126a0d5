//! Core data models for the expense tracker
//!
//! Expenses, their identity, category and amount types, plus the ephemeral
//! view criteria used to filter and sort them.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod view;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError, UNNAMED_EXPENSE};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use view::{CategoryFilter, SortMode, ViewCriteria};

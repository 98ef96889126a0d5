//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence, audit logging and change notification.

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::{parse_expense_date, CreateExpenseInput, ExpenseService};

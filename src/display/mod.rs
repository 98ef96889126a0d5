//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and the budget progress bar.

pub mod budget;
pub mod expense;

pub use budget::{format_budget_status, format_progress_bar};
pub use expense::{format_expense_details, format_expense_table};

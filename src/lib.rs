//! Expense Tracker - terminal-based personal expense tracking
//!
//! This library provides the core functionality for the expense tracker:
//! recording expenses, viewing them through a category filter and sort
//! order, comparing aggregate spend against a monthly budget, and exporting
//! records to CSV or JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, view criteria)
//! - `storage`: JSON file storage layer and store change events
//! - `reports`: Filtering, sorting, aggregation and budget evaluation
//! - `services`: Business logic layer
//! - `export`: CSV and JSON export
//! - `audit`: Audit logging system
//! - `cli`, `display`, `tui`: Presentation layer
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::ExpensePaths;
//! use expense_tracker::models::ViewCriteria;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(ExpensePaths::new()?)?;
//! storage.load_all()?;
//! let expenses = ExpenseService::new(&storage).list_view(&ViewCriteria::default())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;

//! Dialog modules for the TUI
//!
//! Contains modal dialogs for data entry and confirmation

pub mod budget;
pub mod confirm;
pub mod expense;
pub mod help;

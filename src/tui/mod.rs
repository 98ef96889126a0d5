//! Terminal User Interface module
//!
//! A single-screen TUI built on ratatui: the filtered expense list, a
//! budget gauge with a per-category breakdown, and dialogs for adding
//! expenses, setting the budget and confirming deletes.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;

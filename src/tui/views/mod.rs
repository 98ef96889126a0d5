//! TUI Views module
//!
//! The main screen: header, expense list, sidebar, status bar.

pub mod expense_list;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    expense_list::render_header(frame, app, layout.header);
    expense_list::render(frame, app, layout.main);
    sidebar::render(frame, app, layout.sidebar);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::SetBudget => dialogs::budget::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => {
            let expense = app.expenses.iter().find(|e| e.id == id);
            dialogs::confirm::render(
                frame,
                expense,
                &app.settings.currency_symbol,
                &app.settings.date_format,
            );
        }
        ActiveDialog::None => {}
    }
}

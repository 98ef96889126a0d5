//! Add expense dialog
//!
//! Modal form for recording an expense with tab navigation between fields.
//! Validation errors keep the form open with the message shown.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::{parse_expense_date, CreateExpenseInput, ExpenseService};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// State for the add expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Name input
    pub name_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Selected category
    pub category: Category,

    /// Date input; empty means now
    pub date_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Name,
            name_input: TextInput::new().label("Name").placeholder("Optional"),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 12.50"),
            category: Category::default(),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD (blank for now)"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == ExpenseField::Name;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
    }

    /// Get the currently focused text input, if the field is free text
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Name => Some(&mut self.name_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Category => None,
            ExpenseField::Date => Some(&mut self.date_input),
        }
    }

    /// Build the service input from the form
    ///
    /// Only the date is checked here; the amount is validated by the service.
    pub fn build_input(&self) -> Result<CreateExpenseInput, String> {
        let date = match self.date_input.value().trim() {
            "" => None,
            raw => Some(parse_expense_date(raw).map_err(|e| e.to_string())?),
        };

        let name = self.name_input.value().trim();

        Ok(CreateExpenseInput {
            name: (!name.is_empty()).then(|| name.to_string()),
            amount: self.amount_input.value().to_string(),
            category: Some(self.category),
            date,
        })
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 13, frame.area());
    let form = &app.expense_form;

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(form.name_input.clone(), chunks[1]);
    frame.render_widget(form.amount_input.clone(), chunks[2]);
    render_category_field(frame, form, chunks[3]);
    frame.render_widget(form.date_input.clone(), chunks[4]);

    if let Some(ref error) = form.error_message {
        let error_line = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )))
        .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(error_line, chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Render the category selector
fn render_category_field(frame: &mut Frame, form: &ExpenseFormState, area: ratatui::layout::Rect) {
    let focused = form.focused_field == ExpenseField::Category;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>10}: ", "Category"), label_style)];
    for category in Category::ALL {
        let style = if category == form.category && focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if category == form.category {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", category.name()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }
        KeyCode::Enter => {
            save_expense(app);
            return true;
        }
        _ => {}
    }

    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        KeyCode::Left if form.focused_field == ExpenseField::Category => {
            form.category = form.category.prev();
        }
        KeyCode::Right | KeyCode::Char(' ') if form.focused_field == ExpenseField::Category => {
            form.category = form.category.next();
        }

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => return false,
    }

    true
}

/// Submit the form to the expense service
fn save_expense(app: &mut App) {
    let input = match app.expense_form.build_input() {
        Ok(input) => input,
        Err(e) => {
            app.expense_form.set_error(e);
            return;
        }
    };

    match ExpenseService::new(app.storage).add_expense(input) {
        Ok(expense) => {
            let symbol = app.settings.currency_symbol.as_str();
            let message = format!(
                "Added '{}' ({})",
                expense.display_name(),
                expense.amount.format_with_symbol(symbol)
            );
            app.close_dialog();
            app.invalidate_total();
            app.refresh();
            app.report_change(message);
        }
        Err(e) => app.expense_form.set_error(e.to_string()),
    }
}

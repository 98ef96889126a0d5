//! Set budget dialog
//!
//! Dialog to change the monthly budget

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::services::BudgetService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the set budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    /// Budget when the dialog was opened
    pub current_amount: Money,
    /// Amount being typed
    pub amount_input: TextInput,
    /// Error message
    pub error_message: Option<String>,
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the dialog with the current budget
    pub fn init(&mut self, current_amount: Money) {
        self.current_amount = current_amount;
        self.amount_input = TextInput::new().label("New").content(format!(
            "{}.{:02}",
            current_amount.dollars(),
            current_amount.cents_part()
        ));
        self.amount_input.focused = true;
        self.error_message = None;
    }

    /// Insert a character; only digits and the decimal point are accepted
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.amount_input.insert(c);
            self.error_message = None;
        }
    }

    /// Parse the input amount
    pub fn parse_amount(&self) -> Result<Money, String> {
        Money::parse(self.amount_input.value()).map_err(|e| e.to_string())
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the set budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(46, 10, frame.area());
    let state = &app.budget_form;
    let symbol = app.settings.currency_symbol.as_str();

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Monthly Budget ")
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
            Constraint::Length(1), // Current amount
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let current_line = Line::from(vec![
        Span::styled(format!("{:>10}: ", "Current"), Style::default().fg(Color::Yellow)),
        Span::styled(
            state.current_amount.format_with_symbol(symbol),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[1]);

    frame.render_widget(state.amount_input.clone(), chunks[2]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

/// Handle key events for the set budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            match app.budget_form.parse_amount() {
                Ok(amount) => match BudgetService::new(app.storage).set_budget(amount) {
                    Ok(()) => {
                        app.budget = amount;
                        app.close_dialog();
                        app.report_change(format!(
                            "Monthly budget set to {}",
                            amount.format_with_symbol(&app.settings.currency_symbol)
                        ));
                    }
                    Err(e) => app.budget_form.set_error(e.to_string()),
                },
                Err(e) => app.budget_form.set_error(e),
            }
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.budget_form.amount_input.clear();
            true
        }

        KeyCode::Char(c) => {
            app.budget_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.budget_form.amount_input.backspace();
            app.budget_form.error_message = None;
            true
        }

        KeyCode::Left => {
            app.budget_form.amount_input.move_left();
            true
        }

        KeyCode::Right => {
            app.budget_form.amount_input.move_right();
            true
        }

        _ => false,
    }
}

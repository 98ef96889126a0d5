//! Expense list view
//!
//! The header shows the active filter and sort; the table shows the
//! filtered, sorted expenses.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::Category;
use crate::tui::app::App;

/// Render the header with filter and sort state
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expense Tracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.criteria.filter.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled("Sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.criteria.sort.label(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(
            "a:Add  d:Delete  f:Filter  s:Sort  b:Budget  x:Export",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.expenses.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.expenses.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(16),    // Name
        Constraint::Length(14), // Category
        Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Name"),
        Cell::from("Category"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = app
        .expenses
        .iter()
        .map(|expense| {
            let date = expense
                .date
                .map(|d| d.format(&app.settings.date_format).to_string())
                .unwrap_or_else(|| "-".to_string());

            Row::new(vec![
                Cell::from(date),
                Cell::from(expense.display_name().to_string()),
                Cell::from(expense.category.name())
                    .style(Style::default().fg(category_color(expense.category))),
                Cell::from(format!(
                    "{:>10}",
                    expense.amount.format_with_symbol(symbol)
                )),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Color used for a category throughout the UI
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Food => Color::Green,
        Category::Transport => Color::Blue,
        Category::Entertainment => Color::Magenta,
        Category::Other => Color::Gray,
    }
}

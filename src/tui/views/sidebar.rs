//! Sidebar view
//!
//! Shows the budget gauge and the per-category breakdown

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::SidebarLayout;

use super::expense_list::category_color;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_budget(frame, app, layout.gauge);
    render_breakdown(frame, app, layout.breakdown);
}

/// Render the budget gauge with spent/remaining figures
fn render_budget(frame: &mut Frame, app: &mut App, area: Rect) {
    let status = app.budget_status();
    let symbol = app.settings.currency_symbol.as_str();

    let color = if status.over_budget {
        Color::Red
    } else if status.progress >= 0.8 {
        Color::Yellow
    } else {
        Color::Green
    };

    let block = Block::default()
        .title(" Monthly Budget ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let label = if status.over_budget {
        format!("{}% OVER", status.percent())
    } else {
        format!("{}%", status.percent())
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(status.progress)
        .label(label);
    frame.render_widget(gauge, rows[0]);

    let spent = Line::from(vec![
        Span::styled("Spent:     ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "{} / {}",
                status.total_spent.format_with_symbol(symbol),
                status.budget.format_with_symbol(symbol)
            ),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(spent), rows[1]);

    let remaining = status.remaining();
    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };
    let remaining_line = Line::from(vec![
        Span::styled("Remaining: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            remaining.format_with_symbol(symbol),
            Style::default().fg(remaining_color),
        ),
    ]);
    frame.render_widget(Paragraph::new(remaining_line), rows[2]);
}

/// Render spending by category
fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(" By Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let rows: Vec<Row> = app
        .breakdown
        .categories
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.category.name())
                    .style(Style::default().fg(category_color(row.category))),
                Cell::from(format!("{:>10}", row.total.format_with_symbol(symbol))),
                Cell::from(format!("{:>5.1}%", row.percentage)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(13),
        Constraint::Length(11),
        Constraint::Length(7),
    ];

    frame.render_widget(Table::new(rows, widths).block(block), area);
}

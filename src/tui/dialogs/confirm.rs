//! Confirmation dialog
//!
//! Yes/no prompt shown before an expense is deleted

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Expense;
use crate::tui::layout::centered_rect_fixed;

/// Confirmation text for deleting an expense
pub fn delete_message(expense: &Expense, symbol: &str) -> String {
    format!(
        "Delete '{}' ({})? This cannot be undone.",
        expense.display_name(),
        expense.amount.format_with_symbol(symbol)
    )
}

/// Render the delete confirmation for the given expense
///
/// `expense` is `None` when the record vanished from the list underneath
/// the dialog; the prompt then falls back to a generic question.
pub fn render(frame: &mut Frame, expense: Option<&Expense>, symbol: &str, date_format: &str) {
    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Expense ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let mut lines = vec![Line::from("")];
    match expense {
        Some(expense) => {
            lines.push(Line::from(delete_message(expense, symbol)));
            let date = expense
                .date
                .map(|d| d.format(date_format).to_string())
                .unwrap_or_else(|| "undated".to_string());
            lines.push(Line::from(Span::styled(
                format!("{} · {} · {}", expense.id.short(), expense.category, date),
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => lines.push(Line::from("Delete this expense?")),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[y/Enter]", Style::default().fg(Color::Red)),
        Span::raw(" Delete   "),
        Span::styled("[n/Esc]", Style::default().fg(Color::Green)),
        Span::raw(" Keep"),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_delete_message() {
        let expense = Expense::new(Money::from_cents(350)).with_name("Coffee");
        assert_eq!(
            delete_message(&expense, "$"),
            "Delete 'Coffee' ($3.50)? This cannot be undone."
        );
    }
}

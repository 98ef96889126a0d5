//! Expense display formatting
//!
//! Renders expense lists as tables and single expenses as detail blocks.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

/// Table row for one expense
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, symbol: &str, date_format: &str) -> Self {
        Self {
            id: expense.id.short(),
            date: format_date(expense, date_format),
            name: truncate(expense.display_name(), 30),
            category: expense.category.name(),
            amount: expense.amount.format_with_symbol(symbol),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, symbol, date_format));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(4), Alignment::right());

    format!("{}\n", table)
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id.short()));
    output.push_str(&format!("Name:     {}\n", expense.display_name()));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Date:     {}\n", format_date(expense, date_format)));

    output
}

fn format_date(expense: &Expense, date_format: &str) -> String {
    expense
        .date
        .map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

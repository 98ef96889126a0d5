//! CSV export
//!
//! Writes the full expense list as `Name,Amount,Category,Date`. Fields are
//! written verbatim: embedded commas or quotes are not escaped, so names
//! containing them produce extra columns when re-read.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 4] = ["Name", "Amount", "Category", "Date"];

/// Default file name for CSV exports
pub const CSV_EXPORT_FILENAME: &str = "expenses.csv";

/// Write expenses as CSV, in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        let amount = expense.amount.to_plain_decimal();
        let date = expense
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        csv_writer.write_record([
            expense.display_name(),
            amount.as_str(),
            expense.category.name(),
            date.as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}

/// Render expenses as a CSV document
pub fn format_expenses_csv(expenses: &[Expense]) -> ExpenseResult<String> {
    let mut buffer = Vec::new();
    export_expenses_csv(expenses, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExpenseError::Export(e.to_string()))
}

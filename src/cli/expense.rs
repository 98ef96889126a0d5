//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::expense::{format_expense_details, format_expense_table};
use crate::error::ExpenseResult;
use crate::models::{Category, CategoryFilter, SortMode, ViewCriteria};
use crate::services::{parse_expense_date, CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "3.50" or "12")
        amount: String,
        /// Expense name
        #[arg(short, long)]
        name: Option<String>,
        /// Category (food, transport, entertainment, other)
        #[arg(short, long)]
        category: Option<Category>,
        /// Expense date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses
    List {
        /// Category filter ("all" or a category name)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
        /// Sort order (newest, oldest, highest, lowest)
        #[arg(short, long, default_value = "newest")]
        sort: SortMode,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a single expense
    Show {
        /// Expense ID (full UUID or exp-xxxxxxxx)
        id: String,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full UUID or exp-xxxxxxxx)
        id: String,
    },
    /// Show total spent across all expenses
    Total,
    /// Show spending by category
    Summary,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            name,
            category,
            date,
        } => {
            let date = date.as_deref().map(parse_expense_date).transpose()?;

            let expense = service.add_expense(CreateExpenseInput {
                name,
                amount,
                category,
                date,
            })?;

            println!(
                "Added expense {}: {} {} ({})",
                expense.id.short(),
                expense.display_name(),
                expense.amount.format_with_symbol(symbol),
                expense.category
            );
        }

        ExpenseCommands::List {
            category,
            sort,
            limit,
        } => {
            let mut expenses = service.list_view(&ViewCriteria::new(category, sort))?;
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            println!("Filter: {}  |  Sort: {}", category, sort);
            print!(
                "{}",
                format_expense_table(&expenses, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            print!(
                "{}",
                format_expense_details(&expense, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.find(&id)?;
            let deleted = service.delete_expense(expense.id)?;
            println!(
                "Deleted expense {}: {} {}",
                deleted.id.short(),
                deleted.display_name(),
                deleted.amount.format_with_symbol(symbol)
            );
        }

        ExpenseCommands::Total => {
            let total = service.total_spent()?;
            println!("Total spent: {}", total.format_with_symbol(symbol));
        }

        ExpenseCommands::Summary => {
            let breakdown = service.spending_breakdown()?;
            print!("{}", breakdown.format_terminal(symbol));
        }
    }

    Ok(())
}

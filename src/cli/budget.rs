//! Budget CLI commands
//!
//! Implements CLI commands for viewing and changing the monthly budget.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::budget::format_budget_status;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show spending against the monthly budget
    Show,

    /// Set the monthly budget
    Set {
        /// Amount (e.g., "500" or "750.00")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show => {
            let status = service.budget_status()?;
            print!("{}", format_budget_status(&status, symbol));
        }

        BudgetCommands::Set { amount } => {
            let amount = Money::parse(&amount).map_err(|e| {
                ExpenseError::Validation(format!("Invalid budget amount: {}", e))
            })?;

            service.set_budget(amount)?;
            println!("Monthly budget set to {}", amount.format_with_symbol(symbol));
        }
    }

    Ok(())
}

//! CLI commands for data export
//!
//! Provides commands for exporting expenses to CSV or JSON.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::export::ExpenseExport;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all expenses to CSV
    Csv {
        /// Output directory (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the document instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Export the budget and all expenses to JSON
    Json {
        /// Output directory (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let default_dir = storage.paths().export_dir();

    match cmd {
        ExportCommands::Csv { output, stdout } => {
            if stdout {
                print!("{}", service.export_csv()?);
                return Ok(());
            }

            let path = service.export_csv_to(&output.unwrap_or(default_dir))?;
            println!("Expenses exported to: {}", path.display());
        }

        ExportCommands::Json { output, pretty } => {
            let path = service.export_json_to(&output.unwrap_or(default_dir), pretty)?;
            println!("Full export written to: {}", path.display());
        }

        ExportCommands::Info => {
            let export = ExpenseExport::new(service.all()?, settings.monthly_budget);
            let symbol = settings.currency_symbol.as_str();

            println!("Export Information");
            println!("==================\n");
            println!("Schema Version: {}", export.schema_version);
            println!("App Version:    {}", export.app_version);
            println!("Export Dir:     {}", default_dir.display());
            println!();
            println!("Data Summary:");
            println!("  Expenses:     {}", export.metadata.expense_count);
            println!(
                "  Total spent:  {}",
                export.metadata.total_spent.format_with_symbol(symbol)
            );
            println!(
                "  Budget:       {}",
                export.monthly_budget.format_with_symbol(symbol)
            );

            if let Some(earliest) = &export.metadata.earliest_expense {
                println!("\nDate Range:");
                println!("  Earliest: {}", earliest);
            }
            if let Some(latest) = &export.metadata.latest_expense {
                println!("  Latest:   {}", latest);
            }
        }
    }

    Ok(())
}

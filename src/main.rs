use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::audit::EntityType;
use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_export_command,
    handle_history_command, BudgetCommands, ExpenseCommands, ExportCommands,
};
use expense_tracker::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::init::needs_initialization;
use expense_tracker::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses, view them by category and sort order, \
                  track spending against a monthly budget, and export your \
                  records to CSV or JSON."
)]
struct Cli {
    /// Directory holding settings, data and exports
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export commands
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only show changes to expenses or to the budget
        #[arg(short, long, value_name = "expense|budget")]
        kind: Option<EntityType>,
    },

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let result = run(cli.command, &paths, &settings, &storage);

    if let Some(warning) = storage.take_audit_warning() {
        eprintln!("Warning: {}", warning);
    }

    result
}

fn run(
    command: Option<Commands>,
    paths: &ExpensePaths,
    settings: &Settings,
    storage: &Storage,
) -> Result<()> {
    match command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(storage, settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(storage, settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(storage, settings, cmd)?;
        }
        Some(Commands::History { limit, kind }) => {
            handle_history_command(storage, settings, limit, kind)?;
        }
        Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(storage, settings)?;
        }
        Some(Commands::Init) => {
            if !needs_initialization(paths) {
                println!("Already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            initialize_storage(paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Monthly budget: {}",
                settings.monthly_budget.format_with_symbol(&settings.currency_symbol)
            );
            println!("Run 'expense add <amount>' to record your first expense.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!(
                "  Monthly budget:  {}",
                settings.monthly_budget.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Initialized:     {}", storage.is_initialized());
            println!(
                "  Expenses stored: {}",
                ExpenseService::new(storage).count()?
            );
        }
        None => {
            println!("Expense Tracker - terminal-based personal expense tracking");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

//! JSON export
//!
//! Exports the budget and every expense to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Default file name for JSON exports
pub const JSON_EXPORT_FILENAME: &str = "expenses-export.json";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Monthly budget at export time
    pub monthly_budget: Money,

    /// All expenses
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of expenses
    pub expense_count: usize,

    /// Sum of all expense amounts
    pub total_spent: Money,

    /// Earliest expense date (YYYY-MM-DD)
    pub earliest_expense: Option<String>,

    /// Latest expense date (YYYY-MM-DD)
    pub latest_expense: Option<String>,
}

impl ExpenseExport {
    /// Build an export from the full record set
    pub fn new(expenses: Vec<Expense>, monthly_budget: Money) -> Self {
        let dates = || expenses.iter().filter_map(|e| e.date);
        let earliest_expense = dates().min().map(|d| d.format("%Y-%m-%d").to_string());
        let latest_expense = dates().max().map(|d| d.format("%Y-%m-%d").to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            monthly_budget,
            expenses,
            metadata,
        }
    }
}

/// Write an export as JSON
pub fn export_full_json<W: Write>(
    export: &ExpenseExport,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))
}

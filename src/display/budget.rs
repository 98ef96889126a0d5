//! Budget status display formatting

use crate::reports::BudgetStatus;

const BAR_WIDTH: usize = 30;

/// Render a text progress bar for the budget
pub fn format_progress_bar(status: &BudgetStatus) -> String {
    let filled = (status.progress * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        status.percent()
    )
}

/// Format the budget status block
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Monthly Budget\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Budget:    {:>14}\n",
        status.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Spent:     {:>14}\n",
        status.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining: {:>14}\n",
        status.remaining().format_with_symbol(symbol)
    ));
    output.push('\n');
    output.push_str(&format_progress_bar(status));
    output.push('\n');

    if status.over_budget {
        output.push_str("\nOVER BUDGET\n");
    }

    output
}

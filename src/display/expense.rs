//! Expense display formatting
//!
//! Renders the expense list as a table for the terminal. Row numbers are
//! 1-based and refer to the position in the full list, so they can be passed
//! straight back to `update` and `delete` even when the list is filtered.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format `(position, expense)` pairs as a table
pub fn format_expense_table(rows: &[(usize, Expense)], currency_symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let table_rows = rows.iter().map(|(index, expense)| ExpenseRow {
        row: index + 1,
        id: expense.id.to_string(),
        date: expense.date.clone(),
        category: expense.category.clone(),
        amount: format_amount(expense.amount, currency_symbol),
        description: truncate(&expense.description, 40),
    });

    let mut table = Table::new(table_rows);
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Format a full list, numbering rows from 1
pub fn format_expense_list(expenses: &[Expense], currency_symbol: &str) -> String {
    let rows: Vec<(usize, Expense)> = expenses.iter().cloned().enumerate().collect();
    format_expense_table(&rows, currency_symbol)
}

/// Format a single expense for confirmation prompts
pub fn format_expense_details(index: usize, expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {} (row {})\n", expense.id, index + 1));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_amount(expense.amount, currency_symbol)
    ));

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

/// Format audit entries, newest last
pub fn format_audit_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency_symbol, amount.abs())
    } else {
        format!("{}{:.2}", currency_symbol, amount)
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

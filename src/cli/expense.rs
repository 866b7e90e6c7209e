//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing, searching, editing and
//! deleting expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{
    format_expense_details, format_expense_list, format_expense_table,
};
use crate::error::ExpenseResult;
use crate::models::ExpenseForm;
use crate::services::{ExpenseService, Selection};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Expense date (YYYY-MM-DD)
        date: String,
        /// Category name
        category: String,
        /// Amount (e.g. "150" or "-20.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List all expenses
    List,
    /// Show expenses whose category or date contains a keyword
    Search {
        /// Case-insensitive keyword
        keyword: String,
    },
    /// Edit an expense; fields not given keep their current value
    Update {
        /// Row number (from `list`) or expense ID
        selection: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Row number (from `list`) or expense ID
        selection: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            date,
            category,
            amount,
            description,
        } => {
            let form = ExpenseForm::new(date, category, amount, description);
            let expense = service.add(&form)?;
            println!("Added expense: {} ({})", expense.id, expense.summary_label());
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(&service.list()?, currency));
        }

        ExpenseCommands::Search { keyword } => {
            let rows = service.search(&keyword)?;
            print!("{}", format_expense_table(&rows, currency));
        }

        ExpenseCommands::Update {
            selection,
            date,
            category,
            amount,
            description,
        } => {
            let selection = Selection::parse(&selection)?;
            let (_, current) = service.get(Some(&selection))?;

            let mut form = ExpenseForm::from_expense(&current);
            if let Some(date) = date {
                form.date = date;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(description) = description {
                form.description = description;
            }

            let updated = service.update(Some(&selection), &form)?;
            println!(
                "Updated expense: {} ({})",
                updated.id,
                updated.summary_label()
            );
        }

        ExpenseCommands::Delete { selection, force } => {
            let selection = Selection::parse(&selection)?;
            let (index, expense) = service.get(Some(&selection))?;

            if !force {
                println!("About to delete expense:");
                print!("{}", format_expense_details(index, &expense, currency));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            // Target the id so a concurrent reorder can't hit a different row
            let removed = service.delete(Some(&Selection::from(expense.id)))?;
            println!(
                "Deleted expense: {} ({})",
                removed.id,
                removed.summary_label()
            );
        }
    }

    Ok(())
}

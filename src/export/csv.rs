//! CSV Export functionality
//!
//! Writes one row per expense with the same column names as the data file.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::Storage;

/// Export all stored expenses to CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> ExpenseResult<()> {
    write_expenses_csv(&storage.expenses.load()?, writer)
}

/// Write a list of expenses as CSV with an `Id,Date,Category,Amount,Description` header
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        csv_writer
            .write_record(["Id", "Date", "Category", "Amount", "Description"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    for expense in expenses {
        csv_writer
            .serialize(expense)
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and history for terminal
//! display. Report text lives with the report itself.

pub mod expense;

pub use expense::{
    format_amount, format_audit_history, format_expense_details, format_expense_list,
    format_expense_table,
};

//! Core data models for the expense tracker

pub mod expense;
pub mod ids;

pub use expense::{is_iso_date_shape, month_label, parse_amount, Expense, ExpenseForm, DATE_FORMAT};
pub use ids::ExpenseId;

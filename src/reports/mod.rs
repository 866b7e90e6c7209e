//! Reports module for the expense tracker
//!
//! Aggregates the expense list into a total with per-category and per-month
//! subtotals.

pub mod summary;

pub use summary::{summarize, summarize_with, ExpenseReport, SkippedRecord};

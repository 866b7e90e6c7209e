//! Custom error types for the expense tracker
//!
//! Every failure the core can report is a distinct variant so that a front end
//! can react to the kind of error rather than parse message text.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A required form field was left empty
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The amount could not be parsed as a finite number
    #[error("Invalid amount '{0}': amount must be a number")]
    InvalidAmount(String),

    /// The date is not shaped like YYYY-MM-DD
    #[error("Invalid date '{0}': use YYYY-MM-DD")]
    InvalidDate(String),

    /// Update or delete was requested without choosing a record
    #[error("No expense selected: choose a row to update or delete")]
    SelectionRequired,

    /// A positional selection is outside the list
    #[error("Index {index} is out of range (list has {len} expenses)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A row number that can never refer to a record (0, or too large to parse)
    #[error("Row '{0}' does not exist; rows are numbered from 1")]
    InvalidRow(String),

    /// A short id matched more than one expense
    #[error("'{0}' matches more than one expense; use a longer id")]
    AmbiguousSelection(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A stored date is not a real calendar date
    #[error("Expense at index {index} has an unparseable date '{date}'")]
    DateParse { index: usize, date: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was raised by input validation (the file is untouched)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::InvalidAmount(_) | Self::InvalidDate(_)
        )
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

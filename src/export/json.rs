//! JSON Export functionality
//!
//! Exports the expense list wrapped in a versioned envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure shared by the JSON and YAML exporters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expense_count: usize,

    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            expenses,
        }
    }

    /// Snapshot the stored expense list
    pub fn from_storage(storage: &Storage) -> ExpenseResult<Self> {
        Ok(Self::new(storage.expenses.load()?))
    }
}

/// Export the stored expenses as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_storage(storage)?;
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

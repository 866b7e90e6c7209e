//! YAML Export functionality
//!
//! Exports the expense list to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::storage::Storage;

/// Export the stored expenses to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, mut writer: W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

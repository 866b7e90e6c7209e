//! Export module for the expense tracker
//!
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: versioned machine-readable export
//! - YAML: the same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, write_expenses_csv};
pub use json::{export_full_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

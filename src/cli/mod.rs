//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod expense;
pub mod export;
pub mod history;
pub mod report;

pub use config::{handle_config_command, ConfigArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_report_command, ReportArgs};

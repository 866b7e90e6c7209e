//! Expense Tracker - personal expense logging and summaries
//!
//! This library provides the core of a small expense tracker: a JSON-backed
//! store of expense records, a report that totals them overall, per category
//! and per month, and a keyword filter. The `expenses` binary is a thin CLI
//! on top of it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense record and the unvalidated form
//! - `storage`: JSON file storage layer
//! - `services`: Validation, selection and filtering
//! - `reports`: Category and month summaries
//! - `audit`: Audit logging system
//! - `display`, `export`, `cli`: Terminal output, exports and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::TrackerPaths;
//! use expense_tracker::models::ExpenseForm;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(TrackerPaths::new()?)?;
//! let service = ExpenseService::new(&storage);
//! service.add(&ExpenseForm::new("2024-01-05", "Food", "100", "lunch"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;

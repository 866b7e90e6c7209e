//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, record selection, filtering and audit logging.

pub mod expense;

pub use expense::{
    filter_expenses, matches_keyword, matching_expenses, ExpenseService, Selection,
};

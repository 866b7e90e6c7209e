//! Expense repository for JSON storage
//!
//! Manages expenses.json. The repository keeps no copy of the list: every
//! call reads the whole file and every mutation rewrites it, so the file on
//! disk is always the source of truth.
//!
//! Records written without an `Id` (older files) get one on the first load,
//! and the file is rewritten straight away so the ids stay the same from one
//! command to the next.
//!
//! There is no locking. Two processes writing the same file lose updates
//! (last writer wins); the tracker assumes a single user and process.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json_required, write_json_atomic};

/// On-disk shape of a record; `Id` may be absent in older files
#[derive(Deserialize)]
struct StoredExpense {
    #[serde(rename = "Id")]
    id: Option<ExpenseId>,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Description", default)]
    description: String,
}

/// Repository for the expense list
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the backing file exists, writing an empty list if it doesn't
    ///
    /// Returns `true` if the file was created. Existing content is never
    /// touched.
    pub fn initialize(&self) -> ExpenseResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        write_json_atomic(&self.path, &Vec::<Expense>::new())?;
        Ok(true)
    }

    /// Read the full list from disk
    ///
    /// Assigns ids to records that lack one and persists them before
    /// returning.
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let stored: Vec<StoredExpense> = read_json_required(&self.path)?;
        let missing_ids = stored.iter().any(|record| record.id.is_none());

        let expenses: Vec<Expense> = stored
            .into_iter()
            .map(|record| Expense {
                id: record.id.unwrap_or_default(),
                date: record.date,
                category: record.category,
                amount: record.amount,
                description: record.description,
            })
            .collect();

        if missing_ids {
            self.save(&expenses)?;
        }

        Ok(expenses)
    }

    /// Replace the file with `expenses`
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &expenses)
    }

    /// Append a record
    pub fn add(&self, expense: Expense) -> ExpenseResult<()> {
        let mut expenses = self.load()?;
        expenses.push(expense);
        self.save(&expenses)
    }

    /// Replace the record at `index`, returning the previous one
    pub fn update(&self, index: usize, expense: Expense) -> ExpenseResult<Expense> {
        let mut expenses = self.load()?;
        check_index(index, expenses.len())?;
        let previous = std::mem::replace(&mut expenses[index], expense);
        self.save(&expenses)?;
        Ok(previous)
    }

    /// Remove and return the record at `index`
    pub fn delete(&self, index: usize) -> ExpenseResult<Expense> {
        let mut expenses = self.load()?;
        check_index(index, expenses.len())?;
        let removed = expenses.remove(index);
        self.save(&expenses)?;
        Ok(removed)
    }
}

fn check_index(index: usize, len: usize) -> ExpenseResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(ExpenseError::IndexOutOfRange { index, len })
    }
}

//! Expense service
//!
//! Business logic on top of the expense store: form validation, resolving
//! which record a selection refers to, keyword filtering, reporting and
//! audit logging. Each call reads the file afresh; nothing is cached between
//! calls.

use crate::audit::{generate_diff, EntityType};
use crate::config::InvalidDatePolicy;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseForm, ExpenseId};
use crate::reports::{summarize_with, ExpenseReport};
use crate::storage::Storage;

/// Which record an update or delete targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based position in the list
    Position(usize),
    /// Full id, or a unique prefix of one (e.g. "exp-1a2b3c4d")
    Id(String),
}

impl Selection {
    /// Parse a user-facing reference: a 1-based row number or an id
    ///
    /// Anything made only of digits is a row number, so `0` is rejected
    /// rather than treated as an id prefix.
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::Id(s.to_string()));
        }

        match s.parse::<usize>() {
            Ok(row) if row > 0 => Ok(Self::Position(row - 1)),
            _ => Err(ExpenseError::InvalidRow(s.to_string())),
        }
    }

    /// Find the position this selection refers to in `expenses`
    pub fn resolve(&self, expenses: &[Expense]) -> ExpenseResult<usize> {
        match self {
            Self::Position(index) if *index < expenses.len() => Ok(*index),
            Self::Position(index) => Err(ExpenseError::IndexOutOfRange {
                index: *index,
                len: expenses.len(),
            }),
            Self::Id(reference) => resolve_id(reference, expenses),
        }
    }
}

impl From<ExpenseId> for Selection {
    fn from(id: ExpenseId) -> Self {
        Self::Id(id.as_uuid().to_string())
    }
}

fn resolve_id(reference: &str, expenses: &[Expense]) -> ExpenseResult<usize> {
    if let Ok(id) = ExpenseId::parse(reference) {
        return expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(reference));
    }

    let mut matches = expenses
        .iter()
        .enumerate()
        .filter(|(_, e)| e.id.matches_prefix(reference))
        .map(|(i, _)| i);

    match (matches.next(), matches.next()) {
        (Some(index), None) => Ok(index),
        (Some(_), Some(_)) => Err(ExpenseError::AmbiguousSelection(reference.to_string())),
        (None, _) => Err(ExpenseError::expense_not_found(reference)),
    }
}

/// Check one record against an already-lowercased keyword
///
/// The keyword matches the category case-insensitively, or appears in the
/// literal date string.
pub fn matches_keyword(expense: &Expense, keyword_lower: &str) -> bool {
    expense.category.to_lowercase().contains(keyword_lower) || expense.date.contains(keyword_lower)
}

/// Records matching `keyword` with their positions, in list order
///
/// An empty keyword keeps everything.
pub fn matching_expenses<'e>(
    expenses: &'e [Expense],
    keyword: &str,
) -> impl Iterator<Item = (usize, &'e Expense)> {
    let keyword = keyword.to_lowercase();
    expenses
        .iter()
        .enumerate()
        .filter(move |(_, e)| matches_keyword(e, &keyword))
}

/// Keep the records matching `keyword`, in their original order
pub fn filter_expenses(expenses: &[Expense], keyword: &str) -> Vec<Expense> {
    matching_expenses(expenses, keyword)
        .map(|(_, e)| e.clone())
        .collect()
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.load()
    }

    /// Expenses matching a keyword, paired with their position in the full list
    pub fn search(&self, keyword: &str) -> ExpenseResult<Vec<(usize, Expense)>> {
        let expenses = self.list()?;
        Ok(matching_expenses(&expenses, keyword)
            .map(|(index, e)| (index, e.clone()))
            .collect())
    }

    /// Look up the record a selection refers to, with its position
    pub fn get(&self, selection: Option<&Selection>) -> ExpenseResult<(usize, Expense)> {
        let selection = selection.ok_or(ExpenseError::SelectionRequired)?;
        let expenses = self.list()?;
        let index = selection.resolve(&expenses)?;
        Ok((index, expenses[index].clone()))
    }

    /// Validate a form and append it as a new expense
    pub fn add(&self, form: &ExpenseForm) -> ExpenseResult<Expense> {
        let expense = form.validate()?;

        self.storage.expenses.add(expense.clone())?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.summary_label()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Replace the selected expense with the form's values
    ///
    /// The record keeps its id. Nothing is written unless both the selection
    /// and the form are valid.
    pub fn update(
        &self,
        selection: Option<&Selection>,
        form: &ExpenseForm,
    ) -> ExpenseResult<Expense> {
        let selection = selection.ok_or(ExpenseError::SelectionRequired)?;
        let mut expense = form.validate()?;

        let expenses = self.list()?;
        let index = selection.resolve(&expenses)?;
        expense.id = expenses[index].id;

        let before = self.storage.expenses.update(index, expense.clone())?;

        let diff = match (serde_json::to_value(&before), serde_json::to_value(&expense)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.summary_label()),
            &before,
            &expense,
            diff,
        )?;

        Ok(expense)
    }

    /// Remove the selected expense and return it
    pub fn delete(&self, selection: Option<&Selection>) -> ExpenseResult<Expense> {
        let selection = selection.ok_or(ExpenseError::SelectionRequired)?;

        let expenses = self.list()?;
        let index = selection.resolve(&expenses)?;
        let removed = self.storage.expenses.delete(index)?;

        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.summary_label()),
            &removed,
        )?;

        Ok(removed)
    }

    /// Summarize every stored expense; `None` when there is nothing to report
    pub fn report(&self, policy: InvalidDatePolicy) -> ExpenseResult<Option<ExpenseReport>> {
        summarize_with(&self.list()?, policy)
    }
}

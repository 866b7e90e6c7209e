//! Expense model
//!
//! An expense is one logged transaction: date, category, amount and an
//! optional description. The persisted form uses capitalised keys
//! (`Date`, `Category`, `Amount`, `Description`) plus a stable `Id`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use crate::error::{ExpenseError, ExpenseResult};

/// Date format used for storage and input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identifier; the store assigns one to older records on load
    #[serde(rename = "Id")]
    pub id: ExpenseId,

    /// Date as entered, `YYYY-MM-DD`
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Category")]
    pub category: String,

    /// Signed amount; zero and negative values are allowed
    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Description", default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Parse the stored date as a real calendar date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Month label used to group reports, e.g. "January 2024"
    pub fn month_label(&self) -> Option<String> {
        self.parsed_date().map(|d| month_label(&d))
    }

    /// Short human-readable label used in audit entries and confirmations
    pub fn summary_label(&self) -> String {
        format!("{} {} {:.2}", self.date, self.category, self.amount)
    }
}

/// Format a date as full month name and four-digit year
pub fn month_label(date: &NaiveDate) -> String {
    format!("{} {:04}", date.format("%B"), date.year())
}

/// Raw form values as submitted by a front end
///
/// Nothing here has been checked yet; [`ExpenseForm::validate`] turns the
/// strings into an [`Expense`] or reports which rule failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseForm {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Prefill a form from an existing record, for editing
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            date: expense.date.clone(),
            category: expense.category.clone(),
            amount: expense.amount.to_string(),
            description: expense.description.clone(),
        }
    }

    /// Validate the form and build an expense with a fresh id
    ///
    /// Required fields are checked first, in form order, then the amount,
    /// then the date shape. Whether the date is a real calendar date is left
    /// to report time.
    pub fn validate(&self) -> ExpenseResult<Expense> {
        let date = self.date.trim();
        let category = self.category.trim();
        let amount = self.amount.trim();

        if date.is_empty() {
            return Err(ExpenseError::MissingField { field: "date" });
        }
        if category.is_empty() {
            return Err(ExpenseError::MissingField { field: "category" });
        }
        if amount.is_empty() {
            return Err(ExpenseError::MissingField { field: "amount" });
        }

        let amount = parse_amount(amount)?;

        if !is_iso_date_shape(date) {
            return Err(ExpenseError::InvalidDate(date.to_string()));
        }

        Ok(Expense::new(date, category, amount, self.description.clone()))
    }
}

/// Parse an amount string; JSON has no representation for NaN or infinity
pub fn parse_amount(s: &str) -> ExpenseResult<f64> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExpenseError::InvalidAmount(s.to_string())),
    }
}

/// Lexical check for `YYYY-MM-DD` (four digits, dash, two digits, dash, two digits)
pub fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let form = ExpenseForm::new("2024-01-05", "Food", "100", "lunch");
        let expense = form.validate().unwrap();
        assert_eq!(expense.date, "2024-01-05");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 100.0);
        assert_eq!(expense.description, "lunch");
    }

    #[test]
    fn test_validate_accepts_zero_and_negative() {
        assert_eq!(
            ExpenseForm::new("2024-01-05", "Refund", "-12.5", "").validate().unwrap().amount,
            -12.5
        );
        assert_eq!(
            ExpenseForm::new("2024-01-05", "Misc", "0", "").validate().unwrap().amount,
            0.0
        );
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let err = ExpenseForm::new("", "", "", "").validate().unwrap_err();
        assert!(matches!(err, ExpenseError::MissingField { field: "date" }));

        let err = ExpenseForm::new("2024-01-05", "  ", "10", "").validate().unwrap_err();
        assert!(matches!(err, ExpenseError::MissingField { field: "category" }));

        let err = ExpenseForm::new("2024-01-05", "Food", "", "").validate().unwrap_err();
        assert!(matches!(err, ExpenseError::MissingField { field: "amount" }));
    }

    #[test]
    fn test_invalid_amount() {
        let err = ExpenseForm::new("2024-01-05", "Food", "abc", "").validate().unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount(ref s) if s == "abc"));

        let err = ExpenseForm::new("2024-01-05", "Food", "NaN", "").validate().unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount(_)));
    }

    #[test]
    fn test_invalid_date_shape() {
        let err = ExpenseForm::new("05/01/2024", "Food", "1", "").validate().unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidDate(_)));

        // Shape is fine, calendar check happens at report time
        assert!(ExpenseForm::new("2024-02-30", "Food", "1", "").validate().is_ok());
    }

    #[test]
    fn test_date_shape() {
        assert!(is_iso_date_shape("2024-01-05"));
        assert!(!is_iso_date_shape("2024-1-05"));
        assert!(!is_iso_date_shape("2024/01/05"));
        assert!(!is_iso_date_shape("2024-01-05 "));
    }

    #[test]
    fn test_month_label() {
        let expense = Expense::new("2024-02-01", "Transport", 30.0, "bus");
        assert_eq!(expense.month_label().as_deref(), Some("February 2024"));

        let bad = Expense::new("2024-02-30", "Transport", 30.0, "");
        assert!(bad.month_label().is_none());
    }

    #[test]
    fn test_persisted_keys() {
        let expense = Expense::new("2024-01-05", "Food", 100.0, "lunch");
        let value = serde_json::to_value(&expense).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["Id", "Date", "Category", "Amount", "Description"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let json = r#"{"Id": "67e55044-10b1-426f-9247-bb680e5fe0c8", "Date": "2024-01-05", "Category": "Food", "Amount": 100}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, 100.0);
        assert_eq!(expense.description, "");
        assert_eq!(expense.id.to_string(), "exp-67e55044");
    }

    #[test]
    fn test_form_from_expense() {
        let expense = Expense::new("2024-01-05", "Food", 12.5, "lunch");
        let form = ExpenseForm::from_expense(&expense);
        assert_eq!(form.amount, "12.5");
        assert_eq!(form.validate().unwrap().amount, 12.5);
    }
}

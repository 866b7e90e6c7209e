//! Expense Summary Report
//!
//! Grand total plus subtotals by category and by calendar month, computed in a
//! single pass over the expense list.

use std::io::Write;

use crate::config::InvalidDatePolicy;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// A record left out of a report because its date is not a real calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the record in the list
    pub index: usize,
    pub date: String,
    pub category: String,
    pub amount: f64,
}

/// Expense summary report
///
/// Subtotals keep the order in which each category or month first appears in
/// the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseReport {
    /// Sum of every included amount
    pub total: f64,
    pub by_category: Vec<(String, f64)>,
    /// Keyed by "Month Year", e.g. "January 2024"
    pub by_month: Vec<(String, f64)>,
    /// Number of records that contributed to the sums
    pub expense_count: usize,
    /// Records left out under [`InvalidDatePolicy::Skip`]
    pub skipped: Vec<SkippedRecord>,
}

/// Summarize a list, failing on the first unparseable date
///
/// Returns `Ok(None)` when there is nothing to report.
pub fn summarize(expenses: &[Expense]) -> ExpenseResult<Option<ExpenseReport>> {
    summarize_with(expenses, InvalidDatePolicy::Abort)
}

/// Summarize a list with an explicit policy for unparseable dates
pub fn summarize_with(
    expenses: &[Expense],
    policy: InvalidDatePolicy,
) -> ExpenseResult<Option<ExpenseReport>> {
    if expenses.is_empty() {
        return Ok(None);
    }

    let mut report = ExpenseReport {
        total: 0.0,
        by_category: Vec::new(),
        by_month: Vec::new(),
        expense_count: 0,
        skipped: Vec::new(),
    };

    for (index, expense) in expenses.iter().enumerate() {
        let month = match (expense.month_label(), policy) {
            (Some(month), _) => month,
            (None, InvalidDatePolicy::Abort) => {
                return Err(ExpenseError::DateParse {
                    index,
                    date: expense.date.clone(),
                })
            }
            (None, InvalidDatePolicy::Skip) => {
                report.skipped.push(SkippedRecord {
                    index,
                    date: expense.date.clone(),
                    category: expense.category.clone(),
                    amount: expense.amount,
                });
                continue;
            }
        };

        report.total += expense.amount;
        accumulate(&mut report.by_category, &expense.category, expense.amount);
        accumulate(&mut report.by_month, &month, expense.amount);
        report.expense_count += 1;
    }

    Ok(Some(report))
}

/// Add `amount` to the bucket named `key`, appending the bucket on first sight
fn accumulate(buckets: &mut Vec<(String, f64)>, key: &str, amount: f64) {
    match buckets.iter_mut().find(|(name, _)| name == key) {
        Some((_, sum)) => *sum += amount,
        None => buckets.push((key.to_string(), amount)),
    }
}

impl ExpenseReport {
    /// Subtotal for a category, if it appears in the report
    pub fn category_total(&self, category: &str) -> Option<f64> {
        lookup(&self.by_category, category)
    }

    /// Subtotal for a "Month Year" label, if it appears in the report
    pub fn month_total(&self, month: &str) -> Option<f64> {
        lookup(&self.by_month, month)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = format!(
            "Total Expenses: {}{:.2}\n\nBy Category:\n",
            currency_symbol, self.total
        );

        for (category, amount) in &self.by_category {
            output.push_str(&format!("{}: {}{:.2}\n", category, currency_symbol, amount));
        }

        output.push_str("\nBy Month:\n");
        for (month, amount) in &self.by_month {
            output.push_str(&format!("{}: {}{:.2}\n", month, currency_symbol, amount));
        }

        if !self.skipped.is_empty() {
            output.push_str(&format!(
                "\nSkipped {} expense(s) with invalid dates:\n",
                self.skipped.len()
            ));
            for record in &self.skipped {
                output.push_str(&format!(
                    "  row {}: '{}' {} {}{:.2}\n",
                    record.index + 1,
                    record.date,
                    record.category,
                    currency_symbol,
                    record.amount
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| ExpenseError::Export(e.to_string());

        csv_writer
            .write_record(["Section", "Label", "Amount"])
            .map_err(export_err)?;
        let total = format!("{:.2}", self.total);
        csv_writer
            .write_record(["Total", "", total.as_str()])
            .map_err(export_err)?;

        let sections = [("Category", &self.by_category), ("Month", &self.by_month)];
        for (section, buckets) in sections {
            for (label, amount) in buckets.iter() {
                let amount = format!("{:.2}", amount);
                csv_writer
                    .write_record([section, label.as_str(), amount.as_str()])
                    .map_err(export_err)?;
            }
        }

        csv_writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        Ok(())
    }
}

fn lookup(buckets: &[(String, f64)], key: &str) -> Option<f64> {
    buckets
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, amount)| *amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-05", "Food", 100.0, "lunch"),
            Expense::new("2024-01-20", "Food", 50.0, ""),
            Expense::new("2024-02-01", "Transport", 30.0, "bus"),
        ]
    }

    #[test]
    fn test_concrete_scenario() {
        let report = summarize(&sample_expenses()).unwrap().unwrap();

        assert_eq!(report.total, 180.0);
        assert_eq!(
            report.by_category,
            vec![("Food".to_string(), 150.0), ("Transport".to_string(), 30.0)]
        );
        assert_eq!(
            report.by_month,
            vec![
                ("January 2024".to_string(), 150.0),
                ("February 2024".to_string(), 30.0)
            ]
        );
        assert_eq!(report.month_total("January 2024"), Some(150.0));
        assert_eq!(report.month_total("March 2024"), None);
        assert_eq!(report.expense_count, 3);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_empty_list_is_no_data() {
        assert!(summarize(&[]).unwrap().is_none());
        assert!(summarize_with(&[], InvalidDatePolicy::Skip).unwrap().is_none());
    }

    #[test]
    fn test_zero_total_is_still_a_report() {
        let expenses = vec![
            Expense::new("2024-03-01", "Refund", 25.0, ""),
            Expense::new("2024-03-02", "Refund", -25.0, ""),
        ];
        let report = summarize(&expenses).unwrap().unwrap();
        assert_eq!(report.total, 0.0);
        assert_eq!(report.category_total("Refund"), Some(0.0));
    }

    #[test]
    fn test_total_matches_sum_in_any_order() {
        let mut expenses = vec![
            Expense::new("2023-12-31", "Gifts", 19.99, ""),
            Expense::new("2024-01-01", "Food", 0.1, ""),
            Expense::new("2024-01-02", "Food", 0.2, ""),
            Expense::new("2024-06-15", "Travel", -5.5, ""),
        ];
        let expected: f64 = expenses.iter().map(|e| e.amount).sum();

        let forward = summarize(&expenses).unwrap().unwrap();
        expenses.reverse();
        let backward = summarize(&expenses).unwrap().unwrap();

        assert!((forward.total - expected).abs() < 1e-9);
        assert!((backward.total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_first_occurrence_order() {
        let expenses = vec![
            Expense::new("2024-02-01", "Transport", 1.0, ""),
            Expense::new("2024-01-01", "Food", 1.0, ""),
            Expense::new("2024-02-10", "Food", 1.0, ""),
        ];
        let report = summarize(&expenses).unwrap().unwrap();

        let categories: Vec<_> = report.by_category.iter().map(|(c, _)| c.as_str()).collect();
        let months: Vec<_> = report.by_month.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(categories, vec!["Transport", "Food"]);
        assert_eq!(months, vec!["February 2024", "January 2024"]);
    }

    #[test]
    fn test_abort_on_invalid_date() {
        let mut expenses = sample_expenses();
        expenses.insert(1, Expense::new("2024-02-30", "Food", 10.0, ""));

        let err = summarize(&expenses).unwrap_err();
        assert!(matches!(err, ExpenseError::DateParse { index: 1, ref date } if date == "2024-02-30"));
    }

    #[test]
    fn test_skip_invalid_date() {
        let mut expenses = sample_expenses();
        expenses.push(Expense::new("not-a-date", "Food", 999.0, ""));

        let report = summarize_with(&expenses, InvalidDatePolicy::Skip)
            .unwrap()
            .unwrap();

        assert_eq!(report.total, 180.0);
        assert_eq!(report.category_total("Food"), Some(150.0));
        assert_eq!(report.expense_count, 3);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 3);
    }

    #[test]
    fn test_all_skipped_is_still_some() {
        let expenses = vec![Expense::new("2024-13-01", "Food", 5.0, "")];
        let report = summarize_with(&expenses, InvalidDatePolicy::Skip)
            .unwrap()
            .unwrap();
        assert_eq!(report.total, 0.0);
        assert!(report.by_category.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_format_terminal() {
        let report = summarize(&sample_expenses()).unwrap().unwrap();
        let text = report.format_terminal("₹");

        assert_eq!(
            text,
            "Total Expenses: ₹180.00\n\nBy Category:\nFood: ₹150.00\nTransport: ₹30.00\n\n\
             By Month:\nJanuary 2024: ₹150.00\nFebruary 2024: ₹30.00\n"
        );
    }

    #[test]
    fn test_format_terminal_lists_skipped() {
        let expenses = vec![
            Expense::new("2024-01-05", "Food", 1.0, ""),
            Expense::new("2024-02-31", "Food", 2.0, ""),
        ];
        let report = summarize_with(&expenses, InvalidDatePolicy::Skip)
            .unwrap()
            .unwrap();
        let text = report.format_terminal("$");
        assert!(text.contains("Skipped 1 expense(s) with invalid dates"));
        assert!(text.contains("row 2: '2024-02-31' Food $2.00"));
    }

    #[test]
    fn test_export_csv() {
        let report = summarize(&sample_expenses()).unwrap().unwrap();
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Section,Label,Amount");
        assert_eq!(lines[1], "Total,,180.00");
        assert!(lines.contains(&"Category,Food,150.00"));
        assert!(lines.contains(&"Month,February 2024,30.00"));
    }
}

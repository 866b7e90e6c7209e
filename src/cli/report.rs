//! CLI command for the expense report
//!
//! Prints the summary to the terminal or writes it as CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::{InvalidDatePolicy, Settings};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Export to CSV file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave out records whose date is not a real calendar date
    #[arg(long)]
    pub skip_invalid_dates: bool,
}

/// Handle the report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> ExpenseResult<()> {
    let policy = if args.skip_invalid_dates {
        InvalidDatePolicy::Skip
    } else {
        settings.invalid_date_policy
    };

    let report = match ExpenseService::new(storage).report(policy)? {
        Some(report) => report,
        None => {
            println!("No data available.");
            return Ok(());
        }
    };

    if let Some(output_path) = args.output {
        let file = File::create(&output_path)?;
        report.export_csv(BufWriter::new(file))?;
        println!("Report exported to: {}", output_path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

//! CLI command for the audit history

use clap::Args;

use crate::display::format_audit_history;
use crate::error::ExpenseResult;
use crate::storage::Storage;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Print the most recent audit entries
pub fn handle_history_command(storage: &Storage, args: HistoryArgs) -> ExpenseResult<()> {
    let entries = storage.audit_logger().read_recent(args.limit)?;
    print!("{}", format_audit_history(&entries));
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_config_command, handle_expense_command, handle_export_command, handle_history_command,
    handle_report_command, ConfigArgs, ExpenseCommands, ExportArgs, HistoryArgs, ReportArgs,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track personal expenses and summarize them by category and month",
    long_about = "A small personal expense tracker. Expenses are kept in a single JSON \
                  file; reports total them overall, per category and per month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Summarize expenses by category and month
    Report(ReportArgs),

    /// Export all expenses
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths, or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&storage, &settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&storage, args)?;
        }
        Some(Commands::Init) => {
            println!(
                "Initializing expense tracker at: {}",
                paths.base_dir().display()
            );
            if paths.is_initialized() {
                println!("Settings already exist; keeping them.");
            }
            expense_tracker::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'expenses add <date> <category> <amount>' to log an expense.");
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, settings, args)?;
        }
        None => {
            println!("Expense Tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}

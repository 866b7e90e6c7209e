//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::ExpenseResult;
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON with a versioned envelope
    Json,
    /// YAML, same envelope, human-readable
    Yaml,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_export(storage, args.format, BufWriter::new(file))?;
            eprintln!("Exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(storage, args.format, &mut handle)?;
            if matches!(args.format, ExportFormat::Json) {
                writeln!(handle)?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(storage: &Storage, format: ExportFormat, writer: W) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(storage, writer),
        ExportFormat::Json => export_full_json(storage, writer),
        ExportFormat::Yaml => export_full_yaml(storage, writer),
    }
}

//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{FarmError, FarmResult};
use crate::export::{export_full_json, export_ledger_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// One ledger CSV holding expenses and sales
    Csv,
    /// Full snapshot as JSON
    Json,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path
    pub output: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle export
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> FarmResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        FarmError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            let rows = export_ledger_csv(storage, &mut writer)?;
            println!("Exported {} records to: {}", rows, args.output.display());
        }
        ExportFormat::Json => {
            export_full_json(storage, &mut writer, args.pretty)?;
            println!(
                "Exported {} expenses and {} sales to: {}",
                storage.expense_count(),
                storage.sale_count(),
                args.output.display()
            );
        }
    }

    writer
        .flush()
        .map_err(|e| FarmError::Export(e.to_string()))?;
    Ok(())
}

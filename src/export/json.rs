//! JSON export
//!
//! A full snapshot of both collections with schema versioning and summary
//! figures.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FarmError, FarmResult};
use crate::models::{Expense, Sale};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub sales: Vec<Sale>,

    pub metadata: ExportMetadata,
}

/// Summary figures stored alongside the records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub sale_count: usize,
    /// Sum of every expense cost
    pub total_expenses: f64,
    /// Sum of every sale cost
    pub total_sales: f64,
    pub earliest_record: Option<DateTime<Utc>>,
    pub latest_record: Option<DateTime<Utc>>,
}

impl FullExport {
    /// Snapshot the store
    pub fn from_storage(storage: &Storage) -> Self {
        let expenses = storage.list_expenses();
        let sales = storage.list_sales();

        let dates = || expenses.iter().map(|e| e.date).chain(sales.iter().map(|s| s.date));
        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            sale_count: sales.len(),
            total_expenses: expenses.iter().map(|e| e.cost).sum(),
            total_sales: sales.iter().map(|s| s.cost).sum(),
            earliest_record: dates().min(),
            latest_record: dates().max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            sales,
            metadata,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> FarmResult<()> {
    let export = FullExport::from_storage(storage);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FarmError::Export(e.to_string()))?;

    Ok(())
}

//! Export module for farm-ledger
//!
//! - CSV: one ledger file holding expenses and sales (spreadsheet-compatible)
//! - JSON: full machine-readable snapshot

pub mod csv;
pub mod json;

pub use self::csv::export_ledger_csv;
pub use self::json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};

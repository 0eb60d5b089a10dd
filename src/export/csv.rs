//! CSV export
//!
//! Both collections go into one ledger file, one row per record, oldest
//! first. Expense rows leave the sale columns empty and the other way round.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{FarmError, FarmResult};
use crate::models::{Expense, Record, RecordKind, Sale};
use crate::storage::Storage;

#[derive(Debug, Serialize)]
struct LedgerRow {
    #[serde(rename = "Kind")]
    kind: RecordKind,
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Animal")]
    animal: String,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Category")]
    category: Option<String>,
    #[serde(rename = "Buyer")]
    buyer: Option<String>,
    #[serde(rename = "Quantity")]
    amount: f64,
    #[serde(rename = "Cost")]
    cost: String,
}

impl From<&Expense> for LedgerRow {
    fn from(expense: &Expense) -> Self {
        Self {
            kind: RecordKind::Expense,
            id: expense.id.as_uuid().to_string(),
            date: expense.date.to_rfc3339(),
            animal: expense.animal_type.label().to_string(),
            name: Some(expense.name.clone()),
            category: None,
            buyer: None,
            amount: expense.amount,
            cost: format!("{:.2}", expense.cost),
        }
    }
}

impl From<&Sale> for LedgerRow {
    fn from(sale: &Sale) -> Self {
        Self {
            kind: RecordKind::Sale,
            id: sale.id.as_uuid().to_string(),
            date: sale.date.to_rfc3339(),
            animal: sale.animal_type.label().to_string(),
            name: None,
            category: Some(sale.display_category().to_string()),
            buyer: sale.buyer.clone(),
            amount: sale.amount,
            cost: format!("{:.2}", sale.cost),
        }
    }
}

/// Export every expense and sale to CSV, returning the row count
pub fn export_ledger_csv<W: Write>(storage: &Storage, writer: W) -> FarmResult<usize> {
    let mut rows: Vec<(DateTime<Utc>, LedgerRow)> = storage
        .list_expenses()
        .iter()
        .map(|e| (e.date(), LedgerRow::from(e)))
        .chain(storage.list_sales().iter().map(|s| (s.date(), LedgerRow::from(s))))
        .collect();
    rows.sort_by_key(|(date, _)| *date);

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (_, row) in &rows {
        csv_writer.serialize(row)?;
    }
    csv_writer
        .flush()
        .map_err(|e| FarmError::Export(e.to_string()))?;

    Ok(rows.len())
}

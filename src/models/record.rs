//! Behavior shared by expenses and sales
//!
//! The store and the statistics engine are written once against this trait.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use super::ids::{ExpenseId, SaleId};

/// Which collection a record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Expense,
    Sale,
}

impl RecordKind {
    /// Fixed storage key of the collection
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Expense => "farm_expenses",
            Self::Sale => "farm_sales",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Sale => write!(f, "Sale"),
        }
    }
}

/// Typed pointer to a record in either collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordRef {
    Expense(ExpenseId),
    Sale(SaleId),
}

impl RecordRef {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Expense(_) => RecordKind::Expense,
            Self::Sale(_) => RecordKind::Sale,
        }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense(id) => write!(f, "{}", id),
            Self::Sale(id) => write!(f, "{}", id),
        }
    }
}

/// A persisted record with an immutable id and creation date
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    const KIND: RecordKind;

    fn id(&self) -> Self::Id;

    fn reference(&self) -> RecordRef;

    fn date(&self) -> DateTime<Utc>;

    /// Monetary total used by the statistics
    fn cost(&self) -> f64;

    /// Short human description used in logs and the audit trail
    fn describe(&self) -> String;
}

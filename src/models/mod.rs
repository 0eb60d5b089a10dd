//! Core data models for farm-ledger
//!
//! Expenses, sales, their classifications, and the calendar periods the
//! dashboard aggregates over.

pub mod animal;
pub mod expense;
pub mod ids;
pub mod period;
pub mod quantity;
pub mod record;
pub mod sale;

pub use animal::{AnimalType, ProductCategory};
pub use expense::Expense;
pub use ids::{ExpenseId, SaleId};
pub use period::Period;
pub use quantity::{parse_cost, parse_quantity, QuantityParseError};
pub use record::{Record, RecordKind, RecordRef};
pub use sale::{Sale, SaleValidationError};

//! Service layer for farm-ledger
//!
//! Services sit on top of the record store. The record services own input
//! validation; the statistics service is read-only aggregation.

pub mod expense;
pub mod sale;
pub mod statistics;
mod validation;

pub use expense::{ExpenseInput, ExpenseService};
pub use sale::{SaleInput, SaleService};
pub use statistics::{Dashboard, PeriodSummary, StatisticsService, DEFAULT_TOP_N};

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod export;
pub mod sale;
pub mod stats;

pub use audit::handle_audit_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use sale::{handle_sale_command, SaleCommands};
pub use stats::{handle_stats_command, StatsArgs};

use crate::models::{AnimalType, Period, ProductCategory};

/// clap value parser for animal names
pub(crate) fn parse_animal(s: &str) -> Result<AnimalType, String> {
    AnimalType::parse(s).ok_or_else(|| {
        let labels: Vec<&str> = AnimalType::ALL.iter().map(|a| a.label()).collect();
        format!("unknown animal '{}' (expected one of: {})", s, labels.join(", "))
    })
}

/// clap value parser for product categories
pub(crate) fn parse_category(s: &str) -> Result<ProductCategory, String> {
    ProductCategory::parse(s).ok_or_else(|| {
        let labels: Vec<&str> = ProductCategory::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category '{}' (expected one of: {})", s, labels.join(", "))
    })
}

/// clap value parser for dashboard periods
pub(crate) fn parse_period(s: &str) -> Result<Period, String> {
    Period::parse(s).ok_or_else(|| {
        let names: Vec<String> = Period::ALL.iter().map(|p| p.to_string().to_lowercase()).collect();
        format!("unknown period '{}' (expected one of: {})", s, names.join(", "))
    })
}

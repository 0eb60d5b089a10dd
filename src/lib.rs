//! farm-ledger - farm expense and sales tracking
//!
//! This library provides the core of the `farm` command: a record store for
//! expenses and sales with snapshot persistence, and a statistics engine for
//! period totals and top-N groupings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, enumerations, ids and input parsing
//! - `storage`: Key-value backends and the record store
//! - `services`: Validated write path and statistics
//! - `audit`: Audit logging system
//! - `export`: CSV and JSON export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use farm_ledger::config::{FarmPaths, Settings};
//! use farm_ledger::services::StatisticsService;
//! use farm_ledger::storage::Storage;
//!
//! let paths = FarmPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings)?;
//! let dashboard = StatisticsService::new(&storage).dashboard_now();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FarmError, FarmResult};

//! Configuration module for farm-ledger
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FarmPaths;
pub use settings::Settings;

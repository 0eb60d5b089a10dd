//! Audit logging for farm-ledger
//!
//! Every create, update and delete performed through the record store is
//! appended to a line-delimited JSON log with before/after snapshots.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries to and reads them from the log file
//! - `field_changes`: summary of what an update changed

mod diff;
mod entry;
mod logger;

pub use diff::field_changes;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

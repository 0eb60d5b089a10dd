//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::field_changes;
use crate::models::{Record, RecordKind};

/// Kind of mutation recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// One line of the audit log
///
/// `before` is set for updates and deletes, `after` for creates and updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: RecordKind,

    /// Short id of the record, e.g. `exp-1a2b3c4d`
    pub entity_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Changed fields, for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn blank<R: Record>(operation: Operation, record: &R) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type: R::KIND,
            entity_id: record.id().to_string(),
            entity_name: Some(record.describe()),
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn created<R: Record>(record: &R) -> Self {
        Self {
            after: serde_json::to_value(record).ok(),
            ..Self::blank(Operation::Create, record)
        }
    }

    pub fn updated<R: Record>(before: &R, after: &R) -> Self {
        let before = serde_json::to_value(before).ok();
        let after_value = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after_value) {
            (Some(b), Some(a)) => field_changes(b, a),
            _ => None,
        };

        Self {
            before,
            after: after_value,
            diff_summary,
            ..Self::blank(Operation::Update, after)
        }
    }

    pub fn deleted<R: Record>(record: &R) -> Self {
        Self {
            before: serde_json::to_value(record).ok(),
            ..Self::blank(Operation::Delete, record)
        }
    }

    /// One-line (plus changes) rendering for the terminal
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

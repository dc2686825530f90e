//! Append-only operation log for the registry.
//!
//! Every successful mutating registry call lands exactly one entry here.
//! Entries are never removed or reordered, so the log is a faithful replay
//! of the roster's history. Backed by a `Vec`, which gives the required
//! O(1) amortized append and stable iteration order.

use chrono::{DateTime, Utc};

use crate::domain::models::audit::AuditEntry;

#[derive(Debug, Clone, Default)]
pub struct OperationLog {
    entries: Vec<AuditEntry>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an operation at the end of the log.
    ///
    /// The timestamp is supplied by the caller rather than read from the
    /// clock here, so the log itself stays deterministic under test.
    pub fn append(&mut self, at: DateTime<Utc>, message: String) {
        self.entries.push(AuditEntry { at, message });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot the full history as formatted lines, oldest first.
    ///
    /// Returns a fresh copy each call; the caller cannot reach the log's
    /// internals through the result.
    pub fn as_lines(&self) -> Vec<String> {
        self.entries.iter().map(AuditEntry::formatted_line).collect()
    }
}

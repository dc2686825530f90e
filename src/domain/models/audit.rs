//! Domain model for an operation log entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded operation: when it happened and a human-readable description.
/// Entries are immutable once created and ordered only by append sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl AuditEntry {
    /// Render the entry as a single log line: `[YYYY-MM-DD HH:MM:SS] message`.
    pub fn formatted_line(&self) -> String {
        format!("[{}] {}", self.at.format("%Y-%m-%d %H:%M:%S"), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formatted_line() {
        let entry = AuditEntry {
            at: Utc.with_ymd_and_hms(2025, 6, 13, 9, 30, 5).unwrap(),
            message: "ENROLL: 123 (Ana) - plan Basic".to_string(),
        };

        assert_eq!(
            entry.formatted_line(),
            "[2025-06-13 09:30:05] ENROLL: 123 (Ana) - plan Basic"
        );
    }
}

//! # Calculation History
//!
//! Every explicit calculation can be recorded as a [`HistoryRecord`]: the
//! input snapshot plus a handful of headline figures. Records are kept
//! newest-first in a [`HistoryLog`], which serializes to a human-readable JSON
//! file (see [`crate::file_io`] for atomic saves).
//!
//! ## Structure
//!
//! ```text
//! HistoryLog
//! ├── meta: HistoryMetadata (schema version, timestamps)
//! └── records: Vec<HistoryRecord> (newest first)
//!     ├── id, timestamp
//!     ├── inputs: FanInput
//!     └── summary: DesignSummary
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fan_core::history::HistoryLog;
//! use fan_core::{design, FanInput};
//!
//! let mut log = HistoryLog::new();
//! let input = FanInput::default();
//! let id = log.record(&input, &design(&input));
//! assert!(log.get(&id).is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::design::{DesignResult, DesignSummary};
use crate::errors::{CalcError, CalcResult};
use crate::inputs::FanInput;

/// Current schema version for history files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One recorded calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique record id
    pub id: Uuid,

    /// When the calculation was run
    pub timestamp: DateTime<Utc>,

    /// Input snapshot; re-running it reproduces the design exactly
    pub inputs: FanInput,

    /// Headline figures at the time of the run
    pub summary: DesignSummary,
}

impl HistoryRecord {
    /// Create a record for a finished design, stamped now
    pub fn new(inputs: &FanInput, result: &DesignResult) -> Self {
        HistoryRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            inputs: *inputs,
            summary: result.summary(),
        }
    }
}

/// History file header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the log was created
    pub created: DateTime<Utc>,

    /// When the log was last modified
    pub modified: DateTime<Utc>,
}

/// Newest-first list of recorded calculations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryLog {
    pub meta: HistoryMetadata,

    /// Records, newest first
    pub records: Vec<HistoryRecord>,
}

impl HistoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        let now = Utc::now();
        HistoryLog {
            meta: HistoryMetadata {
                version: SCHEMA_VERSION.to_string(),
                created: now,
                modified: now,
            },
            records: Vec::new(),
        }
    }

    /// Insert a record at the front
    pub fn add(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.touch();
    }

    /// Record a finished design and return its id
    pub fn record(&mut self, inputs: &FanInput, result: &DesignResult) -> Uuid {
        let record = HistoryRecord::new(inputs, result);
        let id = record.id;
        self.add(record);
        id
    }

    /// Get a record by id
    pub fn get(&self, id: &Uuid) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// Remove a record by id, returning it if it existed
    pub fn remove(&mut self, id: &Uuid) -> Option<HistoryRecord> {
        let index = self.records.iter().position(|r| r.id == *id)?;
        let record = self.records.remove(index);
        self.touch();
        Some(record)
    }

    /// Resolve a full id or a unique id prefix (as shown by `history list`)
    pub fn find_by_prefix(&self, prefix: &str) -> CalcResult<&HistoryRecord> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Err(CalcError::record_not_found(prefix));
        }
        let mut matches = self
            .records
            .iter()
            .filter(|r| r.id.to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (Some(_), Some(_)) => Err(CalcError::invalid_input(
                "id",
                prefix,
                "Prefix matches more than one record",
            )),
            (None, _) => Err(CalcError::record_not_found(prefix)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        HistoryLog::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::design;

    fn recorded(log: &mut HistoryLog, flow: f64) -> Uuid {
        let input = FanInput {
            flow_rate_cfm: flow,
            ..FanInput::default()
        };
        log.record(&input, &design(&input))
    }

    #[test]
    fn test_newest_first() {
        let mut log = HistoryLog::new();
        let first = recorded(&mut log, 1000.0);
        let second = recorded(&mut log, 2000.0);
        assert_eq!(log.len(), 2);
        assert_eq!(log.records[0].id, second);
        assert_eq!(log.records[1].id, first);
        assert_eq!(log.records[0].summary.flow_rate_cfm, 2000.0);
    }

    #[test]
    fn test_remove() {
        let mut log = HistoryLog::new();
        let id = recorded(&mut log, 1000.0);
        assert!(log.remove(&id).is_some());
        assert!(log.remove(&id).is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_find_by_prefix() {
        let mut log = HistoryLog::new();
        let id = recorded(&mut log, 1000.0);
        let full = id.to_string();
        assert_eq!(log.find_by_prefix(&full[..8]).unwrap().id, id);
        assert_eq!(log.find_by_prefix(&full.to_uppercase()).unwrap().id, id);
        assert!(matches!(
            log.find_by_prefix("zzzz"),
            Err(CalcError::RecordNotFound { .. })
        ));
        assert!(log.find_by_prefix("").is_err());
    }

    #[test]
    fn test_serialization() {
        let mut log = HistoryLog::new();
        let id = recorded(&mut log, 1500.0);
        let json = serde_json::to_string_pretty(&log).unwrap();
        assert!(json.contains(SCHEMA_VERSION));
        assert!(json.contains(&id.to_string()));

        let roundtrip: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.len(), 1);
        assert_eq!(roundtrip.records[0].id, id);
        assert_eq!(roundtrip.records[0].inputs.flow_rate_cfm, 1500.0);
    }
}

//! Audit sink implementations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;
use tracing::warn;
use veracity_core::errors::AuditError;
use veracity_core::models::AuditRecord;
use veracity_core::traits::IAuditSink;

/// Append-only, line-oriented audit log: one JSON object per line.
///
/// Records are timestamped at write time. Every internal failure is
/// swallowed after a warning — the caller can never observe one.
pub struct JsonlAuditSink {
    path: PathBuf,
}

impl JsonlAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// The fallible inner append; `record` discards its error.
    fn try_append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let mut stamped = record.clone();
        stamped.timestamp_epoch_ms = Utc::now().timestamp_millis();

        let line =
            serde_json::to_string(&stamped).map_err(|e| AuditError::Serialization {
                audit_id: record.audit_id.clone(),
                reason: e.to_string(),
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AuditError::Io {
                    path: parent.display().to_string(),
                    reason: e.to_string(),
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AuditError::Io {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        writeln!(file, "{line}").map_err(|e| AuditError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl IAuditSink for JsonlAuditSink {
    fn record(&self, record: &AuditRecord) {
        if let Err(e) = self.try_append(record) {
            warn!(
                audit_id = %record.audit_id,
                error = %e,
                "audit append failed; record dropped"
            );
        }
    }
}

/// Discards every record. For benchmarks and callers that opt out.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuditSink;

impl IAuditSink for NullAuditSink {
    fn record(&self, _record: &AuditRecord) {}
}

/// In-memory sink for tests: captures records for inspection.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IAuditSink for MemoryAuditSink {
    fn record(&self, record: &AuditRecord) {
        if let Ok(mut records) = self.records.lock() {
            let mut stamped = record.clone();
            stamped.timestamp_epoch_ms = Utc::now().timestamp_millis();
            records.push(stamped);
        }
    }
}

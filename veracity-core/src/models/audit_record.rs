use serde::{Deserialize, Serialize};

use super::{ClaimResult, Decision, Metrics};

/// The request fields preserved in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditInput {
    pub generated_text: String,
    pub policy_profile: String,
}

/// Immutable account of one pipeline invocation.
///
/// Exactly one record is produced per invocation, on every code path,
/// including the error path. The sink stamps `timestamp` at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub audit_id: String,
    pub domain: String,
    pub input: AuditInput,
    pub claims: Vec<ClaimResult>,
    pub metrics: Metrics,
    pub decision: Decision,
    /// Epoch milliseconds, assigned by the sink when the record is written.
    #[serde(rename = "timestamp", default)]
    pub timestamp_epoch_ms: i64,
    /// Fault description when `decision == ERROR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Free-form annotation, e.g. the insufficient-claims short-circuit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AuditRecord {
    /// Build a record for a completed run. The timestamp is left at zero;
    /// the sink assigns it at write time.
    pub fn new(
        audit_id: impl Into<String>,
        domain: impl Into<String>,
        input: AuditInput,
        claims: Vec<ClaimResult>,
        metrics: Metrics,
        decision: Decision,
    ) -> Self {
        Self {
            audit_id: audit_id.into(),
            domain: domain.into(),
            input,
            claims,
            metrics,
            decision,
            timestamp_epoch_ms: 0,
            error: None,
            note: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

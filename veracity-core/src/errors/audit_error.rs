/// Audit sink errors.
///
/// Internal to the sink: `IAuditSink::record` swallows these after logging,
/// so audit failure is never conflated with a safety failure.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("failed to serialize audit record {audit_id}: {reason}")]
    Serialization { audit_id: String, reason: String },

    #[error("failed to append to audit log {path}: {reason}")]
    Io { path: String, reason: String },
}

//! Data model for one verification request.
//!
//! Everything here is created fresh per request and discarded after the
//! response and audit record are produced; nothing is cached across requests.

mod audit_record;
mod claim_result;
mod decision;
mod evidence;
mod metrics;
mod request;
mod similarity;
mod verdict;

pub use audit_record::{AuditInput, AuditRecord};
pub use claim_result::ClaimResult;
pub use decision::Decision;
pub use evidence::EvidenceItem;
pub use metrics::{round3, Metrics};
pub use request::{VerificationRequest, VerificationResponse};
pub use similarity::Similarity;
pub use verdict::{TruthLabel, Verdict};

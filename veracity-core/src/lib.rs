//! # veracity-core
//!
//! Foundation crate for the Veracity verification system.
//! Defines all types, traits, errors, policy configuration, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ExtractionMode, Policy, PolicyStore};
pub use errors::{VeracityError, VeracityResult};
pub use models::{
    AuditRecord, ClaimResult, Decision, EvidenceItem, Metrics, Similarity, TruthLabel,
    VerificationRequest, VerificationResponse, Verdict,
};

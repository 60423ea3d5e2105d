//! Error taxonomy for the verification pipeline.
//!
//! Each subsystem owns a small error enum; `VeracityError` wraps them at the
//! pipeline boundary. Only a `VeracityError` ever crosses that boundary, and
//! there it is collapsed to `Decision::Error` — callers never see a raised
//! fault from within the core.

mod audit_error;
mod config_error;
mod corpus_error;
mod retrieval_error;
mod semantic_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use retrieval_error::RetrievalError;
pub use semantic_error::SemanticError;

/// Top-level error for the Veracity system.
#[derive(Debug, thiserror::Error)]
pub enum VeracityError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),

    #[error("audit error: {0}")]
    Audit(#[from] AuditError),
}

/// Convenience result alias used across the workspace.
pub type VeracityResult<T> = Result<T, VeracityError>;

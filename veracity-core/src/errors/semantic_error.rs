/// Similarity provider errors.
///
/// These never escape the truth classifier — the provider chain degrades to
/// a neutral score instead — but individual providers report them.
#[derive(Debug, thiserror::Error)]
pub enum SemanticError {
    #[error("provider {name} is unavailable")]
    ProviderUnavailable { name: String },

    #[error("failed to load model {name}: {reason}")]
    ModelLoadFailed { name: String, reason: String },

    #[error("scoring failed: {reason}")]
    ScoringFailed { reason: String },
}

use crate::errors::VeracityResult;

/// Semantic similarity backend for claim/evidence scoring.
pub trait ISimilarityProvider: Send + Sync {
    /// Similarity between a claim and an evidence passage. Implementations
    /// should return values in [0.0, 1.0]; callers clamp defensively.
    fn similarity(&self, claim: &str, evidence: &str) -> VeracityResult<f64>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}

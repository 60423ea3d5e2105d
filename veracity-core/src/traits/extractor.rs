use crate::config::ExtractionMode;

/// Claim segmentation strategy.
///
/// Implementations must be deterministic for identical input, return at most
/// `max_claims` claims, and never panic on long or malformed text.
pub trait IClaimExtractor: Send + Sync {
    /// Extract an ordered, bounded sequence of atomic claim strings.
    fn extract(&self, text: &str, mode: ExtractionMode, max_claims: usize) -> Vec<String>;

    /// Human-readable strategy name.
    fn name(&self) -> &str;
}

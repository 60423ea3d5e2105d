use crate::errors::VeracityResult;
use crate::models::EvidenceItem;

/// Ranked evidence lookup against the read-only corpus.
pub trait IEvidenceRetriever: Send + Sync {
    /// Return at most `top_k` evidence items for the claim, sorted by
    /// relevance descending, ties broken by corpus insertion order.
    /// Deterministic for a fixed corpus and claim.
    fn retrieve(&self, claim: &str, top_k: usize) -> VeracityResult<Vec<EvidenceItem>>;

    /// Number of documents in the corpus.
    fn corpus_size(&self) -> usize;
}

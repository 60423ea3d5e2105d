use serde::{Deserialize, Serialize};

/// A ranked passage retrieved from the corpus as a support/refutation
/// candidate for a claim. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Stable identifier derived from corpus insertion order.
    pub source_id: String,
    pub text: String,
    /// BM25 relevance against the claim, rounded to 3 decimals.
    pub relevance_score: f64,
}

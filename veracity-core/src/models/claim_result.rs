use serde::{Deserialize, Serialize};

use super::TruthLabel;

/// The claim-level verdict after reduction across all evidence items
/// retrieved for the claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResult {
    pub claim: String,
    pub label: TruthLabel,
    /// Semantic score of the selected verdict.
    pub score: f64,
    /// Identifiers of every evidence item considered — not just the winning
    /// one — for audit traceability.
    pub evidence_ids: Vec<String>,
}

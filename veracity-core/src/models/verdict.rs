use serde::{Deserialize, Serialize};
use std::fmt;

/// Truth label for one (claim, evidence) pair. A closed set — no other
/// values are valid anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruthLabel {
    /// Evidence supports the claim.
    Verified,
    /// Evidence contradicts the claim.
    Refuted,
    /// Evidence neither supports nor contradicts the claim.
    Unsupported,
    /// Bare universal/superlative claim with no grounding — treated with
    /// extra suspicion downstream even though it is not an outright
    /// contradiction.
    RiskyAbsolute,
}

impl fmt::Display for TruthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TruthLabel::Verified => "VERIFIED",
            TruthLabel::Refuted => "REFUTED",
            TruthLabel::Unsupported => "UNSUPPORTED",
            TruthLabel::RiskyAbsolute => "RISKY_ABSOLUTE",
        };
        f.write_str(s)
    }
}

/// Classification of one claim against one evidence passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: TruthLabel,
    /// Semantic similarity in [0.0, 1.0], rounded to 3 decimals.
    pub semantic_score: f64,
    /// |shared tokens| / |claim tokens| — claim-normalized, not symmetric.
    pub lexical_overlap: f64,
}

//! Truth classification of one claim against one evidence passage.
//!
//! Precedence encodes the safety posture — order matters:
//! 1. phrase grounding verifies (highest confidence, bypasses thresholds);
//! 2. absolute + negation refutes (universal negative claims default to
//!    contradiction unless explicitly grounded);
//! 3. semantic or lexical threshold support verifies;
//! 4. bare absolutes are flagged risky; everything else is unsupported.

use tracing::debug;
use veracity_core::constants::{LEXICAL_SUPPORT_THRESHOLD, SEMANTIC_SUPPORT_THRESHOLD};
use veracity_core::models::{round3, TruthLabel, Verdict};
use veracity_semantic::FallbackChain;

use crate::grounding::GroundingTable;
use crate::signals;

/// Classification thresholds and grounding table.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Semantic similarity at or above this verifies.
    pub semantic_support_threshold: f64,
    /// Claim-normalized lexical overlap at or above this verifies.
    pub lexical_support_threshold: f64,
    pub grounding: GroundingTable,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            semantic_support_threshold: SEMANTIC_SUPPORT_THRESHOLD,
            lexical_support_threshold: LEXICAL_SUPPORT_THRESHOLD,
            grounding: GroundingTable::clinical(),
        }
    }
}

/// Scores one claim against one evidence passage and emits a truth label
/// with its supporting signals. Total: never fails, never panics.
pub struct TruthClassifier {
    config: ClassifierConfig,
    similarity: FallbackChain,
}

impl TruthClassifier {
    pub fn new(similarity: FallbackChain) -> Self {
        Self {
            config: ClassifierConfig::default(),
            similarity,
        }
    }

    pub fn with_config(similarity: FallbackChain, config: ClassifierConfig) -> Self {
        Self { config, similarity }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a claim against an evidence passage.
    pub fn classify(&self, claim: &str, evidence: &str) -> Verdict {
        let claim_l = claim.to_lowercase();
        let evidence_l = evidence.to_lowercase();

        let claim_tokens = signals::token_set(claim);
        let evidence_tokens = signals::token_set(evidence);

        let semantic = self.similarity.score(claim, evidence).value();
        let overlap = signals::lexical_overlap(&claim_tokens, &evidence_tokens);

        let has_absolute = signals::has_absolute(&claim_tokens);
        let has_negation = signals::has_negation(&claim_tokens);

        // 1. Phrase grounding — literal agreement on a canonical phrase.
        if let Some(topic) = self.config.grounding.matching_topic(&claim_l, &evidence_l) {
            debug!(topic, "claim grounded on canonical phrase");
            return verdict(TruthLabel::Verified, semantic, overlap);
        }

        // 2. Absolute negation ("never used", "always avoid") is treated as
        //    a contradiction unless rule 1 already grounded it.
        if has_absolute && has_negation {
            debug!(semantic, overlap, "absolute negation override");
            return verdict(TruthLabel::Refuted, semantic, overlap);
        }

        // 3. Threshold support.
        if semantic >= self.config.semantic_support_threshold
            || overlap >= self.config.lexical_support_threshold
        {
            return verdict(TruthLabel::Verified, semantic, overlap);
        }

        // 4. A bare universal claim without grounding or support is its own
        //    suspicion class; everything else is merely unsupported.
        if has_absolute {
            return verdict(TruthLabel::RiskyAbsolute, semantic, overlap);
        }
        verdict(TruthLabel::Unsupported, semantic, overlap)
    }
}

fn verdict(label: TruthLabel, semantic: f64, overlap: f64) -> Verdict {
    Verdict {
        label,
        semantic_score: round3(semantic),
        lexical_overlap: round3(overlap),
    }
}

//! Deterministic lexical similarity fallback.
//!
//! Jaccard overlap over lowercased whitespace token sets. Not as
//! semantically rich as neural embeddings, but always available and fully
//! deterministic — the reduced configuration used for testing and when the
//! embedding backend is absent.

use std::collections::HashSet;

use veracity_core::errors::VeracityResult;
use veracity_core::traits::ISimilarityProvider;

/// Token-set Jaccard similarity provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalOverlapProvider;

impl LexicalOverlapProvider {
    pub fn new() -> Self {
        Self
    }

    fn token_set(text: &str) -> HashSet<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn jaccard(claim: &str, evidence: &str) -> f64 {
        let a = Self::token_set(claim);
        let b = Self::token_set(evidence);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let shared = a.intersection(&b).count();
        let union = a.len() + b.len() - shared;
        shared as f64 / union as f64
    }
}

impl ISimilarityProvider for LexicalOverlapProvider {
    fn similarity(&self, claim: &str, evidence: &str) -> VeracityResult<f64> {
        Ok(Self::jaccard(claim, evidence))
    }

    fn name(&self) -> &str {
        "lexical-overlap"
    }

    fn is_available(&self) -> bool {
        true // No external dependencies.
    }
}

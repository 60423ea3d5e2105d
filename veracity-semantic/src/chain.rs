//! Provider fallback chain.
//!
//! Tries providers in priority order. On failure, logs a degradation warning
//! and moves to the next provider; if every provider fails, substitutes the
//! neutral score. Scoring through the chain is total — classification never
//! raises because of a similarity backend.

use tracing::warn;
use veracity_core::errors::VeracityResult;
use veracity_core::models::Similarity;
use veracity_core::traits::ISimilarityProvider;

use crate::providers::LexicalOverlapProvider;

/// Ordered similarity provider chain with neutral-score degradation.
pub struct FallbackChain {
    providers: Vec<Box<dyn ISimilarityProvider>>,
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackChain {
    /// An empty chain. `score` on an empty chain yields the neutral score.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// The standard configuration: neural provider when the `embeddings`
    /// feature is enabled and the model loads, lexical overlap as the
    /// always-available last resort.
    pub fn with_default_providers() -> Self {
        let mut chain = Self::new();

        #[cfg(feature = "embeddings")]
        match crate::providers::NeuralProvider::load_default() {
            Ok(provider) => chain.push(Box::new(provider)),
            Err(e) => warn!(error = %e, "neural provider unavailable; lexical fallback only"),
        }

        chain.push(Box::new(LexicalOverlapProvider::new()));
        chain
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn ISimilarityProvider>) {
        self.providers.push(provider);
    }

    /// Name of the first available provider, for diagnostics.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Score a (claim, evidence) pair. Total: provider failures degrade to
    /// the next provider and ultimately to `Similarity::NEUTRAL`.
    pub fn score(&self, claim: &str, evidence: &str) -> Similarity {
        for provider in &self.providers {
            if !provider.is_available() {
                continue;
            }
            match provider.similarity(claim, evidence) {
                Ok(score) => return Similarity::new(score),
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "similarity provider failed; degrading"
                    );
                }
            }
        }
        Similarity::NEUTRAL
    }
}

impl ISimilarityProvider for FallbackChain {
    fn similarity(&self, claim: &str, evidence: &str) -> VeracityResult<f64> {
        Ok(self.score(claim, evidence).value())
    }

    fn name(&self) -> &str {
        "fallback-chain"
    }

    fn is_available(&self) -> bool {
        true
    }
}

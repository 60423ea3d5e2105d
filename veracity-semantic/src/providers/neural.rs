//! Neural embedding similarity provider (feature `embeddings`).
//!
//! Embeds claim and evidence with a sentence-embedding model via `fastembed`
//! and scores by cosine. Model inference is CPU-bound and potentially
//! multi-millisecond per call; callers needing responsiveness under load
//! should run classification on a bounded worker pool outside the core.

use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::debug;
use veracity_core::errors::{SemanticError, VeracityResult};
use veracity_core::traits::ISimilarityProvider;

/// Sentence-embedding cosine similarity provider.
pub struct NeuralProvider {
    /// The model is not `Sync`; the Mutex satisfies the `&self` trait
    /// surface.
    model: Mutex<TextEmbedding>,
    name: String,
}

impl NeuralProvider {
    /// Load the default MiniLM sentence encoder.
    pub fn load_default() -> VeracityResult<Self> {
        Self::load(EmbeddingModel::AllMiniLML6V2, "all-MiniLM-L6-v2")
    }

    /// Load a specific fastembed model.
    pub fn load(model: EmbeddingModel, name: &str) -> VeracityResult<Self> {
        let embedding = TextEmbedding::try_new(InitOptions::new(model)).map_err(|e| {
            SemanticError::ModelLoadFailed {
                name: name.to_string(),
                reason: e.to_string(),
            }
        })?;
        debug!(model = name, "neural similarity provider loaded");
        Ok(Self {
            model: Mutex::new(embedding),
            name: name.to_string(),
        })
    }

    fn cosine(a: &[f32], b: &[f32]) -> f64 {
        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a <= f32::EPSILON || norm_b <= f32::EPSILON {
            return 0.0;
        }
        f64::from(dot / (norm_a * norm_b))
    }
}

impl ISimilarityProvider for NeuralProvider {
    fn similarity(&self, claim: &str, evidence: &str) -> VeracityResult<f64> {
        let mut model = self.model.lock().map_err(|_| SemanticError::ScoringFailed {
            reason: "model lock poisoned".to_string(),
        })?;
        let embeddings = model
            .embed(vec![claim, evidence], None)
            .map_err(|e| SemanticError::ScoringFailed {
                reason: e.to_string(),
            })?;
        match embeddings.as_slice() {
            [a, b] => Ok(Self::cosine(a, b)),
            _ => Err(SemanticError::ScoringFailed {
                reason: format!("expected 2 embeddings, got {}", embeddings.len()),
            }
            .into()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}

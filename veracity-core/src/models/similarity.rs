use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic similarity score clamped to [0.0, 1.0].
///
/// Provider backends may produce values slightly outside the range (raw
/// cosine is in [-1.0, 1.0]); construction clamps so downstream threshold
/// checks are total.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Similarity(f64);

impl Similarity {
    /// Neutral score substituted when every provider fails.
    pub const NEUTRAL: Similarity = Similarity(0.0);

    /// Create a new Similarity, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Similarity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Similarity> for f64 {
    fn from(s: Similarity) -> Self {
        s.0
    }
}

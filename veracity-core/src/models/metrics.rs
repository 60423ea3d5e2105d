use serde::{Deserialize, Serialize};

/// Round to 3 decimals — the precision of every reported score and rate.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Derived reporting metrics for one verification run.
///
/// Computed over the dominant claim cluster as a representative-sample
/// diagnostic. Never authoritative for the decision. Serializes to `{}`
/// when empty (the insufficient-claims and error paths).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contradiction_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insufficient_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hallucination_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_semantic_score: Option<f64>,
}

impl Metrics {
    pub fn is_empty(&self) -> bool {
        self.support_rate.is_none()
            && self.contradiction_rate.is_none()
            && self.insufficient_rate.is_none()
            && self.hallucination_rate.is_none()
            && self.avg_semantic_score.is_none()
    }
}

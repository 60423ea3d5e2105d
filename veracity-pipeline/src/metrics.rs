//! Reporting metrics over the dominant claim cluster.
//!
//! A representative-sample diagnostic. The decision never reads these.

use veracity_core::models::{round3, ClaimResult, Metrics, TruthLabel};

/// Compute metrics over one cluster (normally the dominant one).
pub fn compute_metrics(cluster: &[&ClaimResult]) -> Metrics {
    let total = cluster.len();
    if total == 0 {
        return Metrics::default();
    }

    let verified = cluster
        .iter()
        .filter(|c| c.label == TruthLabel::Verified)
        .count();
    let refuted = cluster
        .iter()
        .filter(|c| c.label == TruthLabel::Refuted)
        .count();
    let insufficient = cluster
        .iter()
        .filter(|c| matches!(c.label, TruthLabel::Unsupported | TruthLabel::RiskyAbsolute))
        .count();
    let avg_score = cluster.iter().map(|c| c.score).sum::<f64>() / total as f64;

    let rate = |count: usize| round3(count as f64 / total as f64);

    Metrics {
        support_rate: Some(rate(verified)),
        contradiction_rate: Some(rate(refuted)),
        insufficient_rate: Some(rate(insufficient)),
        hallucination_rate: Some(rate(total - verified)),
        avg_semantic_score: Some(round3(avg_score)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: TruthLabel, score: f64) -> ClaimResult {
        ClaimResult {
            claim: String::new(),
            label,
            score,
            evidence_ids: vec![],
        }
    }

    #[test]
    fn empty_cluster_yields_empty_metrics() {
        assert!(compute_metrics(&[]).is_empty());
    }

    #[test]
    fn fully_verified_cluster() {
        let a = result(TruthLabel::Verified, 0.9);
        let b = result(TruthLabel::Verified, 0.7);
        let m = compute_metrics(&[&a, &b]);
        assert_eq!(m.support_rate, Some(1.0));
        assert_eq!(m.contradiction_rate, Some(0.0));
        assert_eq!(m.hallucination_rate, Some(0.0));
        assert_eq!(m.avg_semantic_score, Some(0.8));
    }

    #[test]
    fn mixed_cluster_rates_are_rounded() {
        let a = result(TruthLabel::Verified, 0.9);
        let b = result(TruthLabel::Refuted, 0.1);
        let c = result(TruthLabel::RiskyAbsolute, 0.2);
        let m = compute_metrics(&[&a, &b, &c]);
        assert_eq!(m.support_rate, Some(0.333));
        assert_eq!(m.contradiction_rate, Some(0.333));
        assert_eq!(m.insufficient_rate, Some(0.333));
        assert_eq!(m.hallucination_rate, Some(0.667));
        assert_eq!(m.avg_semantic_score, Some(0.4));
    }
}

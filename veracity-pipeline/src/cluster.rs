//! Lexical claim clustering — for reporting metrics only, never for the
//! safety decision.

use std::collections::HashSet;

use veracity_core::models::ClaimResult;

/// Symmetric token-overlap ratio over the smaller token set.
pub fn token_overlap_ratio(a: &str, b: &str) -> f64 {
    let ta: HashSet<&str> = a.split_whitespace().collect();
    let tb: HashSet<&str> = b.split_whitespace().collect();
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let shared = ta.intersection(&tb).count();
    shared as f64 / ta.len().min(tb.len()) as f64
}

/// Incremental first-fit clustering: each claim joins the first existing
/// cluster whose representative (first member) exceeds the threshold, else
/// starts a new cluster. Clusters are returned largest-first; the stable
/// sort keeps formation order among equal sizes.
pub fn cluster_claims<'a>(
    results: &'a [ClaimResult],
    threshold: f64,
) -> Vec<Vec<&'a ClaimResult>> {
    let mut clusters: Vec<Vec<&ClaimResult>> = Vec::new();

    for result in results {
        let lowered = result.claim.to_lowercase();
        let placed = clusters.iter().position(|cluster| {
            token_overlap_ratio(&lowered, &cluster[0].claim.to_lowercase()) >= threshold
        });
        match placed {
            Some(idx) => clusters[idx].push(result),
            None => clusters.push(vec![result]),
        }
    }

    clusters.sort_by(|a, b| b.len().cmp(&a.len()));
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use veracity_core::models::TruthLabel;

    fn result(claim: &str) -> ClaimResult {
        ClaimResult {
            claim: claim.to_string(),
            label: TruthLabel::Unsupported,
            score: 0.0,
            evidence_ids: vec![],
        }
    }

    #[test]
    fn overlap_uses_the_smaller_token_set() {
        let r = token_overlap_ratio("a b", "a b c d");
        assert_eq!(r, 1.0);
        assert_eq!(token_overlap_ratio("a b c d", "a b"), 1.0);
    }

    #[test]
    fn empty_strings_never_overlap() {
        assert_eq!(token_overlap_ratio("", "a b"), 0.0);
    }

    #[test]
    fn similar_claims_share_a_cluster() {
        let results = vec![
            result("metformin is first line treatment"),
            result("metformin is the first line treatment choice"),
            result("markets rallied sharply on tuesday"),
        ];
        let clusters = cluster_claims(&results, 0.5);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 2); // largest first
        assert_eq!(clusters[1].len(), 1);
    }

    #[test]
    fn first_fit_joins_the_earliest_matching_cluster() {
        let results = vec![
            result("alpha beta gamma"),
            result("delta epsilon zeta"),
            result("alpha beta theta"),
        ];
        let clusters = cluster_claims(&results, 0.5);
        assert_eq!(clusters[0].len(), 2);
        assert_eq!(clusters[0][0].claim, "alpha beta gamma");
        assert_eq!(clusters[0][1].claim, "alpha beta theta");
    }

    #[test]
    fn no_claims_means_no_clusters() {
        assert!(cluster_claims(&[], 0.5).is_empty());
    }
}

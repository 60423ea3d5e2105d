use proptest::prelude::*;
use veracity_core::config::Policy;
use veracity_core::models::{ClaimResult, Decision, TruthLabel};
use veracity_pipeline::decision::decide;

fn label_strategy() -> impl Strategy<Value = TruthLabel> {
    prop_oneof![
        Just(TruthLabel::Verified),
        Just(TruthLabel::Refuted),
        Just(TruthLabel::Unsupported),
        Just(TruthLabel::RiskyAbsolute),
    ]
}

fn results_strategy() -> impl Strategy<Value = Vec<ClaimResult>> {
    prop::collection::vec(label_strategy(), 0..24).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| ClaimResult {
                claim: format!("claim {i}"),
                label,
                score: 0.0,
                evidence_ids: vec![],
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn any_refuted_claim_forces_reject(results in results_strategy()) {
        let decision = decide(&results, &Policy::default());
        if results.iter().any(|r| r.label == TruthLabel::Refuted) {
            prop_assert_eq!(decision, Decision::Reject);
        }
    }

    #[test]
    fn accept_iff_unanimously_verified(results in results_strategy()) {
        let decision = decide(&results, &Policy::default());
        let all_verified =
            !results.is_empty() && results.iter().all(|r| r.label == TruthLabel::Verified);
        prop_assert_eq!(decision == Decision::Accept, all_verified);
    }

    #[test]
    fn decision_never_yields_error(results in results_strategy()) {
        // ERROR is reserved for processing faults; aggregation cannot
        // produce it.
        prop_assert_ne!(decide(&results, &Policy::default()), Decision::Error);
    }

    #[test]
    fn decision_is_order_independent(results in results_strategy()) {
        let policy = Policy::default();
        let forward = decide(&results, &policy);
        let mut reversed = results;
        reversed.reverse();
        prop_assert_eq!(forward, decide(&reversed, &policy));
    }
}

use proptest::prelude::*;
use veracity_claims::MarkerExtractor;
use veracity_core::config::ExtractionMode;
use veracity_core::traits::IClaimExtractor;

proptest! {
    #[test]
    fn claim_count_never_exceeds_bound(text in ".{0,2000}", max_claims in 1usize..20) {
        let ex = MarkerExtractor::new();
        for mode in [ExtractionMode::Strict, ExtractionMode::Fallback] {
            let claims = ex.extract(&text, mode, max_claims);
            prop_assert!(claims.len() <= max_claims);
        }
    }

    #[test]
    fn extraction_is_deterministic(text in ".{0,500}") {
        let ex = MarkerExtractor::new();
        let a = ex.extract(&text, ExtractionMode::Strict, 10);
        let b = ex.extract(&text, ExtractionMode::Strict, 10);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn strict_claims_always_carry_a_marker_token(text in "[a-zA-Z .!?]{0,500}") {
        let ex = MarkerExtractor::new();
        for claim in ex.extract(&text, ExtractionMode::Strict, 10) {
            let has_marker = claim
                .to_lowercase()
                .split_whitespace()
                .any(|t| veracity_claims::PROPOSITIONAL_MARKERS.contains(&t));
            prop_assert!(has_marker, "claim without marker: {claim:?}");
        }
    }

    #[test]
    fn near_empty_input_yields_nothing(text in "[ -~]{0,4}") {
        let ex = MarkerExtractor::new();
        prop_assert!(ex.extract(&text, ExtractionMode::Fallback, 10).is_empty());
    }
}

use proptest::prelude::*;
use veracity_core::traits::IEvidenceRetriever;
use veracity_retrieval::{CorpusIndex, RetrievalEngine};

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{1,80}", 1..20)
}

proptest! {
    #[test]
    fn evidence_never_exceeds_top_k(
        docs in corpus_strategy(),
        claim in "[a-z ]{0,80}",
        top_k in 1usize..8,
    ) {
        let engine = RetrievalEngine::new(CorpusIndex::build(docs).unwrap());
        let items = engine.retrieve(&claim, top_k).unwrap();
        prop_assert!(items.len() <= top_k);
    }

    #[test]
    fn retrieval_is_deterministic(docs in corpus_strategy(), claim in "[a-z ]{0,80}") {
        let engine = RetrievalEngine::new(CorpusIndex::build(docs).unwrap());
        let a = engine.retrieve(&claim, 5).unwrap();
        let b = engine.retrieve(&claim, 5).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn scores_are_monotonically_non_increasing(
        docs in corpus_strategy(),
        claim in "[a-z ]{1,80}",
    ) {
        let engine = RetrievalEngine::new(CorpusIndex::build(docs).unwrap());
        let items = engine.retrieve(&claim, 20).unwrap();
        for pair in items.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }
}

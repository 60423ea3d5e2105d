//! RetrievalEngine — implements `IEvidenceRetriever` over a `CorpusIndex`.

use tracing::debug;
use veracity_core::errors::VeracityResult;
use veracity_core::models::{round3, EvidenceItem};
use veracity_core::traits::IEvidenceRetriever;

use crate::index::CorpusIndex;

/// Ranked evidence lookup. Owns the immutable index; safe to share across
/// request threads by reference.
pub struct RetrievalEngine {
    index: CorpusIndex,
}

impl RetrievalEngine {
    pub fn new(index: CorpusIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }
}

impl IEvidenceRetriever for RetrievalEngine {
    fn retrieve(&self, claim: &str, top_k: usize) -> VeracityResult<Vec<EvidenceItem>> {
        let ranked = self.index.rank(claim);

        let items: Vec<EvidenceItem> = ranked
            .into_iter()
            .take(top_k)
            .map(|(idx, score)| {
                let doc = self.index.document(idx);
                EvidenceItem {
                    source_id: doc.source_id.clone(),
                    text: doc.text.clone(),
                    relevance_score: round3(score),
                }
            })
            .collect();

        debug!(claim_len = claim.len(), evidence = items.len(), "evidence retrieved");
        Ok(items)
    }

    fn corpus_size(&self) -> usize {
        self.index.len()
    }
}

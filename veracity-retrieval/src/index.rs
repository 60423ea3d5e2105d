//! BM25 corpus index.
//!
//! Built once from a static document collection; immutable afterwards.
//! Scoring rewards rare terms that recur in the claim and saturates the
//! term-frequency contribution to avoid long-document bias.

use std::collections::HashMap;

use tracing::debug;
use veracity_core::errors::{CorpusError, VeracityResult};

/// BM25 shape parameters.
#[derive(Debug, Clone, Copy)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Document-length normalization strength.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// One indexed evidence document.
#[derive(Debug, Clone)]
pub(crate) struct IndexedDocument {
    pub source_id: String,
    pub text: String,
    pub token_count: usize,
    pub term_counts: HashMap<String, usize>,
}

/// The fixed, read-only evidence corpus with precomputed statistics.
#[derive(Debug)]
pub struct CorpusIndex {
    documents: Vec<IndexedDocument>,
    /// Number of documents containing each term.
    doc_freq: HashMap<String, usize>,
    avg_doc_len: f64,
    params: Bm25Params,
}

impl CorpusIndex {
    /// Build the index. An empty corpus is a fatal construction error.
    pub fn build(documents: Vec<String>) -> VeracityResult<Self> {
        Self::with_params(documents, Bm25Params::default())
    }

    pub fn with_params(documents: Vec<String>, params: Bm25Params) -> VeracityResult<Self> {
        if documents.is_empty() {
            return Err(CorpusError::EmptyCorpus.into());
        }

        let mut indexed = Vec::with_capacity(documents.len());
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut total_tokens = 0usize;

        for (idx, text) in documents.into_iter().enumerate() {
            let tokens = tokenize(&text);
            total_tokens += tokens.len();

            let mut term_counts: HashMap<String, usize> = HashMap::new();
            for token in tokens {
                *term_counts.entry(token).or_default() += 1;
            }
            for term in term_counts.keys() {
                *doc_freq.entry(term.clone()).or_default() += 1;
            }

            indexed.push(IndexedDocument {
                source_id: format!("doc-{idx}"),
                text,
                token_count: term_counts.values().sum(),
                term_counts,
            });
        }

        let avg_doc_len = total_tokens as f64 / indexed.len() as f64;
        debug!(
            documents = indexed.len(),
            vocabulary = doc_freq.len(),
            avg_doc_len,
            "corpus index built"
        );

        Ok(Self {
            documents: indexed,
            doc_freq,
            avg_doc_len,
            params,
        })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub(crate) fn document(&self, idx: usize) -> &IndexedDocument {
        &self.documents[idx]
    }

    /// Smoothed IDF, always positive: ln(1 + (N − df + 0.5) / (df + 0.5)).
    fn idf(&self, term: &str) -> f64 {
        let n = self.documents.len() as f64;
        let df = self.doc_freq.get(term).copied().unwrap_or(0) as f64;
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
    }

    /// BM25 score of one document against the claim's token bag.
    fn score_document(&self, doc: &IndexedDocument, claim_tokens: &[String]) -> f64 {
        let Bm25Params { k1, b } = self.params;
        let len_norm = 1.0 - b + b * (doc.token_count as f64 / self.avg_doc_len);

        claim_tokens
            .iter()
            .map(|term| {
                let tf = doc.term_counts.get(term).copied().unwrap_or(0) as f64;
                if tf == 0.0 {
                    return 0.0;
                }
                self.idf(term) * (tf * (k1 + 1.0)) / (tf + k1 * len_norm)
            })
            .sum()
    }

    /// Score every document against the claim and return `(index, score)`
    /// pairs sorted by score descending; the stable sort keeps corpus
    /// insertion order on ties.
    pub(crate) fn rank(&self, claim: &str) -> Vec<(usize, f64)> {
        let claim_tokens = tokenize(claim);

        let mut ranked: Vec<(usize, f64)> = self
            .documents
            .iter()
            .enumerate()
            .map(|(idx, doc)| (idx, self.score_document(doc, &claim_tokens)))
            .collect();

        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Whitespace-lowercased token bag.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clinical_index() -> CorpusIndex {
        CorpusIndex::build(vec![
            "Metformin is the recommended first line treatment for type 2 diabetes.".to_string(),
            "Insulin therapy may be required for patients with advanced type 2 diabetes.".to_string(),
            "Combining ACE inhibitors and ARBs is not recommended.".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn empty_corpus_is_fatal() {
        assert!(CorpusIndex::build(Vec::new()).is_err());
    }

    #[test]
    fn matching_terms_rank_the_right_document_first() {
        let index = clinical_index();
        let ranked = index.rank("metformin first line treatment");
        assert_eq!(ranked[0].0, 0);
        assert!(ranked[0].1 > ranked[1].1);
    }

    #[test]
    fn rare_terms_outweigh_common_ones() {
        let index = clinical_index();
        // "metformin" appears in 1 doc, "diabetes" in 2.
        assert!(index.idf("metformin") > index.idf("diabetes"));
    }

    #[test]
    fn idf_is_always_positive() {
        let index = clinical_index();
        // Even a term in every document keeps a positive weight.
        assert!(index.idf("is") > 0.0);
        assert!(index.idf("unseen-term") > 0.0);
    }

    #[test]
    fn unmatched_claim_scores_zero_everywhere() {
        let index = clinical_index();
        let ranked = index.rank("xylophone quartet rehearsal");
        assert!(ranked.iter().all(|(_, s)| *s == 0.0));
        // Ties keep insertion order.
        let order: Vec<usize> = ranked.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let index = clinical_index();
        assert_eq!(index.rank("insulin therapy"), index.rank("insulin therapy"));
    }
}

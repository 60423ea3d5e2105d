//! # veracity-retrieval
//!
//! Evidence retrieval against a fixed, read-only corpus. The index is built
//! once before the first request and never mutated; no online insertion or
//! removal exists. Ranking is BM25 over whitespace-lowercased token bags,
//! ties broken by corpus insertion order.

mod corpus;
mod engine;
mod index;

pub use corpus::load_documents;
pub use engine::RetrievalEngine;
pub use index::{Bm25Params, CorpusIndex};

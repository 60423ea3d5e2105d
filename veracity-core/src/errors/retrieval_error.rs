/// Evidence retrieval errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("ranking failed: {reason}")]
    RankingFailed { reason: String },
}

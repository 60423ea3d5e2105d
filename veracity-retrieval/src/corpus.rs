//! Corpus bootstrap: one evidence document per non-blank line.
//!
//! Corpus absence is a fatal startup condition, never a per-request error.

use std::fs;
use std::path::Path;

use tracing::info;
use veracity_core::errors::{CorpusError, VeracityResult};

/// Load evidence documents from a line-oriented file.
pub fn load_documents(path: &Path) -> VeracityResult<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|e| CorpusError::FileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let documents: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if documents.is_empty() {
        return Err(CorpusError::EmptyCorpus.into());
    }

    info!(documents = documents.len(), path = %path.display(), "corpus loaded");
    Ok(documents)
}

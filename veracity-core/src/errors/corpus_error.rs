/// Evidence corpus bootstrap errors.
///
/// Corpus problems are fatal at startup, never per-request.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus contains no documents")]
    EmptyCorpus,

    #[error("failed to read corpus file {path}: {reason}")]
    FileRead { path: String, reason: String },
}

/// Veracity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Semantic similarity at or above this verifies a claim against evidence.
pub const SEMANTIC_SUPPORT_THRESHOLD: f64 = 0.65;

/// Claim-normalized lexical overlap at or above this verifies a claim.
pub const LEXICAL_SUPPORT_THRESHOLD: f64 = 0.35;

/// Symmetric token-overlap ratio at or above this places two claims in the
/// same reporting cluster.
pub const CLUSTER_OVERLAP_THRESHOLD: f64 = 0.5;

/// Inputs shorter than this (after trimming) yield no claims in any mode.
pub const MIN_INPUT_CHARS: usize = 5;

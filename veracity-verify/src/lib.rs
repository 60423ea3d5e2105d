//! # veracity-verify
//!
//! Truth classification for one (claim, evidence) pair and reduction of
//! per-evidence verdicts into a single claim-level result.
//!
//! Classification is a pure function of its inputs given a deterministic
//! similarity backend, and it never fails — scoring problems degrade to a
//! neutral similarity instead of propagating.

pub mod classifier;
pub mod grounding;
pub mod selector;
pub mod signals;

pub use classifier::{ClassifierConfig, TruthClassifier};
pub use grounding::GroundingTable;
pub use selector::select_verdict;

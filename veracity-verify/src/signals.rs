//! Linguistic signals over claim token sets.
//!
//! Closed marker sets: no other token triggers negation or absoluteness.

use std::collections::HashSet;

/// Negation markers.
pub const NEGATION_TERMS: &[&str] = &["not", "no", "never", "avoid", "contraindicated"];

/// Absolute/universal qualifiers. Universal negative claims ("never used")
/// are the riskiest class of generated statement.
pub const ABSOLUTE_TERMS: &[&str] = &["never", "always", "guarantees", "completely"];

/// Lowercased whitespace token set.
pub fn token_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn has_negation(tokens: &HashSet<String>) -> bool {
    NEGATION_TERMS.iter().any(|t| tokens.contains(*t))
}

pub fn has_absolute(tokens: &HashSet<String>) -> bool {
    ABSOLUTE_TERMS.iter().any(|t| tokens.contains(*t))
}

/// |shared tokens| / |claim tokens| — claim-length normalized, not
/// symmetric.
pub fn lexical_overlap(claim_tokens: &HashSet<String>, evidence_tokens: &HashSet<String>) -> f64 {
    if claim_tokens.is_empty() {
        return 0.0;
    }
    let shared = claim_tokens.intersection(evidence_tokens).count();
    shared as f64 / claim_tokens.len() as f64
}

//! System-level decision aggregation.
//!
//! Two-tier safety contract over ALL claim results (never the cluster):
//! a hard REJECT gate, then all-or-nothing ACCEPT, then the policy's
//! configurable insufficiency action. Partial credit never yields ACCEPT.
//! The reduction is set-based over labels — claim order cannot change it.

use tracing::debug;
use veracity_core::config::Policy;
use veracity_core::models::{ClaimResult, Decision, TruthLabel};

/// Reduce all claim results to the single system decision under policy.
pub fn decide(results: &[ClaimResult], policy: &Policy) -> Decision {
    if results.is_empty() {
        debug!(action = %policy.on_insufficient, "no claims extracted");
        return policy.on_insufficient;
    }

    // Absolute safety rule: one contradiction rejects, whatever else holds.
    if results.iter().any(|r| r.label == TruthLabel::Refuted) {
        return Decision::Reject;
    }

    if results.iter().all(|r| r.label == TruthLabel::Verified) {
        return Decision::Accept;
    }

    policy.on_insufficient
}

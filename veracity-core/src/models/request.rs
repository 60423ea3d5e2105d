use serde::{Deserialize, Serialize};

use super::{ClaimResult, Decision, Metrics};

fn default_profile() -> String {
    "default".to_string()
}

/// One verification request as consumed by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub request_id: String,
    pub generated_text: String,
    #[serde(default = "default_profile")]
    pub domain: String,
    #[serde(default = "default_profile")]
    pub policy_profile: String,
}

impl VerificationRequest {
    /// Build a request with default domain and policy profile.
    pub fn new(request_id: impl Into<String>, generated_text: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            generated_text: generated_text.into(),
            domain: default_profile(),
            policy_profile: default_profile(),
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.policy_profile = profile.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}

/// The well-formed response every caller receives. Callers must branch on
/// `decision` — absence of a fault never implies ACCEPT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub decision: Decision,
    pub claims: Vec<ClaimResult>,
    pub metrics: Metrics,
    pub audit_id: String,
}

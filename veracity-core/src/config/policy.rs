use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::Decision;

use super::defaults;

/// Behavior when extraction yields no claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// No claims extracted means no claims — the insufficiency action fires.
    Strict,
    /// The whole trimmed input becomes a single claim when nothing passes
    /// the filters.
    Fallback,
}

/// Verification policy for one profile.
///
/// `min_support_rate` and `contradiction_threshold` are advisory reporting
/// knobs retained for evaluation; the decision rule itself is all-or-nothing
/// (any REFUTED claim rejects, ACCEPT requires unanimous VERIFIED).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub claim_extraction_mode: ExtractionMode,
    /// Upper bound on extracted claims per request.
    pub max_claims: usize,
    /// Upper bound on evidence items retrieved per claim.
    pub max_evidence_per_claim: usize,
    pub min_support_rate: f64,
    /// Decision when no claims are extracted or support is incomplete.
    pub on_insufficient: Decision,
    pub contradiction_threshold: f64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            claim_extraction_mode: defaults::DEFAULT_CLAIM_EXTRACTION_MODE,
            max_claims: defaults::DEFAULT_MAX_CLAIMS,
            max_evidence_per_claim: defaults::DEFAULT_MAX_EVIDENCE_PER_CLAIM,
            min_support_rate: defaults::DEFAULT_MIN_SUPPORT_RATE,
            on_insufficient: defaults::DEFAULT_ON_INSUFFICIENT,
            contradiction_threshold: defaults::DEFAULT_CONTRADICTION_THRESHOLD,
        }
    }
}

impl Policy {
    /// Validate invariants once at load time.
    pub fn validate(&self, profile: &str) -> Result<(), ConfigError> {
        if self.max_claims == 0 {
            return Err(ConfigError::InvalidPolicy {
                profile: profile.to_string(),
                reason: "max_claims must be at least 1".to_string(),
            });
        }
        if self.max_evidence_per_claim == 0 {
            return Err(ConfigError::InvalidPolicy {
                profile: profile.to_string(),
                reason: "max_evidence_per_claim must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.min_support_rate) {
            return Err(ConfigError::InvalidPolicy {
                profile: profile.to_string(),
                reason: format!("min_support_rate {} outside [0, 1]", self.min_support_rate),
            });
        }
        if !(0.0..=1.0).contains(&self.contradiction_threshold) {
            return Err(ConfigError::InvalidPolicy {
                profile: profile.to_string(),
                reason: format!(
                    "contradiction_threshold {} outside [0, 1]",
                    self.contradiction_threshold
                ),
            });
        }
        if self.on_insufficient == Decision::Error {
            return Err(ConfigError::InvalidPolicy {
                profile: profile.to_string(),
                reason: "on_insufficient must be a safety decision, not ERROR".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let p = Policy::default();
        assert_eq!(p.claim_extraction_mode, ExtractionMode::Strict);
        assert_eq!(p.max_claims, 10);
        assert_eq!(p.max_evidence_per_claim, 3);
        assert_eq!(p.min_support_rate, 0.6);
        assert_eq!(p.on_insufficient, Decision::Refuse);
        assert_eq!(p.contradiction_threshold, 0.0);
        assert!(p.validate("default").is_ok());
    }

    #[test]
    fn partial_profile_overrides_field_by_field() {
        let p: Policy = toml::from_str("max_claims = 5\n").unwrap();
        assert_eq!(p.max_claims, 5);
        // Everything else stays at defaults.
        assert_eq!(p.max_evidence_per_claim, 3);
        assert_eq!(p.on_insufficient, Decision::Refuse);
    }

    #[test]
    fn mode_and_decision_parse_from_toml() {
        let p: Policy = toml::from_str(
            "claim_extraction_mode = \"fallback\"\non_insufficient = \"REJECT\"\n",
        )
        .unwrap();
        assert_eq!(p.claim_extraction_mode, ExtractionMode::Fallback);
        assert_eq!(p.on_insufficient, Decision::Reject);
    }

    #[test]
    fn zero_max_claims_is_rejected() {
        let p = Policy {
            max_claims: 0,
            ..Default::default()
        };
        assert!(p.validate("bad").is_err());
    }

    #[test]
    fn error_as_insufficiency_action_is_rejected() {
        let p = Policy {
            on_insufficient: Decision::Error,
            ..Default::default()
        };
        assert!(p.validate("bad").is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sole externally meaningful outcome of a verification run.
///
/// `Error` signals a processing fault, not a safety judgment. Callers must
/// distinguish it from `Refuse`/`Reject` and map it to a fault status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Every claim verified — the text may reach the user.
    Accept,
    /// At least one claim contradicted by evidence.
    Reject,
    /// Insufficient grounds to accept; the conservative default.
    Refuse,
    /// Internal processing fault; no safety judgment was reached.
    Error,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Accept => "ACCEPT",
            Decision::Reject => "REJECT",
            Decision::Refuse => "REFUSE",
            Decision::Error => "ERROR",
        }
    }

    /// Whether this decision signals a processing fault rather than a
    /// safety judgment.
    pub fn is_fault(self) -> bool {
        matches!(self, Decision::Error)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

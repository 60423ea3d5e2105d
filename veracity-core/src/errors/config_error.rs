/// Policy configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read profile {path}: {reason}")]
    ProfileRead { path: String, reason: String },

    #[error("failed to parse profile {profile}: {reason}")]
    ProfileParse { profile: String, reason: String },

    #[error("invalid policy in profile {profile}: {reason}")]
    InvalidPolicy { profile: String, reason: String },
}

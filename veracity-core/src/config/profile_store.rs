use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::{ConfigError, VeracityResult};

use super::Policy;

/// Keyed policy store: one TOML file per named profile.
///
/// All profiles are read, merged over defaults, and validated once at
/// construction. Lookups never touch the filesystem; an unknown profile
/// name resolves to the defaults.
#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    profiles: HashMap<String, Policy>,
}

impl PolicyStore {
    /// A store with no named profiles — every lookup yields defaults.
    pub fn with_defaults_only() -> Self {
        Self::default()
    }

    /// Load every `<profile>.toml` under `dir`.
    ///
    /// A missing directory is not an error (defaults-only store); an
    /// unreadable or invalid profile file is fatal at startup.
    pub fn load(dir: &Path) -> VeracityResult<Self> {
        let mut profiles = HashMap::new();

        if !dir.exists() {
            debug!(dir = %dir.display(), "policy directory missing; defaults only");
            return Ok(Self { profiles });
        }

        let entries = fs::read_dir(dir).map_err(|e| ConfigError::ProfileRead {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::ProfileRead {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let raw = fs::read_to_string(&path).map_err(|e| ConfigError::ProfileRead {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            // `#[serde(default)]` on Policy gives field-level override of
            // the documented defaults.
            let policy: Policy = toml::from_str(&raw).map_err(|e| ConfigError::ProfileParse {
                profile: name.to_string(),
                reason: e.to_string(),
            })?;
            policy.validate(name)?;

            debug!(profile = name, "policy profile loaded");
            profiles.insert(name.to_string(), policy);
        }

        info!(profiles = profiles.len(), dir = %dir.display(), "policy store ready");
        Ok(Self { profiles })
    }

    /// Resolve a profile by name. Missing profile → defaults.
    pub fn get(&self, profile: &str) -> Policy {
        self.profiles.get(profile).cloned().unwrap_or_default()
    }

    pub fn contains(&self, profile: &str) -> bool {
        self.profiles.contains_key(profile)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

//! Access-control configuration

use crate::auth::rbac::RoleKey;
use crate::core::models::i18n::Language;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Access-control configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Role given to a profile created on first login
    #[serde(default = "default_role")]
    pub default_role: RoleKey,
    /// Language for labels when the caller does not ask for one
    #[serde(default)]
    pub default_language: Language,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            default_language: Language::default(),
        }
    }
}

impl AccessConfig {
    /// Merge access configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.default_language != Language::default() {
            self.default_language = other.default_language;
        }
        self
    }
}

fn default_role() -> RoleKey {
    RoleKey::SupportStaff
}

/// Warn when new profiles start above the most junior role
pub fn warn_privileged_default(config: &AccessConfig) {
    if config.default_role != default_role() {
        warn!(
            default_role = %config.default_role,
            "New profiles will be created with a role above support_staff"
        );
    }
}

//! Root configuration document

use super::{AccessConfig, LoggingConfig};
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};

/// Root of the YAML configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub access: AccessConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PortalConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from any variable source
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(role) = lookup("PORTAL_DEFAULT_ROLE") {
            config.access.default_role = role
                .parse()
                .map_err(|e| AccessError::config(format!("Invalid PORTAL_DEFAULT_ROLE: {}", e)))?;
        }
        if let Some(language) = lookup("PORTAL_LANGUAGE") {
            config.access.default_language = language
                .parse()
                .map_err(|e| AccessError::config(format!("Invalid PORTAL_LANGUAGE: {}", e)))?;
        }
        if let Some(level) = lookup("PORTAL_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = lookup("PORTAL_LOG_JSON") {
            config.logging.json = json
                .parse()
                .map_err(|e| AccessError::config(format!("Invalid PORTAL_LOG_JSON: {}", e)))?;
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

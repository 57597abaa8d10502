//! Configuration management
//!
//! Loading and validation of the portal's access-control settings.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub portal: PortalConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let portal: PortalConfig = serde_yaml::from_str(content)?;

        let config = Self { portal };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let portal = PortalConfig::from_env()?;
        let config = Self { portal };

        config.validate()?;
        Ok(config)
    }

    /// Get access configuration
    pub fn access(&self) -> &AccessConfig {
        &self.portal.access
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.portal.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.portal.validate().map_err(AccessError::Config)?;

        crate::config::models::access::warn_privileged_default(&self.portal.access);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.portal = self.portal.merge(other.portal);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.portal)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.portal)?)
    }
}

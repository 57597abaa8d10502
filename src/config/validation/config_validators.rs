//! Configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::{RoleKey, RoleRegistry};
use crate::config::models::*;
use tracing::debug;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

impl Validate for PortalConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating portal configuration");

        self.access
            .validate()
            .map_err(|e| format!("Access config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;

        Ok(())
    }
}

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        if self.default_role == RoleKey::SystemAdmin {
            return Err("Default role for new profiles cannot be system_admin".to_string());
        }

        if RoleRegistry::global().role(self.default_role).is_none() {
            return Err(format!(
                "Default role '{}' is not registered",
                self.default_role
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.trim().to_ascii_lowercase();
        if level.is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}

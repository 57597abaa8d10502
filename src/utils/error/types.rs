//! Core error type definitions

use thiserror::Error;

/// Result type alias for the access-control core
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the access-control core
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Registry or input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown role, permission, department or profile
    #[error("Not found: {0}")]
    NotFound(String),

    /// The acting profile is not allowed to perform the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl AccessError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            AccessError::Config(_) => "CONFIG_ERROR",
            AccessError::Io(_) => "IO_ERROR",
            AccessError::Yaml(_) => "YAML_ERROR",
            AccessError::Serialization(_) => "SERIALIZATION_ERROR",
            AccessError::Validation(_) => "VALIDATION_ERROR",
            AccessError::NotFound(_) => "NOT_FOUND",
            AccessError::Forbidden(_) => "FORBIDDEN",
        }
    }

    /// True for rejected administrative actions
    pub fn is_denial(&self) -> bool {
        matches!(self, AccessError::Forbidden(_))
    }
}

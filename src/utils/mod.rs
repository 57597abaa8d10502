//! Utility modules
//!
//! - **error**: Error types shared by configuration and administrative edits
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging setup

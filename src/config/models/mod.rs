//! Configuration data models

#![allow(missing_docs)]

pub mod access;
pub mod logging;
pub mod portal;

// Re-export all configuration types
pub use access::*;
pub use logging::*;
pub use portal::*;

//! Common test utilities for portal-rbac
//!
//! # Usage
//!
//! ```rust
//! use crate::common::ProfileFactory;
//!
//! #[test]
//! fn my_test() {
//!     let editor = ProfileFactory::with_role("editor");
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::ProfileFactory;

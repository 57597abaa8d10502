//! Core data structures
//!
//! Everything here is plain data; authorization decisions live in
//! [`crate::auth::rbac`].

pub mod models;

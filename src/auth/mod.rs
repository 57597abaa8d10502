//! Authorization
//!
//! Profiles arrive already authenticated and loaded by the caller; this
//! module only decides what they may do.

pub mod rbac;

pub use rbac::{PermissionCheck, Requirement, RoleConfig, RoleKey, RoleRegistry};
